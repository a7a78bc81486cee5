use leptos::prelude::*;

/// State shared by every Google sign-in component rendered below a
/// [`GoogleOAuthProvider`](crate::components::GoogleOAuthProvider).
///
/// Provided as context. Use
/// ```no_run
/// use leptos_google_oauth::use_google_oauth;
///
/// let context = use_google_oauth();
/// ```
/// to access it.
#[derive(Debug, Clone, Copy)]
pub struct GoogleOAuthContext {
    /// The OAuth client ID of your application, as configured in the Google Cloud console.
    pub client_id: Signal<String>,

    /// `true` once the Google Identity Services script finished loading successfully.
    /// No widget is configured before that.
    pub script_loaded: Signal<bool>,
}
