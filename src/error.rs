use snafu::Snafu;

/// Errors raised while talking to the Google Identity Services script.
///
/// None of these reach the user of the `GoogleLogin` component. They are logged and the
/// remaining lifecycle steps continue.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GoogleOAuthError {
    #[snafu(display("GoogleOAuthError: window.google.accounts.id is not available"))]
    Unavailable,

    #[snafu(display("GoogleOAuthError: Could not serialize {what}: {source}"))]
    Serialize {
        what: &'static str,
        source: serde_wasm_bindgen::Error,
    },

    #[snafu(display("GoogleOAuthError: Call to '{method}' failed: {message}"))]
    Call {
        method: &'static str,
        message: String,
    },
}
