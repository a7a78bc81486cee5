use crate::binding::{self, BindingInputs, WidgetBinding};
use crate::config::{GsiButtonConfiguration, IdConfiguration};
use crate::context::GoogleOAuthContext;
use crate::gis::GoogleIdentityServices;
use crate::response::{CredentialResponse, PromptMomentNotification};
use crate::widget::IdentityWidget;
use leptos::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Provides a [`GoogleOAuthContext`] to all components rendered below the caller.
///
/// The hosting application is responsible for loading
/// [`GSI_CLIENT_SCRIPT_URL`](crate::GSI_CLIENT_SCRIPT_URL) and for flipping `script_loaded`
/// once it did.
pub fn provide_google_oauth(
    client_id: impl Into<Signal<String>>,
    script_loaded: impl Into<Signal<bool>>,
) -> GoogleOAuthContext {
    let context = GoogleOAuthContext {
        client_id: client_id.into(),
        script_loaded: script_loaded.into(),
    };
    provide_context(context);
    context
}

/// Returns the [`GoogleOAuthContext`] provided by an ancestor.
///
/// # Panics
/// If no `GoogleOAuthProvider` (or `provide_google_oauth` call) exists above the caller.
pub fn use_google_oauth() -> GoogleOAuthContext {
    expect_context::<GoogleOAuthContext>()
}

/// Like [`use_google_oauth`], but returning `None` instead of panicking.
pub fn try_use_google_oauth() -> Option<GoogleOAuthContext> {
    use_context::<GoogleOAuthContext>()
}

pub struct UseGoogleOneTapLoginOptions {
    /// Called with every response carrying a credential.
    pub on_success: Callback<(CredentialResponse,)>,

    /// Called when a response did not carry a credential.
    pub on_error: Option<Callback<()>>,

    /// Informed about the display, skip and dismiss moments of the prompt.
    pub prompt_moment_notification: Option<Callback<(PromptMomentNotification,)>>,

    /// The prompt is not shown and the widget is left untouched while this is `true`.
    pub disabled: Signal<bool>,

    pub id_configuration: Signal<IdConfiguration>,
}

impl UseGoogleOneTapLoginOptions {
    pub fn new(on_success: impl Into<Callback<(CredentialResponse,)>>) -> Self {
        Self {
            on_success: on_success.into(),
            on_error: None,
            prompt_moment_notification: None,
            disabled: Signal::from(false),
            id_configuration: Signal::from(IdConfiguration::default()),
        }
    }
}

/// Shows the One Tap prompt without rendering a sign-in button.
///
/// The prompt is shown again whenever the client ID, the load state of the script, `disabled`
/// or `id_configuration` changes, and cancelled when the calling component is unmounted.
/// While `disabled` is `true`, `google.accounts.id` is not touched at all.
pub fn use_google_one_tap_login(options: UseGoogleOneTapLoginOptions) {
    let context = use_google_oauth();
    let UseGoogleOneTapLoginOptions {
        on_success,
        on_error,
        prompt_moment_notification,
        disabled,
        id_configuration,
    } = options;

    let binding = Arc::new(Mutex::new(WidgetBinding::new(GoogleIdentityServices)));

    Effect::new({
        let binding = binding.clone();
        move |_| {
            let inputs = BindingInputs {
                client_id: context.client_id.get(),
                script_loaded: context.script_loaded.get(),
                container: None,
                on_success,
                on_error,
                use_one_tap: !disabled.get(),
                prompt_moment_notification,
                button: GsiButtonConfiguration::default(),
                id_configuration: id_configuration.get(),
            };
            reconcile_one_tap(
                &mut binding.lock().unwrap_or_else(PoisonError::into_inner),
                inputs,
            );
        }
    });

    on_cleanup(move || {
        binding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cleanup();
    });
}

/// While the prompt is disabled, the widget is only cleaned up and never initialized.
fn reconcile_one_tap<W: IdentityWidget>(
    binding: &mut WidgetBinding<W>,
    inputs: BindingInputs<W::Container>,
) {
    if inputs.use_one_tap {
        binding.reconcile(inputs);
    } else {
        tracing::trace!("One Tap disabled. Leaving the widget untouched.");
        binding.cleanup();
    }
}

/// Stops One Tap from automatically signing the user in again. Call this when your
/// application signs the user out.
///
/// Does nothing if the Google Identity Services script is not loaded.
pub fn google_logout() {
    binding::disable_auto_select(&GoogleIdentityServices);
}
