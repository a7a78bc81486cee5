use crate::config::{GsiButtonConfiguration, IdConfiguration};
use crate::error::GoogleOAuthError;
use crate::response::{CredentialResponse, PromptMomentNotification};
use leptos::prelude::Callback;
use std::fmt;
use std::sync::Arc;

/// Receives every response the identity widget reports, with or without a credential.
pub type CredentialCallback = Arc<dyn Fn(CredentialResponse) + Send + Sync>;

/// Everything `google.accounts.id.initialize` is called with.
#[derive(Clone)]
pub struct Initialization {
    pub client_id: String,
    pub callback: CredentialCallback,
    pub options: IdConfiguration,
}

impl fmt::Debug for Initialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Initialization")
            .field("client_id", &self.client_id)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// The operations of a process-wide identity widget, `google.accounts.id` in the browser.
///
/// The widget is not owned by this crate. Implementations only forward calls to it.
pub trait IdentityWidget {
    /// Element type a button can be rendered into.
    type Container;

    /// Whether the widget API can currently be called.
    fn is_available(&self) -> bool;

    fn initialize(&self, initialization: &Initialization) -> Result<(), GoogleOAuthError>;

    fn render_button(
        &self,
        container: &Self::Container,
        config: &GsiButtonConfiguration,
    ) -> Result<(), GoogleOAuthError>;

    /// Displays the One Tap prompt.
    fn prompt(
        &self,
        listener: Option<Callback<(PromptMomentNotification,)>>,
    ) -> Result<(), GoogleOAuthError>;

    /// Closes the One Tap prompt.
    fn cancel(&self) -> Result<(), GoogleOAuthError>;

    /// Stops the widget from automatically selecting an account on the next prompt.
    fn disable_auto_select(&self) -> Result<(), GoogleOAuthError>;
}
