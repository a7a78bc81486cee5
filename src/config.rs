use leptos::prelude::Callback;
use serde::Serialize;
use std::fmt;
use url::Url;

/// Location of the Google Identity Services client library.
///
/// Loading it is left to the hosting application. Report its load state to
/// [`GoogleOAuthProvider`](crate::components::GoogleOAuthProvider).
pub const GSI_CLIENT_SCRIPT_URL: &str = "https://accounts.google.com/gsi/client";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonType {
    #[default]
    Standard,
    Icon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTheme {
    #[default]
    Outline,
    FilledBlue,
    FilledBlack,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonSize {
    #[default]
    Large,
    Medium,
    Small,
}

impl ButtonSize {
    /// Height in pixels the rendered button occupies.
    pub fn container_height(self) -> u32 {
        match self {
            ButtonSize::Large => 40,
            ButtonSize::Medium => 32,
            ButtonSize::Small => 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonText {
    SigninWith,
    SignupWith,
    ContinueWith,
    Signin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    Rectangular,
    Pill,
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoAlignment {
    Left,
    Center,
}

/// Visual options handed to `google.accounts.id.renderButton`.
///
/// Passed through verbatim. Combinations the vendor does not support are its concern.
#[derive(Clone, Default, Serialize)]
pub struct GsiButtonConfiguration {
    #[serde(rename = "type")]
    pub button_type: ButtonType,

    pub theme: ButtonTheme,

    pub size: ButtonSize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<ButtonText>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ButtonShape>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_alignment: Option<LogoAlignment>,

    /// Minimum button width in pixels, e.g. "400". The vendor caps this at 400.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Button language, e.g. "en" or "zh_CN". Defaults to the browser's locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Called whenever the button is clicked. Not serializable, attached separately.
    #[serde(skip)]
    pub click_listener: Option<Callback<()>>,
}

impl fmt::Debug for GsiButtonConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GsiButtonConfiguration")
            .field("button_type", &self.button_type)
            .field("theme", &self.theme)
            .field("size", &self.size)
            .field("text", &self.text)
            .field("shape", &self.shape)
            .field("logo_alignment", &self.logo_alignment)
            .field("width", &self.width)
            .field("locale", &self.locale)
            .field("click_listener", &self.click_listener.is_some())
            .finish()
    }
}

/// Only comparing the visual options. Listeners have no meaningful equality.
impl PartialEq for GsiButtonConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.button_type == other.button_type
            && self.theme == other.theme
            && self.size == other.size
            && self.text == other.text
            && self.shape == other.shape
            && self.logo_alignment == other.logo_alignment
            && self.width == other.width
            && self.locale == other.locale
    }
}

/// Title and wording of the One Tap prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptContext {
    Signin,
    Signup,
    Use,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UxMode {
    Popup,
    Redirect,
}

/// Options of `google.accounts.id.initialize`, besides `client_id` and `callback` which this
/// crate sets itself.
///
/// Unset options are left out, letting the vendor apply its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdConfiguration {
    /// Automatically return a credential when a single session previously approved the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_select: Option<bool>,

    /// Where the vendor posts the credential when `ux_mode` is `Redirect`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_uri: Option<Url>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_on_tap_outside: Option<bool>,

    /// DOM id of the element the One Tap prompt is rendered into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_parent_id: Option<String>,

    /// Echoed back in the ID token. Used by backends to mitigate replay attacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<PromptContext>,

    /// Parent domain when One Tap is shown on a subdomain and its state cookie must be shared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_cookie_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ux_mode: Option<UxMode>,

    /// Origins allowed to embed the intermediate iframe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_parent_origin: Option<Vec<String>>,

    /// Enables the upgraded One Tap UX on ITP browsers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itp_support: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_fedcm_for_prompt: Option<bool>,

    /// Restricts account selection to a Google Workspace domain.
    #[serde(rename = "hd", skip_serializing_if = "Option::is_none")]
    pub hosted_domain: Option<String>,
}
