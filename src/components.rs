use crate::binding::{BindingInputs, WidgetBinding};
use crate::config::{
    ButtonShape, ButtonSize, ButtonText, ButtonTheme, ButtonType, GsiButtonConfiguration,
    IdConfiguration, LogoAlignment,
};
use crate::gis::GoogleIdentityServices;
use crate::hooks::{provide_google_oauth, use_google_oauth};
use crate::response::{CredentialResponse, PromptMomentNotification};
use leptos::html::Div;
use leptos::prelude::*;
use std::sync::{Arc, Mutex, PoisonError};

/// Provide the client ID and the script load state to all sign-in components below.
///
/// # Example
/// ```no_run
/// use leptos::prelude::*;
/// use leptos_google_oauth::components::{GoogleLogin, GoogleOAuthProvider};
/// use leptos_google_oauth::CredentialResponse;
///
/// # #[component]
/// # fn Example() -> impl IntoView {
/// // Flip this once the script at `GSI_CLIENT_SCRIPT_URL` finished loading.
/// let (script_loaded, _set_script_loaded) = signal(false);
///
/// view! {
///     <GoogleOAuthProvider
///         client_id="1234.apps.googleusercontent.com".to_owned()
///         script_loaded=script_loaded
///     >
///         <GoogleLogin on_success=|response: CredentialResponse| {
///             leptos::logging::log!("{:?}", response.credential)
///         }/>
///     </GoogleOAuthProvider>
/// }
/// # }
/// ```
#[allow(clippy::must_use_candidate)]
#[component]
pub fn GoogleOAuthProvider(
    /// The OAuth client ID of your application.
    #[prop(into)]
    client_id: Signal<String>,

    /// Whether the Google Identity Services script finished loading successfully.
    #[prop(into)]
    script_loaded: Signal<bool>,

    children: Children,
) -> impl IntoView {
    let _context = provide_google_oauth(client_id, script_loaded);

    view! {
        { children() }
    }
}

/// Renders the "Sign in with Google" button and, optionally, the One Tap prompt.
///
/// Must be rendered below a [`GoogleOAuthProvider`]. Nothing is shown until the script is
/// loaded. Attributes given through `attr:` are applied to the container element.
///
/// The widget is reconfigured from scratch whenever the client ID, the load state of the
/// script, `use_one_tap`, any visual option, `id_configuration` or the container changes.
#[allow(clippy::must_use_candidate)]
#[component]
pub fn GoogleLogin(
    /// Called with every response carrying a credential.
    #[prop(into)]
    on_success: Callback<(CredentialResponse,)>,

    /// Called when a response carried no credential. Takes a closure without arguments.
    #[prop(into, optional)]
    on_error: Option<Callback<()>>,

    /// Informed about the display, skip and dismiss moments of the One Tap prompt.
    #[prop(into, optional)]
    prompt_moment_notification: Option<Callback<(PromptMomentNotification,)>>,

    /// Additionally show the One Tap prompt. It is cancelled when this component unmounts.
    #[prop(into, optional)]
    use_one_tap: MaybeProp<bool>,

    /// Defaults to `ButtonType::Standard`.
    #[prop(into, optional)]
    button_type: MaybeProp<ButtonType>,

    /// Defaults to `ButtonTheme::Outline`.
    #[prop(into, optional)]
    theme: MaybeProp<ButtonTheme>,

    /// Defaults to `ButtonSize::Large`.
    #[prop(into, optional)]
    size: MaybeProp<ButtonSize>,

    #[prop(into, optional)]
    text: MaybeProp<ButtonText>,

    #[prop(into, optional)]
    shape: MaybeProp<ButtonShape>,

    #[prop(into, optional)]
    logo_alignment: MaybeProp<LogoAlignment>,

    /// Minimum button width in pixels.
    #[prop(into, optional)]
    width: MaybeProp<String>,

    /// Language of the button text. Defaults to the browser's locale.
    #[prop(into, optional)]
    locale: MaybeProp<String>,

    /// Called whenever the button is clicked.
    #[prop(into, optional)]
    click_listener: Option<Callback<()>>,

    /// Options passed through to `google.accounts.id.initialize`.
    #[prop(into, optional)]
    id_configuration: MaybeProp<IdConfiguration>,

    /// Reference to the container element. Created internally when not given.
    #[prop(optional)]
    node_ref: Option<NodeRef<Div>>,
) -> impl IntoView {
    let context = use_google_oauth();
    let container = node_ref.unwrap_or_else(NodeRef::new);

    let binding = Arc::new(Mutex::new(WidgetBinding::new(GoogleIdentityServices)));

    Effect::new({
        let binding = binding.clone();
        move |_| {
            let inputs = BindingInputs {
                client_id: context.client_id.get(),
                script_loaded: context.script_loaded.get(),
                container: container.get().map(web_sys::HtmlElement::from),
                on_success,
                on_error,
                use_one_tap: use_one_tap.get().unwrap_or(false),
                prompt_moment_notification,
                button: GsiButtonConfiguration {
                    button_type: button_type.get().unwrap_or_default(),
                    theme: theme.get().unwrap_or_default(),
                    size: size.get().unwrap_or_default(),
                    text: text.get(),
                    shape: shape.get(),
                    logo_alignment: logo_alignment.get(),
                    width: width.get(),
                    locale: locale.get(),
                    click_listener,
                },
                id_configuration: id_configuration.get().unwrap_or_default(),
            };
            binding
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .reconcile(inputs);
        }
    });

    on_cleanup(move || {
        binding
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cleanup();
    });

    let height = move || format!("{}px", size.get().unwrap_or_default().container_height());

    view! {
        <div node_ref=container style:height=height></div>
    }
}
