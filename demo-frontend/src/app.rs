use crate::environment::ENVIRONMENT;
use leptos::prelude::*;
use leptos_google_oauth::components::{GoogleLogin, GoogleOAuthProvider};
use leptos_google_oauth::{
    ButtonShape, ButtonText, ButtonTheme, CredentialResponse, GSI_CLIENT_SCRIPT_URL,
    PromptMomentNotification, google_logout,
};

#[component]
pub fn App() -> impl IntoView {
    let (script_loaded, set_script_loaded) = signal(false);

    view! {
        <script
            src=GSI_CLIENT_SCRIPT_URL
            on:load=move |_| {
                tracing::info!("Google Identity Services script loaded");
                set_script_loaded.set(true);
            }
            on:error=move |_| tracing::error!("Could not load the Google Identity Services script")
        ></script>

        <main style=r#"
            display: flex;
            flex-direction: column;
            align-items: center;
            gap: 1em;
            padding: 1em;
        "#>
            <GoogleOAuthProvider
                client_id=ENVIRONMENT.google_client_id.to_owned()
                script_loaded=script_loaded
            >
                <SignIn/>
            </GoogleOAuthProvider>
        </main>
    }
}

#[component]
pub fn SignIn() -> impl IntoView {
    let (credential, set_credential) = signal::<Option<String>>(None);
    let (last_error, set_last_error) = signal::<Option<String>>(None);
    let (use_one_tap, set_use_one_tap) = signal(true);
    let (theme, set_theme) = signal(ButtonTheme::Outline);

    view! {
        <h1>"Sign in with Google"</h1>

        <GoogleLogin
            attr:id="google-login"
            on_success=move |response: CredentialResponse| {
                tracing::info!(select_by = ?response.select_by, "Signed in");
                set_last_error.set(None);
                set_credential.set(response.credential);
            }
            on_error=move || set_last_error.set(Some("No credential received.".to_owned()))
            prompt_moment_notification=move |notification: PromptMomentNotification| {
                tracing::debug!(?notification, "One Tap moment");
            }
            use_one_tap=use_one_tap
            theme=theme
            text=ButtonText::ContinueWith
            shape=ButtonShape::Pill
        />

        <label>
            <input
                type="checkbox"
                prop:checked=use_one_tap
                on:change=move |_| set_use_one_tap.update(|it| *it = !*it)
            />
            "Show One Tap"
        </label>

        <button on:click=move |_| {
            set_theme.update(|it| {
                *it = match it {
                    ButtonTheme::Outline => ButtonTheme::FilledBlue,
                    ButtonTheme::FilledBlue => ButtonTheme::FilledBlack,
                    ButtonTheme::FilledBlack => ButtonTheme::Outline,
                }
            })
        }>
            "Switch theme"
        </button>

        <button
            id="logout"
            on:click=move |_| {
                google_logout();
                set_credential.set(None);
            }
        >
            "Sign out"
        </button>

        <div id="last-error">{ move || last_error.get() }</div>

        <pre id="credential" style="max-width: 40em; white-space: pre-wrap; word-break: break-all;">
            { move || credential.get().unwrap_or_else(|| "Not signed in.".to_owned()) }
        </pre>
    }
}
