//!
//! Google sign-in for Leptos applications, using the Google Identity Services (GIS) script.
//!
//! ```no_run
//! use leptos::prelude::*;
//! use leptos_google_oauth::components::{GoogleLogin, GoogleOAuthProvider};
//! use leptos_google_oauth::{google_logout, CredentialResponse, GSI_CLIENT_SCRIPT_URL};
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     // This library does not load the GIS script. Do it yourself and report when it is ready.
//!     let (script_loaded, set_script_loaded) = signal(false);
//!
//!     view! {
//!         <script
//!             src=GSI_CLIENT_SCRIPT_URL
//!             on:load=move |_| set_script_loaded.set(true)
//!         ></script>
//!
//!         <GoogleOAuthProvider
//!             client_id="1234.apps.googleusercontent.com".to_owned()
//!             script_loaded=script_loaded
//!         >
//!             <SignIn/>
//!         </GoogleOAuthProvider>
//!     }
//! }
//!
//! #[component]
//! pub fn SignIn() -> impl IntoView {
//!     view! {
//!         <GoogleLogin
//!             // Send the credential to your backend and verify it there.
//!             on_success=|response: CredentialResponse| {
//!                 leptos::logging::log!("Signed in: {:?}", response.credential)
//!             }
//!             on_error=|| leptos::logging::warn!("Sign-in failed")
//!             use_one_tap=true
//!         />
//!         <button on:click=move |_| google_logout()>"Sign out"</button>
//!     }
//! }
//! ```
//!

mod binding;
pub mod components;
mod config;
mod context;
mod error;
mod gis;
mod hooks;
mod response;
pub mod widget;

// Library exports (additional to pub modules).
pub use config::*;
pub use context::*;
pub use error::GoogleOAuthError;
pub use gis::GoogleIdentityServices;
pub use hooks::*;
pub use response::*;

#[cfg(feature = "internals")]
pub mod internals {
    pub use crate::binding::BindingInputs;
    pub use crate::binding::BindingState;
    pub use crate::binding::WidgetBinding;
}
