use crate::binding::run_if_alive;
use crate::config::GsiButtonConfiguration;
use crate::error::{CallSnafu, GoogleOAuthError, SerializeSnafu, UnavailableSnafu};
use crate::response::{CredentialResponse, PromptMomentNotification};
use crate::widget::{IdentityWidget, Initialization};
use js_sys::{Array, Function, Reflect};
use leptos::prelude::*;
use serde::Serialize;
use snafu::{OptionExt, ResultExt};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// Notification object passed to a prompt moment listener.
    type JsPromptMomentNotification;

    #[wasm_bindgen(method, js_name = getMomentType)]
    fn get_moment_type(this: &JsPromptMomentNotification) -> String;

    #[wasm_bindgen(method, js_name = getNotDisplayedReason)]
    fn get_not_displayed_reason(this: &JsPromptMomentNotification) -> Option<String>;

    #[wasm_bindgen(method, js_name = getSkippedReason)]
    fn get_skipped_reason(this: &JsPromptMomentNotification) -> Option<String>;

    #[wasm_bindgen(method, js_name = getDismissedReason)]
    fn get_dismissed_reason(this: &JsPromptMomentNotification) -> Option<String>;
}

fn read_notification(js: &JsPromptMomentNotification) -> PromptMomentNotification {
    PromptMomentNotification::from_parts(
        &js.get_moment_type(),
        js.get_not_displayed_reason(),
        js.get_skipped_reason(),
        js.get_dismissed_reason(),
    )
}

/// Forwards to `window.google.accounts.id`, as installed by the GIS client script.
///
/// Holds no state. Every call looks the API up anew, so the script may finish loading at any
/// point in time.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoogleIdentityServices;

impl GoogleIdentityServices {
    fn accounts_id() -> Result<JsValue, GoogleOAuthError> {
        let window = web_sys::window().context(UnavailableSnafu)?;
        let mut current: JsValue = window.into();
        for key in ["google", "accounts", "id"] {
            current = Reflect::get(&current, &JsValue::from_str(key))
                .ok()
                .filter(JsValue::is_object)
                .context(UnavailableSnafu)?;
        }
        Ok(current)
    }

    fn call(method: &'static str, args: &[&JsValue]) -> Result<JsValue, GoogleOAuthError> {
        let id = Self::accounts_id()?;
        let function = Reflect::get(&id, &JsValue::from_str(method))
            .ok()
            .and_then(|value| value.dyn_into::<Function>().ok())
            .context(CallSnafu {
                method,
                message: "not a function",
            })?;
        let arguments = Array::new();
        for arg in args {
            arguments.push(arg);
        }
        function.apply(&id, &arguments).map_err(|err| {
            CallSnafu {
                method,
                message: format!("{err:?}"),
            }
            .build()
        })
    }
}

fn to_js<T: Serialize>(what: &'static str, value: &T) -> Result<JsValue, GoogleOAuthError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).context(SerializeSnafu { what })
}

fn set(
    method: &'static str,
    target: &JsValue,
    key: &str,
    value: &JsValue,
) -> Result<(), GoogleOAuthError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| {
            CallSnafu {
                method,
                message: format!("could not set '{key}': {err:?}"),
            }
            .build()
        })
}

impl IdentityWidget for GoogleIdentityServices {
    type Container = web_sys::HtmlElement;

    fn is_available(&self) -> bool {
        Self::accounts_id().is_ok()
    }

    fn initialize(&self, initialization: &Initialization) -> Result<(), GoogleOAuthError> {
        let config = to_js("id configuration", &initialization.options)?;
        set(
            "initialize",
            &config,
            "client_id",
            &JsValue::from_str(&initialization.client_id),
        )?;

        let callback = initialization.callback.clone();
        let callback = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            let response = serde_wasm_bindgen::from_value::<CredentialResponse>(value)
                .unwrap_or_else(|err| {
                    tracing::warn!(?err, "Could not decode credential response.");
                    CredentialResponse::default()
                });
            callback(response);
        });
        set("initialize", &config, "callback", &callback.into_js_value())?;

        Self::call("initialize", &[&config]).map(|_| ())
    }

    fn render_button(
        &self,
        container: &Self::Container,
        config: &GsiButtonConfiguration,
    ) -> Result<(), GoogleOAuthError> {
        let options = to_js("button configuration", config)?;
        if let Some(click_listener) = config.click_listener {
            let listener = Closure::<dyn Fn()>::new(move || {
                run_if_alive("click_listener", click_listener, ());
            });
            set("renderButton", &options, "click_listener", &listener.into_js_value())?;
        }
        Self::call("renderButton", &[container.as_ref(), &options]).map(|_| ())
    }

    fn prompt(
        &self,
        listener: Option<Callback<(PromptMomentNotification,)>>,
    ) -> Result<(), GoogleOAuthError> {
        match listener {
            Some(listener) => {
                let listener = Closure::<dyn Fn(JsPromptMomentNotification)>::new(
                    move |notification: JsPromptMomentNotification| {
                        run_if_alive(
                            "prompt_moment_notification",
                            listener,
                            (read_notification(&notification),),
                        );
                    },
                );
                Self::call("prompt", &[&listener.into_js_value()]).map(|_| ())
            }
            None => Self::call("prompt", &[]).map(|_| ()),
        }
    }

    fn cancel(&self) -> Result<(), GoogleOAuthError> {
        Self::call("cancel", &[]).map(|_| ())
    }

    fn disable_auto_select(&self) -> Result<(), GoogleOAuthError> {
        Self::call("disableAutoSelect", &[]).map(|_| ())
    }
}
