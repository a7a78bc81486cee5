use crate::config::{GsiButtonConfiguration, IdConfiguration};
use crate::error::GoogleOAuthError;
use crate::response::{CredentialResponse, PromptMomentNotification};
use crate::widget::{IdentityWidget, Initialization};
use leptos::prelude::*;
use std::sync::Arc;

/// Everything one reconcile pass depends on. Captured fresh whenever a tracked input changes.
pub struct BindingInputs<C> {
    pub client_id: String,
    pub script_loaded: bool,

    /// Element to render the button into. No button is rendered when absent.
    pub container: Option<C>,

    pub on_success: Callback<(CredentialResponse,)>,
    pub on_error: Option<Callback<()>>,

    pub use_one_tap: bool,
    pub prompt_moment_notification: Option<Callback<(PromptMomentNotification,)>>,

    pub button: GsiButtonConfiguration,
    pub id_configuration: IdConfiguration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// Nothing was handed to the widget, or everything handed to it was cleaned up.
    Idle,

    /// The widget was initialized by the last reconcile.
    Configured { one_tap: bool },
}

/// Keeps an [`IdentityWidget`] in sync with the inputs of a component.
///
/// Every [`reconcile`](WidgetBinding::reconcile) fully redoes the configuration, after
/// cleaning up what the previous one left behind.
#[derive(Debug)]
pub struct WidgetBinding<W> {
    widget: W,
    state: BindingState,
}

impl<W: IdentityWidget> WidgetBinding<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            state: BindingState::Idle,
        }
    }

    #[cfg(any(test, feature = "internals"))]
    pub fn state(&self) -> BindingState {
        self.state
    }

    /// Initializes the widget, renders the button and triggers the prompt, in that order.
    ///
    /// Does nothing (leaving the binding idle) while the script is not loaded or the widget is
    /// not reachable.
    pub fn reconcile(&mut self, inputs: BindingInputs<W::Container>) {
        self.cleanup();

        if !inputs.script_loaded {
            tracing::debug!("Identity script not loaded yet. Skipping widget configuration.");
            return;
        }

        if !self.widget.is_available() {
            tracing::warn!(
                "Identity script reported as loaded, but the widget API is not available. Skipping widget configuration."
            );
            return;
        }

        let on_success = inputs.on_success;
        let on_error = inputs.on_error;

        tracing::trace!(client_id = %inputs.client_id, "Initializing identity widget");
        log_failure(self.widget.initialize(&Initialization {
            client_id: inputs.client_id,
            callback: Arc::new(move |response| {
                route_credential_response(response, on_success, on_error)
            }),
            options: inputs.id_configuration,
        }));

        if let Some(container) = &inputs.container {
            tracing::trace!(button = ?inputs.button, "Rendering sign-in button");
            log_failure(self.widget.render_button(container, &inputs.button));
        }

        if inputs.use_one_tap {
            tracing::trace!("Prompting One Tap");
            log_failure(self.widget.prompt(inputs.prompt_moment_notification));
        }

        self.state = BindingState::Configured {
            one_tap: inputs.use_one_tap,
        };
    }

    /// Cancels the One Tap prompt if the last configuration showed it. Always leaves the
    /// binding idle.
    pub fn cleanup(&mut self) {
        let previous = std::mem::replace(&mut self.state, BindingState::Idle);
        if let BindingState::Configured { one_tap: true } = previous {
            tracing::trace!("Cancelling One Tap");
            log_failure(self.widget.cancel());
        }
    }
}

/// Responses without a usable credential are reported as errors, everything else is handed
/// to `on_success` unchanged.
pub(crate) fn route_credential_response(
    response: CredentialResponse,
    on_success: Callback<(CredentialResponse,)>,
    on_error: Option<Callback<()>>,
) {
    if response.has_credential() {
        run_if_alive("on_success", on_success, (response,));
    } else {
        tracing::debug!("Credential response carried no credential");
        if let Some(on_error) = on_error {
            run_if_alive("on_error", on_error, ());
        }
    }
}

/// Runs `callback` unless its owner was disposed in the meantime.
///
/// The widget keeps every function handed to it for the lifetime of the page, so it may call
/// back long after the component that supplied the callback is gone.
pub(crate) fn run_if_alive<In: 'static, Out: 'static>(
    name: &'static str,
    callback: Callback<In, Out>,
    input: In,
) -> Option<Out> {
    if !callback.matches(&callback) {
        tracing::debug!(callback = name, "Callback was disposed. Dropping widget event.");
        return None;
    }
    Some(callback.run(input))
}

/// Stops automatic account selection on the given widget. No-op if it is unreachable.
pub(crate) fn disable_auto_select<W: IdentityWidget>(widget: &W) {
    if !widget.is_available() {
        tracing::debug!("Widget API not available. Nothing to log out from.");
        return;
    }
    log_failure(widget.disable_auto_select());
}

fn log_failure(result: Result<(), GoogleOAuthError>) {
    if let Err(err) = result {
        tracing::error!(?err, "Identity widget call failed");
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::response::PromptMoment;
    use assertr::prelude::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Initialize {
            client_id: String,
            options: serde_json::Value,
        },
        RenderButton {
            container: &'static str,
            config: serde_json::Value,
        },
        Prompt {
            with_listener: bool,
        },
        Cancel,
        DisableAutoSelect,
    }

    /// Records every call and keeps the latest callbacks around to be fired by a test.
    #[derive(Clone)]
    pub(crate) struct RecordingWidget {
        pub available: bool,
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub credential_callback: Arc<Mutex<Option<crate::widget::CredentialCallback>>>,
        pub prompt_listener: Arc<Mutex<Option<Callback<(PromptMomentNotification,)>>>>,
    }

    impl RecordingWidget {
        pub fn new() -> Self {
            Self {
                available: true,
                calls: Arc::new(Mutex::new(Vec::new())),
                credential_callback: Arc::new(Mutex::new(None)),
                prompt_listener: Arc::new(Mutex::new(None)),
            }
        }

        pub fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::new()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn respond(&self, response: CredentialResponse) {
            let callback = self
                .credential_callback
                .lock()
                .unwrap()
                .clone()
                .expect("widget to be initialized");
            callback(response);
        }
    }

    impl IdentityWidget for RecordingWidget {
        type Container = &'static str;

        fn is_available(&self) -> bool {
            self.available
        }

        fn initialize(&self, initialization: &Initialization) -> Result<(), GoogleOAuthError> {
            self.calls.lock().unwrap().push(Call::Initialize {
                client_id: initialization.client_id.clone(),
                options: serde_json::to_value(&initialization.options).unwrap(),
            });
            *self.credential_callback.lock().unwrap() = Some(initialization.callback.clone());
            Ok(())
        }

        fn render_button(
            &self,
            container: &Self::Container,
            config: &GsiButtonConfiguration,
        ) -> Result<(), GoogleOAuthError> {
            self.calls.lock().unwrap().push(Call::RenderButton {
                container: *container,
                config: serde_json::to_value(config).unwrap(),
            });
            Ok(())
        }

        fn prompt(
            &self,
            listener: Option<Callback<(PromptMomentNotification,)>>,
        ) -> Result<(), GoogleOAuthError> {
            self.calls.lock().unwrap().push(Call::Prompt {
                with_listener: listener.is_some(),
            });
            *self.prompt_listener.lock().unwrap() = listener;
            Ok(())
        }

        fn cancel(&self) -> Result<(), GoogleOAuthError> {
            self.calls.lock().unwrap().push(Call::Cancel);
            Ok(())
        }

        fn disable_auto_select(&self) -> Result<(), GoogleOAuthError> {
            self.calls.lock().unwrap().push(Call::DisableAutoSelect);
            Ok(())
        }
    }

    struct Recorded {
        successes: Arc<Mutex<Vec<CredentialResponse>>>,
        errors: Arc<Mutex<usize>>,
    }

    fn handlers() -> (Callback<(CredentialResponse,)>, Callback<()>, Recorded) {
        let successes = Arc::new(Mutex::new(Vec::new()));
        let errors = Arc::new(Mutex::new(0));
        let on_success = Callback::new({
            let successes = successes.clone();
            move |(response,): (CredentialResponse,)| successes.lock().unwrap().push(response)
        });
        let on_error = Callback::new({
            let errors = errors.clone();
            move |()| *errors.lock().unwrap() += 1
        });
        (on_success, on_error, Recorded { successes, errors })
    }

    fn inputs(
        on_success: Callback<(CredentialResponse,)>,
        on_error: Option<Callback<()>>,
    ) -> BindingInputs<&'static str> {
        BindingInputs {
            client_id: "abc123".to_owned(),
            script_loaded: true,
            container: Some("container"),
            on_success,
            on_error,
            use_one_tap: false,
            prompt_moment_notification: None,
            button: GsiButtonConfiguration::default(),
            id_configuration: IdConfiguration::default(),
        }
    }

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn does_nothing_while_script_is_not_loaded() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            for use_one_tap in [false, true] {
                binding.reconcile(BindingInputs {
                    script_loaded: false,
                    use_one_tap,
                    ..inputs(on_success, Some(on_error))
                });
            }
            binding.cleanup();

            assert_that(widget.calls()).is_equal_to(Vec::<Call>::new());
            assert_that(binding.state()).is_equal_to(BindingState::Idle);
        });
    }

    #[test]
    fn skips_silently_when_widget_is_unavailable_although_loaded() {
        with_owner(|| {
            let widget = RecordingWidget::unavailable();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            binding.reconcile(BindingInputs {
                use_one_tap: true,
                ..inputs(on_success, Some(on_error))
            });
            binding.cleanup();

            assert_that(widget.calls()).is_equal_to(Vec::<Call>::new());
        });
    }

    #[test]
    fn configures_and_renders_default_button_without_prompt() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            binding.reconcile(inputs(on_success, Some(on_error)));

            assert_that(widget.calls()).is_equal_to(vec![
                Call::Initialize {
                    client_id: "abc123".to_owned(),
                    options: json!({}),
                },
                Call::RenderButton {
                    container: "container",
                    config: json!({ "type": "standard", "theme": "outline", "size": "large" }),
                },
            ]);
            assert_that(binding.state())
                .is_equal_to(BindingState::Configured { one_tap: false });

            binding.cleanup();
            assert_that(widget.calls().contains(&Call::Cancel)).is_false();
        });
    }

    #[test]
    fn passes_id_configuration_through() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, _, _) = handlers();

            binding.reconcile(BindingInputs {
                id_configuration: IdConfiguration {
                    auto_select: Some(true),
                    nonce: Some("n-0S6_WzA2Mj".to_owned()),
                    ..Default::default()
                },
                ..inputs(on_success, None)
            });

            assert_that(widget.calls().first().cloned()).is_equal_to(Some(Call::Initialize {
                client_id: "abc123".to_owned(),
                options: json!({ "auto_select": true, "nonce": "n-0S6_WzA2Mj" }),
            }));
        });
    }

    #[test]
    fn renders_no_button_without_container() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            binding.reconcile(BindingInputs {
                container: None,
                ..inputs(on_success, Some(on_error))
            });

            assert_that(widget.calls().len()).is_equal_to(1);
            assert_that(matches!(widget.calls()[0], Call::Initialize { .. })).is_true();
        });
    }

    #[test]
    fn one_tap_prompts_after_render_and_cancels_once_on_unmount() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            let moments = Arc::new(Mutex::new(Vec::new()));
            let listener = Callback::new({
                let moments = moments.clone();
                move |(notification,): (PromptMomentNotification,)| {
                    moments.lock().unwrap().push(notification)
                }
            });

            binding.reconcile(BindingInputs {
                use_one_tap: true,
                prompt_moment_notification: Some(listener),
                ..inputs(on_success, Some(on_error))
            });

            let calls = widget.calls();
            assert_that(calls.len()).is_equal_to(3);
            assert_that(matches!(calls[1], Call::RenderButton { .. })).is_true();
            assert_that(calls[2].clone()).is_equal_to(Call::Prompt {
                with_listener: true,
            });

            // The listener handed to the widget is the one we supplied.
            let forwarded = widget.prompt_listener.lock().unwrap().expect("listener");
            forwarded.run((PromptMomentNotification::from_parts(
                "skipped", None, None, None,
            ),));
            assert_that(moments.lock().unwrap().len()).is_equal_to(1);
            assert_that(moments.lock().unwrap()[0].moment.clone())
                .is_equal_to(PromptMoment::Skipped { reason: None });

            // Unmount.
            binding.cleanup();
            binding.cleanup();

            let cancels = widget
                .calls()
                .into_iter()
                .filter(|call| *call == Call::Cancel)
                .count();
            assert_that(cancels).is_equal_to(1);
            assert_that(binding.state()).is_equal_to(BindingState::Idle);
        });
    }

    #[test]
    fn reconfiguration_cancels_previous_prompt_before_redoing_everything() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, _) = handlers();

            binding.reconcile(BindingInputs {
                use_one_tap: true,
                ..inputs(on_success, Some(on_error))
            });
            binding.reconcile(BindingInputs {
                use_one_tap: true,
                client_id: "other".to_owned(),
                ..inputs(on_success, Some(on_error))
            });

            let calls = widget.calls();
            assert_that(calls.len()).is_equal_to(7);
            assert_that(calls[3].clone()).is_equal_to(Call::Cancel);
            assert_that(calls[4].clone()).is_equal_to(Call::Initialize {
                client_id: "other".to_owned(),
                options: json!({}),
            });
            assert_that(calls[6].clone()).is_equal_to(Call::Prompt {
                with_listener: false,
            });
        });
    }

    #[test]
    fn credential_is_forwarded_unchanged_to_success_handler() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, recorded) = handlers();
            binding.reconcile(inputs(on_success, Some(on_error)));

            let response: CredentialResponse = serde_json::from_value(json!({
                "credential": "header.payload.signature",
                "select_by": "btn",
                "clientId": "abc123",
            }))
            .unwrap();
            widget.respond(response.clone());

            assert_that(recorded.successes.lock().unwrap().clone()).is_equal_to(vec![response]);
            assert_that(*recorded.errors.lock().unwrap()).is_equal_to(0);
        });
    }

    #[test]
    fn empty_or_missing_credential_calls_error_handler_once() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());
            let (on_success, on_error, recorded) = handlers();
            binding.reconcile(inputs(on_success, Some(on_error)));

            widget.respond(serde_json::from_value(json!({ "credential": "" })).unwrap());
            assert_that(*recorded.errors.lock().unwrap()).is_equal_to(1);

            widget.respond(CredentialResponse::default());
            assert_that(*recorded.errors.lock().unwrap()).is_equal_to(2);

            assert_that(recorded.successes.lock().unwrap().len()).is_equal_to(0);
        });
    }

    #[test]
    fn missing_credential_without_error_handler_is_swallowed() {
        with_owner(|| {
            let (on_success, _, recorded) = handlers();
            route_credential_response(CredentialResponse::default(), on_success, None);
            assert_that(recorded.successes.lock().unwrap().len()).is_equal_to(0);
        });
    }

    #[test]
    fn responses_after_owner_disposal_are_dropped() {
        with_owner(|| {
            let widget = RecordingWidget::new();
            let mut binding = WidgetBinding::new(widget.clone());

            let component = Owner::current().expect("owner").child();
            let (on_success, on_error, recorded) = component.with(handlers);
            binding.reconcile(inputs(on_success, Some(on_error)));

            // The widget outlives the component that supplied the handlers.
            component.cleanup();

            widget.respond(serde_json::from_value(json!({ "credential": "jwt" })).unwrap());
            widget.respond(CredentialResponse::default());

            assert_that(recorded.successes.lock().unwrap().len()).is_equal_to(0);
            assert_that(*recorded.errors.lock().unwrap()).is_equal_to(0);
        });
    }

    #[test]
    fn run_if_alive_reports_whether_callback_ran() {
        with_owner(|| {
            let component = Owner::current().expect("owner").child();
            let double = component.with(|| Callback::new(|(x,): (i32,)| x * 2));

            assert_that(run_if_alive("double", double, (21,))).is_equal_to(Some(42));

            component.cleanup();
            assert_that(run_if_alive("double", double, (21,))).is_equal_to(None);
        });
    }

    #[test]
    fn disable_auto_select_only_reaches_available_widget() {
        let widget = RecordingWidget::new();
        disable_auto_select(&widget);
        assert_that(widget.calls()).is_equal_to(vec![Call::DisableAutoSelect]);

        let widget = RecordingWidget::unavailable();
        disable_auto_select(&widget);
        assert_that(widget.calls()).is_equal_to(Vec::<Call>::new());
    }
}
