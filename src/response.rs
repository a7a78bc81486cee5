use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payload handed to the `callback` registered through `google.accounts.id.initialize`.
///
/// Only the presence of `credential` is inspected. Everything else is forwarded untouched,
/// including fields this type does not know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialResponse {
    /// The ID token, a base64 encoded JWT. Verify it on your backend before trusting it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,

    /// How the credential was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_by: Option<SelectBy>,

    #[serde(default, rename = "clientId", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(flatten)]
    pub remaining: HashMap<String, serde_json::Value>,
}

impl CredentialResponse {
    /// True when a non-empty credential is present.
    pub fn has_credential(&self) -> bool {
        self.credential
            .as_deref()
            .is_some_and(|credential| !credential.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SelectBy {
    Auto,
    User,
    User1Tap,
    User2Tap,
    Btn,
    BtnConfirm,
    BtnAddSession,
    BtnConfirmAddSession,
    Fedcm,
    FedcmAuto,
    Itp,
    ItpConfirm,
    Other(String),
}

impl From<String> for SelectBy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto" => SelectBy::Auto,
            "user" => SelectBy::User,
            "user_1tap" => SelectBy::User1Tap,
            "user_2tap" => SelectBy::User2Tap,
            "btn" => SelectBy::Btn,
            "btn_confirm" => SelectBy::BtnConfirm,
            "btn_add_session" => SelectBy::BtnAddSession,
            "btn_confirm_add_session" => SelectBy::BtnConfirmAddSession,
            "fedcm" => SelectBy::Fedcm,
            "fedcm_auto" => SelectBy::FedcmAuto,
            "itp" => SelectBy::Itp,
            "itp_confirm" => SelectBy::ItpConfirm,
            _ => SelectBy::Other(value),
        }
    }
}

impl From<SelectBy> for String {
    fn from(value: SelectBy) -> Self {
        match value {
            SelectBy::Auto => "auto".to_owned(),
            SelectBy::User => "user".to_owned(),
            SelectBy::User1Tap => "user_1tap".to_owned(),
            SelectBy::User2Tap => "user_2tap".to_owned(),
            SelectBy::Btn => "btn".to_owned(),
            SelectBy::BtnConfirm => "btn_confirm".to_owned(),
            SelectBy::BtnAddSession => "btn_add_session".to_owned(),
            SelectBy::BtnConfirmAddSession => "btn_confirm_add_session".to_owned(),
            SelectBy::Fedcm => "fedcm".to_owned(),
            SelectBy::FedcmAuto => "fedcm_auto".to_owned(),
            SelectBy::Itp => "itp".to_owned(),
            SelectBy::ItpConfirm => "itp_confirm".to_owned(),
            SelectBy::Other(other) => other,
        }
    }
}

/// Rust view of the notification object passed to a prompt moment listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMomentNotification {
    pub moment: PromptMoment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMoment {
    /// The prompt was displayed, or could not be displayed for the given reason.
    Display { not_displayed: Option<NotDisplayedReason> },

    /// The prompt was skipped.
    Skipped { reason: Option<SkippedReason> },

    /// The prompt went away.
    Dismissed { reason: Option<DismissedReason> },

    Other(String),
}

impl PromptMomentNotification {
    /// Assembles a notification from the raw values reported by the vendor.
    pub fn from_parts(
        moment_type: &str,
        not_displayed_reason: Option<String>,
        skipped_reason: Option<String>,
        dismissed_reason: Option<String>,
    ) -> Self {
        let moment = match moment_type {
            "display" => PromptMoment::Display {
                not_displayed: not_displayed_reason.map(NotDisplayedReason::from),
            },
            "skipped" => PromptMoment::Skipped {
                reason: skipped_reason.map(SkippedReason::from),
            },
            "dismissed" => PromptMoment::Dismissed {
                reason: dismissed_reason.map(DismissedReason::from),
            },
            other => PromptMoment::Other(other.to_owned()),
        };
        Self { moment }
    }

    pub fn is_display_moment(&self) -> bool {
        matches!(self.moment, PromptMoment::Display { .. })
    }

    pub fn is_displayed(&self) -> bool {
        matches!(self.moment, PromptMoment::Display { not_displayed: None })
    }

    pub fn is_not_displayed(&self) -> bool {
        matches!(
            self.moment,
            PromptMoment::Display {
                not_displayed: Some(_)
            }
        )
    }

    pub fn is_skipped_moment(&self) -> bool {
        matches!(self.moment, PromptMoment::Skipped { .. })
    }

    pub fn is_dismissed_moment(&self) -> bool {
        matches!(self.moment, PromptMoment::Dismissed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotDisplayedReason {
    BrowserNotSupported,
    InvalidClient,
    MissingClientId,
    OptOutOrNoSession,
    SecureHttpRequired,
    SuppressedByUser,
    UnregisteredOrigin,
    UnknownReason,
    Other(String),
}

impl From<String> for NotDisplayedReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "browser_not_supported" => NotDisplayedReason::BrowserNotSupported,
            "invalid_client" => NotDisplayedReason::InvalidClient,
            "missing_client_id" => NotDisplayedReason::MissingClientId,
            "opt_out_or_no_session" => NotDisplayedReason::OptOutOrNoSession,
            "secure_http_required" => NotDisplayedReason::SecureHttpRequired,
            "suppressed_by_user" => NotDisplayedReason::SuppressedByUser,
            "unregistered_origin" => NotDisplayedReason::UnregisteredOrigin,
            "unknown_reason" => NotDisplayedReason::UnknownReason,
            _ => NotDisplayedReason::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedReason {
    AutoCancel,
    UserCancel,
    TapOutside,
    IssuingFailed,
    Other(String),
}

impl From<String> for SkippedReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto_cancel" => SkippedReason::AutoCancel,
            "user_cancel" => SkippedReason::UserCancel,
            "tap_outside" => SkippedReason::TapOutside,
            "issuing_failed" => SkippedReason::IssuingFailed,
            _ => SkippedReason::Other(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissedReason {
    CredentialReturned,
    CancelCalled,
    FlowRestarted,
    Other(String),
}

impl From<String> for DismissedReason {
    fn from(value: String) -> Self {
        match value.as_str() {
            "credential_returned" => DismissedReason::CredentialReturned,
            "cancel_called" => DismissedReason::CancelCalled,
            "flow_restarted" => DismissedReason::FlowRestarted,
            _ => DismissedReason::Other(value),
        }
    }
}
