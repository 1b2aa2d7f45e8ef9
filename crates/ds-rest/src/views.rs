//! Embedded view URLs: signing, sending, editing and correcting.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Event DocuSign reports when it redirects back from a view.
///
/// Sent as the `returnUrl` of the sender, edit and correction views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnUrlType {
    #[serde(rename = "send")]
    Send,
    #[serde(rename = "save")]
    Save,
    #[serde(rename = "cancel")]
    Cancel,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "sessionEnd")]
    SessionEnd,
    #[serde(rename = "decline")]
    Decline,
    #[serde(rename = "exception")]
    Exception,
    #[serde(rename = "fax_pending")]
    FaxPending,
    #[serde(rename = "id_check_failed")]
    IdCheckFailed,
    #[serde(rename = "session_timeout")]
    SessionTimeout,
    #[serde(rename = "signing_complete")]
    SigningComplete,
    #[serde(rename = "ttl_expired")]
    TtlExpired,
    #[serde(rename = "view_complete")]
    ViewComplete,
}

impl ReturnUrlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Send => "send",
            Self::Save => "save",
            Self::Cancel => "cancel",
            Self::Error => "error",
            Self::SessionEnd => "sessionEnd",
            Self::Decline => "decline",
            Self::Exception => "exception",
            Self::FaxPending => "fax_pending",
            Self::IdCheckFailed => "id_check_failed",
            Self::SessionTimeout => "session_timeout",
            Self::SigningComplete => "signing_complete",
            Self::TtlExpired => "ttl_expired",
            Self::ViewComplete => "view_complete",
        }
    }
}

impl fmt::Display for ReturnUrlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL of a view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvUrl {
    #[serde(default)]
    pub url: String,
}

/// Request for an embedded signing URL.
///
/// `client_user_id`, `user_name` and `email` must match the captive
/// recipient on the envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvRecipientView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_instant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Body of the sender and edit view requests.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReturnUrlRequest {
    pub return_url: ReturnUrlType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_navigation: Option<&'static str>,
}
