//! Typed query options.
//!
//! Each operation family gets its own parameter type so an option built for
//! one endpoint cannot be passed to another. Fixed options are associated
//! constants; options carrying a value are constructor functions.
//!
//! ```rust,ignore
//! use docusign_rest::params::{EnvelopeSearchParam, SearchFolder};
//!
//! let list = client
//!     .envelope_search(
//!         SearchFolder::Completed,
//!         &[EnvelopeSearchParam::count(3), EnvelopeSearchParam::ORDER_DESC],
//!     )
//!     .await?;
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use docusign_client::types::query_time;

/// Implemented by every query option type.
pub trait QueryParam {
    /// Query parameter name.
    fn name(&self) -> &str;
    /// Query parameter value, unencoded.
    fn value(&self) -> &str;
}

macro_rules! query_param {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            name: &'static str,
            value: Cow<'static, str>,
        }

        impl $ty {
            const fn fixed(name: &'static str, value: &'static str) -> Self {
                Self {
                    name,
                    value: Cow::Borrowed(value),
                }
            }

            fn with_value(name: &'static str, value: impl Into<String>) -> Self {
                Self {
                    name,
                    value: Cow::Owned(value.into()),
                }
            }
        }

        impl QueryParam for $ty {
            fn name(&self) -> &str {
                self.name
            }

            fn value(&self) -> &str {
                &self.value
            }
        }
    };
}

query_param! {
    /// Options for [`folder_list`](crate::DocuSignRestClient::folder_list).
    FolderTemplateParam
}

impl FolderTemplateParam {
    /// Include template folders in the list.
    pub const INCLUDE: Self = Self::fixed("template", "include");
    /// List only template folders.
    pub const ONLY: Self = Self::fixed("template", "only");
}

query_param! {
    /// Options for [`folder_envelopes`](crate::DocuSignRestClient::folder_envelopes).
    FolderEnvelopesParam
}

impl FolderEnvelopesParam {
    // DocuSign's own spelling of the parameter.
    pub fn start_position(pos: u32) -> Self {
        Self::with_value("startpostition", pos.to_string())
    }

    pub fn from_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("from_date", query_time(t))
    }

    pub fn to_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("to_date", query_time(t))
    }

    pub fn search_text(text: impl Into<String>) -> Self {
        Self::with_value("search_text", text)
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self::with_value("status", status)
    }

    pub fn owner_name(name: impl Into<String>) -> Self {
        Self::with_value("owner_name", name)
    }

    pub fn owner_email(email: impl Into<String>) -> Self {
        Self::with_value("owner_email", email)
    }
}

/// Built-in search folders for [`envelope_search`](crate::DocuSignRestClient::envelope_search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchFolder {
    Drafts,
    AwaitingMySignature,
    OutForSignature,
    Completed,
}

impl SearchFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFolder::Drafts => "drafts",
            SearchFolder::AwaitingMySignature => "awaiting_my_signature",
            SearchFolder::OutForSignature => "out_for_signature",
            SearchFolder::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SearchFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

query_param! {
    /// Options for [`envelope_search`](crate::DocuSignRestClient::envelope_search).
    EnvelopeSearchParam
}

impl EnvelopeSearchParam {
    pub const ORDER_BY_ACTION_REQUIRED: Self = Self::fixed("order_by", "action_required");
    pub const ORDER_BY_CREATED: Self = Self::fixed("order_by", "created");
    pub const ORDER_BY_COMPLETED: Self = Self::fixed("order_by", "completed");
    pub const ORDER_BY_SENT: Self = Self::fixed("order_by", "sent");
    pub const ORDER_BY_SIGNER_LIST: Self = Self::fixed("order_by", "signer_list");
    pub const ORDER_BY_STATUS: Self = Self::fixed("order_by", "status");
    pub const ORDER_BY_SUBJECT: Self = Self::fixed("order_by", "subject");
    pub const ORDER_ASC: Self = Self::fixed("order", "asc");
    pub const ORDER_DESC: Self = Self::fixed("order", "desc");
    pub const INCLUDE_RECIPIENTS: Self = Self::fixed("include_recipients", "true");

    pub fn start_position(pos: u32) -> Self {
        Self::with_value("startpostition", pos.to_string())
    }

    /// Number of records to return, 1 to 100.
    pub fn count(count: u32) -> Self {
        Self::with_value("count", count.to_string())
    }

    /// Start of the date range. DocuSign defaults to the previous 30 days.
    pub fn from_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("from_date", query_time(t))
    }

    pub fn to_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("to_date", query_time(t))
    }
}

query_param! {
    /// Options for [`envelope_document`](crate::DocuSignRestClient::envelope_document).
    EnvelopeDocumentParam
}

impl EnvelopeDocumentParam {
    pub const SHOW_CHANGES: Self = Self::fixed("show_changes", "true");
}

query_param! {
    /// Options for [`envelope_documents_combined`](crate::DocuSignRestClient::envelope_documents_combined).
    DocumentsCombinedParam
}

impl DocumentsCombinedParam {
    /// Append the certificate of completion.
    pub const CERTIFICATE: Self = Self::fixed("certificate", "true");
    /// Highlight data changes, when the account has the feature.
    pub const SHOW_CHANGES: Self = Self::fixed("show_changes", "true");
    pub const WATERMARK: Self = Self::fixed("watermark", "true");
}

query_param! {
    /// Options for [`login_information`](crate::DocuSignRestClient::login_information).
    LoginInfoParam
}

impl LoginInfoParam {
    pub const INCLUDE_API_PASSWORD: Self = Self::fixed("api_password", "true");
    pub const INCLUDE_ACCOUNT_ID_GUID: Self = Self::fixed("include_account_id_guid", "true");
    pub const SETTINGS_ALL: Self = Self::fixed("login_settings", "all");
    pub const SETTINGS_NONE: Self = Self::fixed("login_settings", "none");
}

query_param! {
    /// Options for [`envelope_status_changes`](crate::DocuSignRestClient::envelope_status_changes).
    ///
    /// DocuSign recommends at least one option to bound the response size.
    StatusChangesParam
}

impl StatusChangesParam {
    pub fn from_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("from_date", query_time(t))
    }

    pub fn to_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("to_date", query_time(t))
    }

    pub fn status(status: impl Into<String>) -> Self {
        Self::with_value("status", status)
    }

    /// `changed`, `any` or a list of statuses.
    pub fn from_to_status(status: impl Into<String>) -> Self {
        Self::with_value("from_to_status", status)
    }

    pub fn envelope(envelope_id: impl Into<String>) -> Self {
        Self::with_value("envelopeId", envelope_id)
    }

    /// Envelopes whose custom field `name` equals `value`.
    pub fn custom_field(name: &str, value: &str) -> Self {
        Self::with_value("custom_field", format!("{name}={value}"))
    }

    pub fn transaction_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_value("transaction_ids", join(ids))
    }
}

query_param! {
    /// Options for the recipient calls.
    RecipientsParam
}

impl RecipientsParam {
    pub const INCLUDE_TABS: Self = Self::fixed("include_tabs", "true");
    pub const INCLUDE_EXTENDED: Self = Self::fixed("include_extended", "true");
    /// Resend the envelope to recipients whose information changed.
    pub const RESEND: Self = Self::fixed("resend_envelope", "true");
}

/// Sections [`TemplateSearchParam::include`] can add to each template.
///
/// Declaration order is the order DocuSign expects in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateInclude {
    Recipients,
    Folders,
    Documents,
    CustomFields,
    Notifications,
}

impl TemplateInclude {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateInclude::Recipients => "recipients",
            TemplateInclude::Folders => "folders",
            TemplateInclude::Documents => "documents",
            TemplateInclude::CustomFields => "custom_fields",
            TemplateInclude::Notifications => "notifications",
        }
    }
}

query_param! {
    /// Options for [`template_search`](crate::DocuSignRestClient::template_search).
    TemplateSearchParam
}

impl TemplateSearchParam {
    pub const ORDER_ASC: Self = Self::fixed("order", "asc");
    pub const ORDER_DESC: Self = Self::fixed("order", "desc");
    pub const ORDER_BY_NAME: Self = Self::fixed("orderby", "name");
    pub const ORDER_BY_MODIFIED: Self = Self::fixed("orderby", "modified");
    pub const ORDER_BY_USED: Self = Self::fixed("orderby", "used");
    pub const FILTER_OWNED: Self = Self::fixed("user_filter", "owned_by_me");
    pub const FILTER_SHARED_WITH_ME: Self = Self::fixed("user_filter", "shared_with_me");
    pub const FILTER_ALL: Self = Self::fixed("user_filter", "all");
    pub const SHARED_BY_ME: Self = Self::fixed("shared_by_me", "true");
    pub const NOT_SHARED_BY_ME: Self = Self::fixed("shared_by_me", "false");

    pub fn folder(folder: impl Into<String>) -> Self {
        Self::with_value("folder", folder)
    }

    /// Several folders by id, sent as one comma-separated `folder` value.
    pub fn folder_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_value("folder", join(ids))
    }

    pub fn include(sections: &[TemplateInclude]) -> Self {
        let mut sections = sections.to_vec();
        sections.sort();
        sections.dedup();
        let value = sections
            .iter()
            .map(TemplateInclude::as_str)
            .collect::<Vec<_>>()
            .join(",");
        Self::with_value("include", value)
    }

    pub fn count(count: u32) -> Self {
        Self::with_value("count", count.to_string())
    }

    pub fn start_position(pos: u32) -> Self {
        Self::with_value("start_position", pos.to_string())
    }

    pub fn from_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("from_date", query_time(t))
    }

    pub fn to_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("to_date", query_time(t))
    }

    pub fn used_from_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("used_from_date", query_time(t))
    }

    pub fn used_to_date(t: &DateTime<Utc>) -> Self {
        Self::with_value("used_to_date", query_time(t))
    }

    pub fn search_text(text: impl Into<String>) -> Self {
        Self::with_value("search_text", text)
    }
}

fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}
