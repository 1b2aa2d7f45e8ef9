//! # ds-rest
//!
//! Typed client for the DocuSign eSignature v2 REST API.
//!
//! ## Features
//!
//! - **Folders** - List folders, page through their contents, search envelopes
//! - **Envelopes** - Create with documents, status, status changes, audit events
//! - **Documents** - List, stream PDFs, add or remove documents and document fields
//! - **Recipients** - Read, add, modify and remove recipients and their tabs
//! - **Custom fields** - Envelope and account level text and list fields
//! - **Templates** - Search templates, read one, see which were applied
//! - **Views** - Embedded signing, sender, edit and correction URLs
//! - **Login** - Accounts available to a credential
//!
//! ## Example
//!
//! ```rust,ignore
//! use docusign_auth::OAuthCredential;
//! use docusign_client::{ServiceContext, UploadFile};
//! use docusign_rest::{
//!     Document, DocuSignRestClient, Envelope, RecipientList, SignHereTab, Signer, TabBase,
//!     TabPosition, Tabs,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cred = OAuthCredential::from_env()?;
//!     let client = DocuSignRestClient::new(cred, ServiceContext::demo()?);
//!
//!     let mut signer = Signer::new("1", "Sam Signer", "sam@example.com");
//!     signer.signer.tabs = Some(Tabs {
//!         sign_here_tabs: vec![SignHereTab {
//!             base: TabBase::labelled("1", "sign"),
//!             position: TabPosition::at(1, 100, 600),
//!             ..SignHereTab::default()
//!         }],
//!         ..Tabs::default()
//!     });
//!
//!     let envelope = Envelope {
//!         email_subject: Some("Please sign".into()),
//!         status: Some("sent".into()),
//!         documents: vec![Document::new("1", "offer.pdf")],
//!         recipients: Some(RecipientList {
//!             signers: vec![signer],
//!             ..RecipientList::default()
//!         }),
//!         ..Envelope::default()
//!     };
//!
//!     let file = UploadFile::open("offer.pdf", "application/pdf", "1").await?;
//!     let sent = client.envelope_create(&envelope, vec![file]).await?;
//!     println!("envelope {}", sent.envelope_id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod custom_fields;
mod documents;
mod envelopes;
mod folders;
mod login;
pub mod params;
mod recipients;
mod tabs;
mod templates;
mod views;

// Main client
pub use client::DocuSignRestClient;

// Custom fields
pub use custom_fields::{CustomField, CustomFieldList, ListCustomField};

// Documents
pub use documents::{
    CustomDocumentField, Document, DocumentAsset, DocumentAssetList, DocumentFieldList,
    DocumentList, Matchbox,
};

// Envelopes
pub use envelopes::{
    AuditEvent, AuditEventList, BccEmail, CompositeTemplate, EmailSetting, Envelope,
    EnvelopeEvent, EnvelopeList, EnvelopeResponse, EnvelopeUris, EventNotification, Expiration,
    InlineTemplate, Notification, RecipientEvent, Reminder, ServerTemplate, TemplateRole,
};

// Folders
pub use folders::{Folder, FolderEnvList, FolderItem, FolderList, FolderTemplateList};

// Login
pub use login::{LoginAccount, LoginInfo};

// Recipients
pub use recipients::{
    AddressInformation, AddressInformationInput, Agent, CarbonCopy, CertifiedDelivery,
    DobInformationInput, Editor, EmailNotification, EmailRecipient, IdCheckInformationInput,
    InPersonSigner, InformationInput, Intermediary, PhoneAuthentication, Recipient,
    RecipientAttachment, RecipientList, RecipientUpdateResult, SamlAuthentication, Signer,
    SignerBase, SmsAuthentication, Ssn4InformationInput, Ssn9InformationInput,
};

// Tabs
pub use tabs::{
    ApproveTab, CheckboxTab, CompanyTab, DateSignedTab, DateTab, DeclineTab, EmailAddressTab,
    EmailTab, EntryFields, EnvelopeIdTab, FirstNameTab, FormulaTab, FullNameTab, InitialHereTab,
    LastNameTab, ListItem, ListTab, NoteTab, NumberTab, Radio, RadioGroupTab,
    SignerAttachmentTab, SignHereTab, SsnTab, TabBase, TabConditional, TabPosition, TabStyle,
    TabTemplate, Tabs, TextTab, TitleTab, ZipTab,
};

// Templates
pub use templates::{
    Template, TemplateDefinition, TemplateItem, TemplateList, TemplateModifiedBy, TemplateOwner,
};

// Views
pub use views::{EnvRecipientView, EnvUrl, ReturnUrlType};

// Re-export shared client types
pub use docusign_client::{DsBool, DsTime, Error, ErrorKind, NameValue, Result, UploadFile};
