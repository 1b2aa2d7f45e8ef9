//! Tabs: the fields a recipient signs, initials or fills in.
//!
//! Tab types are assembled from shared blocks flattened into each type:
//! [`TabBase`] (document and label), [`TabPosition`] (absolute or anchored
//! placement), [`TabStyle`] (font), [`TabTemplate`] (template locking) and
//! [`TabConditional`] (shown only when a parent tab has a given value).
//! Most data entry tabs also share [`EntryFields`].
//!
//! DocuSign sends numbers as strings, so sizes and positions are strings here.

use docusign_client::{DsBool, NameValue, ResponseError};
use serde::{Deserialize, Serialize};

/// All tabs of one recipient, grouped by type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tabs {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approve_tabs: Vec<ApproveTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkbox_tabs: Vec<CheckboxTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub company_tabs: Vec<CompanyTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_signed_tabs: Vec<DateSignedTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_tabs: Vec<DateTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decline_tabs: Vec<DeclineTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_address_tabs: Vec<EmailAddressTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_tabs: Vec<EmailTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envelope_id_tabs: Vec<EnvelopeIdTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub first_name_tabs: Vec<FirstNameTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formula_tabs: Vec<FormulaTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub full_name_tabs: Vec<FullNameTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub initial_here_tabs: Vec<InitialHereTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub last_name_tabs: Vec<LastNameTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_tabs: Vec<ListTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note_tabs: Vec<NoteTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub number_tabs: Vec<NumberTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radio_group_tabs: Vec<RadioGroupTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sign_here_tabs: Vec<SignHereTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signer_attachment_tabs: Vec<SignerAttachmentTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssn_tabs: Vec<SsnTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_tabs: Vec<TextTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub title_tabs: Vec<TitleTab>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zip_tabs: Vec<ZipTab>,
}

impl Tabs {
    /// `(tabLabel, value)` for every tab that carries a value.
    ///
    /// Checkboxes report `"true"` or `"false"`. A radio group reports its
    /// group name and the value of the selected radio. A tab without a
    /// value reports an empty string.
    pub fn values(&self) -> Vec<NameValue> {
        fn pair(base: &TabBase, value: &Option<String>) -> NameValue {
            NameValue::new(
                base.tab_label.clone().unwrap_or_default(),
                value.clone().unwrap_or_default(),
            )
        }

        let mut v = Vec::new();
        v.extend(self.checkbox_tabs.iter().map(|t| {
            NameValue::new(
                t.base.tab_label.clone().unwrap_or_default(),
                t.selected.get().to_string(),
            )
        }));
        v.extend(self.company_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.date_signed_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.date_tabs.iter().map(|t| pair(&t.base, &t.entry.value)));
        v.extend(self.email_address_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.email_tabs.iter().map(|t| pair(&t.base, &t.entry.value)));
        v.extend(self.first_name_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.formula_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.full_name_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.last_name_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.list_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.note_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.number_tabs.iter().map(|t| pair(&t.base, &t.entry.value)));
        v.extend(self.radio_group_tabs.iter().map(|g| {
            let selected = g
                .radios
                .iter()
                .find(|r| r.selected.get())
                .and_then(|r| r.value.clone());
            NameValue::new(
                g.group_name.clone().unwrap_or_default(),
                selected.unwrap_or_default(),
            )
        }));
        v.extend(self.ssn_tabs.iter().map(|t| pair(&t.base, &t.entry.value)));
        v.extend(self.text_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.title_tabs.iter().map(|t| pair(&t.base, &t.value)));
        v.extend(self.zip_tabs.iter().map(|t| pair(&t.base, &t.entry.value)));
        v
    }
}

/// Document and label of a tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_label: Option<String>,
    /// Set on a response item when the operation failed for this tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<ResponseError>,
}

impl TabBase {
    pub fn labelled(document_id: impl Into<String>, tab_label: impl Into<String>) -> Self {
        Self {
            document_id: Some(document_id.into()),
            tab_label: Some(tab_label.into()),
            error_details: None,
        }
    }
}

/// Placement by page coordinates or by an anchor string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabPosition {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub anchor_ignore_if_not_present: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_x_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_y_offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_position: Option<String>,
    /// Required to modify or remove an existing tab.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
}

impl TabPosition {
    pub fn at(page: u32, x: u32, y: u32) -> Self {
        Self {
            page_number: Some(page.to_string()),
            x_position: Some(x.to_string()),
            y_position: Some(y.to_string()),
            ..Self::default()
        }
    }

    pub fn anchored(anchor: impl Into<String>) -> Self {
        Self {
            anchor_string: Some(anchor.into()),
            ..Self::default()
        }
    }
}

/// Template locking. `templateRequired` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub template_locked: DsBool,
    #[serde(default)]
    pub template_required: DsBool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabConditional {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_parent_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_parent_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabStyle {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub bold: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub italic: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub underline: DsBool,
}

/// Fields of the data entry tabs (date, email, number, SSN, zip).
///
/// `required` is always sent: DocuSign treats a missing value as required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryFields {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub conceal_value_on_document: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub disable_auto_size: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default)]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// Approve button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckboxTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub selected: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
}

/// Company name, a styled text tab.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub conceal_value_on_document: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub disable_auto_size: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(default)]
    pub required: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// Filled in with the signing date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSignedTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Date entered by the recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(flatten)]
    pub entry: EntryFields,
}

/// Decline button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// Shows the recipient's email address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailAddressTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Email address entered by the recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(flatten)]
    pub entry: EntryFields,
}

/// Shows the envelope id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeIdTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirstNameTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Computed from other tabs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub conceal_value_on_document: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub disable_auto_size: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub is_payment_amount: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default)]
    pub required: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_decimal_places: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullNameTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialHereTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub optional: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastNameTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// One option of a [`ListTab`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub selected: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Drop-down list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ListItem>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default)]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub sender_required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

/// Read-only note shown to the recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(flatten)]
    pub entry: EntryFields,
}

/// One button of a [`RadioGroupTab`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Radio {
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(default)]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub selected: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioGroupTab {
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radios: Vec<Radio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub template_locked: DsBool,
    #[serde(default)]
    pub template_required: DsBool,
}

/// Prompts the signer to upload a file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignerAttachmentTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub optional: DsBool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignHereTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub optional: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SsnTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(flatten)]
    pub entry: EntryFields,
}

/// Free text entered by the recipient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub conceal_value_on_document: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub disable_auto_size: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub is_payment_amount: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default)]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub sender_required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub conceal_value_on_document: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub disable_auto_size: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub locked: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_field_xml: Option<String>,
    #[serde(default)]
    pub required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub require_initial_on_shared_tab_change: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub sender_required: DsBool,
    #[serde(default, skip_serializing_if = "DsBool::is_false")]
    pub shared: DsBool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZipTab {
    #[serde(flatten)]
    pub base: TabBase,
    #[serde(flatten)]
    pub position: TabPosition,
    #[serde(flatten)]
    pub style: TabStyle,
    #[serde(flatten)]
    pub template: TabTemplate,
    #[serde(flatten)]
    pub conditional: TabConditional,
    #[serde(flatten)]
    pub entry: EntryFields,
}
