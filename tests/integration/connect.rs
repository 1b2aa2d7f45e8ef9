//! Connect notifications as a listener receives them.

use docusign_api::connect;

const NOTIFICATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<DocuSignEnvelopeInformation xmlns="http://www.docusign.net/API/3.0">
  <EnvelopeStatus>
    <RecipientStatuses>
      <RecipientStatus>
        <Type>Signer</Type>
        <Email>sam@example.com</Email>
        <UserName>Sam Signer</UserName>
        <Signed>2016-04-12T09:43:09.103</Signed>
        <Status>Completed</Status>
        <TabStatuses>
          <TabStatus>
            <TabType>Custom</TabType>
            <TabLabel>employeeId</TabLabel>
            <TabValue>E-1138</TabValue>
          </TabStatus>
        </TabStatuses>
        <RecipientAttachment>
          <Attachment>
            <Data>SGVs
bG8=</Data>
            <Label>note</Label>
          </Attachment>
        </RecipientAttachment>
      </RecipientStatus>
    </RecipientStatuses>
    <TimeGenerated>2016-04-12T09:43:30.1175Z</TimeGenerated>
    <EnvelopeID>e-42</EnvelopeID>
    <Subject>Offer letter</Subject>
    <Status>Completed</Status>
    <Created>2016-04-12T09:41:21.54</Created>
    <Completed></Completed>
    <AutoNavigation>TRUE</AutoNavigation>
    <EnvelopeIdStamping>false</EnvelopeIdStamping>
    <CustomFields>
      <CustomField>
        <Name>caseNumber</Name>
        <Value>C-7</Value>
        <Show>True</Show>
        <Required>False</Required>
      </CustomField>
    </CustomFields>
  </EnvelopeStatus>
  <DocumentPDFs>
    <DocumentPDF>
      <Name>offer.pdf</Name>
      <PDFBytes>JVBERi0xLjQK
JSVFT0YK</PDFBytes>
    </DocumentPDF>
  </DocumentPDFs>
</DocuSignEnvelopeInformation>
"#;

#[test]
fn test_listener_body_decodes() {
    let info = connect::from_reader(NOTIFICATION.as_bytes()).unwrap();
    let status = &info.envelope_status;

    assert_eq!(status.envelope_id, "e-42");
    assert_eq!(status.status, "Completed");
    assert!(status.created.is_some());
    assert!(status.completed.is_none());
    assert!(status.auto_navigation.get());
    assert!(!status.envelope_id_stamping.get());
    assert_eq!(status.custom_field("caseNumber"), Some("C-7"));

    let signer = &status.recipient_statuses[0];
    assert_eq!(signer.tab_values(), [("employeeId", "E-1138")]);
    assert_eq!(signer.attachments[0].decode().unwrap(), b"Hello");

    assert_eq!(info.document_pdfs.len(), 1);
    assert_eq!(info.document_pdfs[0].decode().unwrap(), b"%PDF-1.4\n%%EOF\n");
}

#[test]
fn test_truncated_body_is_an_xml_error() {
    let cut = &NOTIFICATION[..NOTIFICATION.len() / 2];
    let err = connect::from_str(cut).unwrap_err();
    assert!(matches!(err.kind, connect::ErrorKind::Xml(_)));
}
