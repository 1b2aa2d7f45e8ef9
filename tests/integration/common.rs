use docusign_api::{DocuSignRestClient, OAuthCredential, ServiceContext};
use wiremock::MockServer;

pub const ACCOUNT: &str = "1001";

/// Install a test-writer subscriber once per process. `RUST_LOG` narrows it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn context(server: &MockServer) -> ServiceContext {
    ServiceContext::builder()
        .with_endpoint(format!("{}/restapi/v2/", server.uri()))
        .build()
        .unwrap()
}

pub fn account_path(rest: &str) -> String {
    format!("/restapi/v2/accounts/{ACCOUNT}/{rest}")
}

pub fn rest_client(server: &MockServer) -> DocuSignRestClient {
    init_tracing();
    let cred = OAuthCredential::new("it-token").with_account(ACCOUNT, None);
    DocuSignRestClient::new(cred, context(server))
}

/// One part of a received multipart body.
#[derive(Debug)]
pub struct Part {
    pub disposition: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Split a `multipart/form-data` body into its parts.
pub fn parse_multipart(content_type: &str, body: &[u8]) -> Vec<Part> {
    let boundary = content_type
        .split("boundary=")
        .nth(1)
        .expect("content type has a boundary");
    let delimiter = format!("--{boundary}");
    let text = String::from_utf8(body.to_vec()).expect("test bodies are text");

    let mut parts = Vec::new();
    for piece in text.split(delimiter.as_str()).skip(1) {
        if piece.starts_with("--") {
            break;
        }
        let piece = piece.strip_prefix("\r\n").unwrap_or(piece);
        let (head, body) = piece.split_once("\r\n\r\n").expect("part has headers");
        let body = body.strip_suffix("\r\n").unwrap_or(body);

        let mut part = Part {
            disposition: String::new(),
            content_type: String::new(),
            body: body.as_bytes().to_vec(),
        };
        for line in head.lines() {
            if let Some(v) = line.strip_prefix("Content-Disposition: ") {
                part.disposition = v.to_string();
            } else if let Some(v) = line.strip_prefix("Content-Type: ") {
                part.content_type = v.to_string();
            }
        }
        parts.push(part);
    }
    parts
}
