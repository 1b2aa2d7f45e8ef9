//! Outgoing request under construction, as seen by a credential.

use std::collections::HashMap;

use url::Url;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request whose headers and target URL are still open for change.
///
/// The executor fills in the method, relative path and query; the
/// credential then adds its headers and calls [`resolve`](Self::resolve)
/// to fix the final URL.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) endpoint: Url,
    pub(crate) path: String,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) url: Option<Url>,
}

impl RequestBuilder {
    /// Create a request for `path` relative to `endpoint`.
    pub fn new(method: RequestMethod, endpoint: Url, path: impl Into<String>) -> Self {
        Self {
            method,
            endpoint,
            path: path.into(),
            query_params: Vec::new(),
            headers: HashMap::new(),
            url: None,
        }
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The path as given by the caller.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Set a header, replacing any previous value.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Add a query parameter. Repeated names are kept.
    pub fn query(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// The resolved URL, once a credential has set it.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Fix the target URL.
    ///
    /// A path starting with `/` is taken relative to the endpoint root, e.g.
    /// `/login_information`. Any other path belongs to the account:
    /// `{endpoint}accounts/{account_id}/{path}`. When `host` is given it
    /// replaces the endpoint host, optionally with a port (`host:port`).
    ///
    /// Calling this again recomputes the URL from scratch.
    pub fn resolve(&mut self, account_id: Option<&str>, host: Option<&str>) -> Result<&Url> {
        let mut url = match self.path.strip_prefix('/') {
            Some(rooted) => self.endpoint.join(rooted)?,
            None => {
                let account_id = account_id.filter(|a| !a.is_empty()).ok_or_else(|| {
                    Error::new(ErrorKind::Config(format!(
                        "no account id available for account-scoped path '{}'",
                        self.path
                    )))
                })?;
                let scoped = format!(
                    "accounts/{}/{}",
                    urlencoding::encode(account_id),
                    self.path
                );
                self.endpoint.join(&scoped)?
            }
        };

        if let Some(host) = host.filter(|h| !h.is_empty()) {
            set_host(&mut url, host)?;
        }

        if !self.query_params.is_empty() {
            url.set_query(Some(&encode_query(&self.query_params)?));
        }

        Ok(self.url.insert(url))
    }
}

fn set_host(url: &mut Url, host: &str) -> Result<()> {
    let (name, port) = match host.rsplit_once(':') {
        Some((name, port)) => match port.parse::<u16>() {
            Ok(port) => (name, Some(port)),
            Err(_) => (host, None),
        },
        None => (host, None),
    };

    url.set_host(Some(name))?;
    if port.is_some() {
        url.set_port(port)
            .map_err(|_| Error::new(ErrorKind::InvalidUrl(format!("cannot set port on {url}"))))?;
    }
    Ok(())
}

/// Encode query parameters, ordered by name.
///
/// The sort is stable, so repeated names keep the order they were added in.
pub(crate) fn encode_query(params: &[(String, String)]) -> Result<String> {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    serde_urlencoded::to_string(sorted)
        .map_err(|e| Error::with_source(ErrorKind::InvalidUrl(e.to_string()), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url {
        Url::parse("https://demo.docusign.net/restapi/v2/").unwrap()
    }

    #[test]
    fn test_account_scoped_path() {
        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "folders");
        let url = req.resolve(Some("1234"), None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.docusign.net/restapi/v2/accounts/1234/folders"
        );
    }

    #[test]
    fn test_rooted_path_ignores_account() {
        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "/login_information");
        let url = req.resolve(Some("1234"), None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.docusign.net/restapi/v2/login_information"
        );

        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "/login_information");
        assert!(req.resolve(None, None).is_ok());
    }

    #[test]
    fn test_account_required_for_scoped_path() {
        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "folders");
        let err = req.resolve(None, None).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));

        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "folders");
        assert!(req.resolve(Some(""), None).is_err());
    }

    #[test]
    fn test_host_override() {
        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "folders");
        let url = req.resolve(Some("42"), Some("na2.docusign.net")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://na2.docusign.net/restapi/v2/accounts/42/folders"
        );

        let url = req.resolve(Some("42"), Some("localhost:9999")).unwrap();
        assert_eq!(url.as_str(), "https://localhost:9999/restapi/v2/accounts/42/folders");
    }

    #[test]
    fn test_query_duplicates_append() {
        let mut req = RequestBuilder::new(RequestMethod::Get, endpoint(), "envelopes");
        req.query("status", "sent")
            .query("from_date", "01/02/2016 15:04")
            .query("status", "delivered");
        let url = req.resolve(Some("1"), None).unwrap();
        assert_eq!(
            url.query(),
            Some("from_date=01%2F02%2F2016+15%3A04&status=sent&status=delivered")
        );
    }

    #[test]
    fn test_set_header_replaces() {
        let mut req = RequestBuilder::new(RequestMethod::Post, endpoint(), "envelopes");
        req.set_header("Authorization", "bearer a");
        req.set_header("Authorization", "bearer b");
        assert_eq!(req.header("Authorization"), Some("bearer b"));
        assert_eq!(req.method(), RequestMethod::Post);
        assert_eq!(req.path(), "envelopes");
        assert!(req.url().is_none());
    }
}
