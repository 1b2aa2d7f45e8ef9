//! Authorization strategy.

use std::fmt::Debug;

use crate::error::Result;
use crate::request::RequestBuilder;

/// Attaches authentication to an outgoing request.
///
/// Implementations set their headers and resolve the request URL with
/// [`RequestBuilder::resolve`], usually passing the account id and host the
/// credential is bound to. `authorize` runs once per call, after the path and
/// query are fixed and before dispatch. It must only overwrite what it owns,
/// so calling it twice on the same request gives the same result.
///
/// `on_behalf_of` names the user the call acts as, when the caller has
/// scoped the client with one.
pub trait Credential: Send + Sync + Debug {
    fn authorize(&self, req: &mut RequestBuilder, on_behalf_of: Option<&str>) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Bearer credential bound to a fixed account, for executor tests.
    #[derive(Debug, Clone)]
    pub struct StaticToken {
        pub token: String,
        pub account_id: String,
    }

    impl StaticToken {
        pub fn new(token: &str, account_id: &str) -> Self {
            Self {
                token: token.to_string(),
                account_id: account_id.to_string(),
            }
        }
    }

    impl Credential for StaticToken {
        fn authorize(&self, req: &mut RequestBuilder, on_behalf_of: Option<&str>) -> Result<()> {
            req.set_header("Authorization", format!("bearer {}", self.token));
            if let Some(user) = on_behalf_of {
                req.set_header("X-DocuSign-Act-As-User", user);
            }
            req.resolve(Some(&self.account_id), None)?;
            Ok(())
        }
    }
}
