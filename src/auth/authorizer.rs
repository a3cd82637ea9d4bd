//! Credential providers consulted by [`BaseClient`](crate::msgraph::BaseClient).

// self
use crate::{_prelude::*, auth::AccessToken};

/// Supplies the `Authorization` header for outgoing Graph requests.
///
/// Implementations typically wrap a token cache owned by the surrounding provider; they are
/// consulted once per request and must be `Send + Sync` so clients can be shared freely.
pub trait Authorizer: Send + Sync {
	/// Returns the token to present for the next request.
	fn token(&self) -> Result<AccessToken>;
}

/// Authorizer that always presents the same pre-acquired token.
#[derive(Clone, Debug)]
pub struct StaticTokenAuthorizer {
	token: AccessToken,
}
impl StaticTokenAuthorizer {
	/// Wraps a pre-acquired bearer token.
	pub fn new(token: impl Into<String>) -> Self {
		Self { token: AccessToken::new(token) }
	}
}
impl Authorizer for StaticTokenAuthorizer {
	fn token(&self) -> Result<AccessToken> {
		Ok(self.token.clone())
	}
}
