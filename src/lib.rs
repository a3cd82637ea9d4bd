//! Typed directory-service clients and schema validators for an identity infrastructure
//! provider.
//!
//! Client factories honor per-environment API version overrides; validators report problems as
//! diagnostics instead of errors.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod diag;
pub mod environment;
pub mod error;
pub mod msgraph;
pub mod obs;
pub mod options;
pub mod services;
pub mod validate;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{StaticTokenAuthorizer, TenantId},
		environment::Environment,
		msgraph::BaseClient,
		options::ClientOptions,
	};

	/// Bearer token installed by [`test_client_options`].
	pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

	/// Builds the tenant identifier shared by integration tests.
	pub fn test_tenant() -> TenantId {
		TenantId::new("00000000-0000-0000-0000-000000000000")
			.expect("Test tenant identifier should be valid.")
	}

	/// Builds [`ClientOptions`] for `environment` whose configurator points every client at
	/// `base_url` (typically an `httpmock` server) and authenticates with
	/// [`TEST_ACCESS_TOKEN`].
	pub fn test_client_options(environment: Environment, base_url: &str) -> ClientOptions {
		let endpoint = Url::parse(base_url).expect("Mock server URL should parse successfully.");
		let authorizer = Arc::new(StaticTokenAuthorizer::new(TEST_ACCESS_TOKEN));

		ClientOptions::new(test_tenant(), environment)
			.with_authorizer(authorizer)
			.with_terraform_version("1.9.0")
			.with_configure(move |client: &mut BaseClient| {
				client.endpoint = endpoint.clone();
			})
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
