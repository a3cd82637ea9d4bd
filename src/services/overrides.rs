//! Endpoint-keyed API version overrides applied by the client factories.
//!
//! Some national clouds expose defects on the stable API surface that the beta surface does not
//! have. Each workaround is one [`ApiVersionOverride`] row; factories consult
//! [`api_version_override`] before running the configuration callback.

// self
use crate::{
	environment::MsGraphEndpoint,
	msgraph::{ApiVersion, ClientKind},
};

/// One row of the override table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiVersionOverride {
	/// Endpoint the override applies to.
	pub endpoint: MsGraphEndpoint,
	/// Client kind the override applies to.
	pub client: ClientKind,
	/// Version forced on matching clients.
	pub api_version: ApiVersion,
}

/// Active overrides.
pub const API_VERSION_OVERRIDES: &[ApiVersionOverride] = &[
	// `applicationTemplates/{id}/instantiate` intermittently answers 504 on v1.0 in US Gov L4
	// after the objects were created, so retries produce duplicate applications and service
	// principals.
	ApiVersionOverride {
		endpoint: MsGraphEndpoint::UsGovL4,
		client: ClientKind::ApplicationTemplates,
		api_version: ApiVersion::Beta,
	},
];

/// Looks up the forced API version for `client` on `endpoint`, if any.
pub fn api_version_override(endpoint: MsGraphEndpoint, client: ClientKind) -> Option<ApiVersion> {
	API_VERSION_OVERRIDES
		.iter()
		.find(|row| row.endpoint == endpoint && row.client == client)
		.map(|row| row.api_version)
}
