//! Typed Graph API clients.
//!
//! Every service client wraps a [`BaseClient`] that owns the tenant, endpoint, API version, user
//! agent, and authorizer. Clients are created with defaults (`v1.0` on the public endpoint) and
//! then configured by the caller; see [`crate::services::applications::new_client`].

pub mod application_templates;
pub mod applications;
pub mod base;
pub mod directory_objects;
pub mod models;

pub use application_templates::*;
pub use applications::*;
pub use base::*;
pub use directory_objects::*;
pub use models::*;

// self
use crate::_prelude::*;

/// Graph API version segment inserted before every resource path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
	/// Stable channel.
	#[default]
	#[serde(rename = "v1.0")]
	V1_0,
	/// Pre-release channel.
	#[serde(rename = "beta")]
	Beta,
}
impl ApiVersion {
	/// Returns the URL path segment for this version.
	pub const fn as_str(self) -> &'static str {
		match self {
			ApiVersion::V1_0 => "v1.0",
			ApiVersion::Beta => "beta",
		}
	}
}
impl Display for ApiVersion {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Service client kinds built by the client factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClientKind {
	/// [`ApplicationsClient`].
	Applications,
	/// [`ApplicationTemplatesClient`].
	ApplicationTemplates,
	/// [`DirectoryObjectsClient`].
	DirectoryObjects,
}
impl ClientKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ClientKind::Applications => "applications",
			ClientKind::ApplicationTemplates => "application_templates",
			ClientKind::DirectoryObjects => "directory_objects",
		}
	}
}
impl Display for ClientKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
