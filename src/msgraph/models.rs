//! Graph resource models used by the service clients.
//!
//! Only the fields the applications service reads are modeled; unknown fields are ignored on
//! deserialization.

// self
use crate::{
	_prelude::*,
	auth::{ObjectId, TemplateId},
};

/// An application registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
	/// Object ID of the registration.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<ObjectId>,
	/// Client (application) ID.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub app_id: Option<String>,
	/// Display name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub display_name: Option<String>,
	/// Supported account types.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sign_in_audience: Option<String>,
	/// Identifier URIs.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub identifier_uris: Vec<String>,
	/// Free-form notes.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	/// Creation timestamp.
	#[serde(
		default,
		skip_serializing,
		deserialize_with = "time::serde::rfc3339::option::deserialize"
	)]
	pub created_date_time: Option<OffsetDateTime>,
}

/// An entry in the application gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationTemplate {
	/// Template identifier.
	pub id: TemplateId,
	/// Display name.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Publisher name.
	#[serde(default)]
	pub publisher: Option<String>,
	/// Gallery categories.
	#[serde(default)]
	pub categories: Vec<String>,
	/// Provisioning modes the template supports.
	#[serde(default)]
	pub supported_provisioning_types: Vec<String>,
	/// Single sign-on modes the template supports.
	#[serde(default)]
	pub supported_single_sign_on_modes: Vec<String>,
}

/// A service principal (enterprise application).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipal {
	/// Object ID of the service principal.
	#[serde(default)]
	pub id: Option<ObjectId>,
	/// Client ID of the backing application.
	#[serde(default)]
	pub app_id: Option<String>,
	/// Display name.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Whether sign-in is enabled.
	#[serde(default)]
	pub account_enabled: Option<bool>,
	/// Principal type (`Application`, `ManagedIdentity`, …).
	#[serde(default)]
	pub service_principal_type: Option<String>,
}

/// Result of instantiating an [`ApplicationTemplate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationServicePrincipal {
	/// Created application registration.
	pub application: Application,
	/// Created service principal.
	pub service_principal: ServicePrincipal,
}

/// A directory object of any type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryObject {
	/// OData type discriminator, e.g. `#microsoft.graph.user`.
	#[serde(rename = "@odata.type", default)]
	pub odata_type: Option<String>,
	/// Object ID.
	#[serde(default)]
	pub id: Option<ObjectId>,
	/// Display name, when the concrete type has one.
	#[serde(default)]
	pub display_name: Option<String>,
	/// Soft-deletion timestamp, when the object is in the recycle bin.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub deleted_date_time: Option<OffsetDateTime>,
}
impl DirectoryObject {
	/// Returns the concrete type name without the `#microsoft.graph.` prefix.
	pub fn type_name(&self) -> Option<&str> {
		self.odata_type
			.as_deref()
			.map(|ty| ty.strip_prefix("#microsoft.graph.").unwrap_or(ty))
	}
}

/// Collection envelope returned by list endpoints.
#[derive(Deserialize)]
pub(crate) struct ValueList<T> {
	pub(crate) value: Vec<T>,
}
