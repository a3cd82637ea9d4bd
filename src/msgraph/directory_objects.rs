//! Client for `/directoryObjects`.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::{ObjectId, TenantId},
	msgraph::{BaseClient, ClientKind, DirectoryObject, base, models::ValueList},
};

#[derive(Serialize)]
struct GetByIdsRequest<'a> {
	ids: &'a [ObjectId],
	#[serde(skip_serializing_if = "Option::is_none")]
	types: Option<&'a [&'a str]>,
}

/// Resolves directory objects of any type.
#[derive(Clone, Debug)]
pub struct DirectoryObjectsClient {
	/// Connection settings applied by the client factory.
	pub base_client: BaseClient,
}
impl DirectoryObjectsClient {
	const KIND: ClientKind = ClientKind::DirectoryObjects;

	/// Creates a client scoped to `tenant_id` with default settings.
	pub fn new(tenant_id: TenantId) -> Self {
		Self { base_client: BaseClient::new(tenant_id) }
	}

	/// Creates a client scoped to `tenant_id` that shares the `http` transport.
	pub fn with_http_client(tenant_id: TenantId, http: ReqwestClient) -> Self {
		Self { base_client: BaseClient::with_http_client(tenant_id, http) }
	}

	/// Retrieves a directory object by ID.
	pub async fn get(&self, id: &ObjectId) -> Result<DirectoryObject> {
		base::observe(Self::KIND, "get", async {
			let request =
				self.base_client.request(Method::GET, &["directoryObjects", id.as_ref()])?;

			self.base_client.execute(request).await
		})
		.await
	}

	/// Resolves several objects at once, optionally restricted to `types` (e.g. `user`, `group`).
	pub async fn get_by_ids(
		&self,
		ids: &[ObjectId],
		types: &[&str],
	) -> Result<Vec<DirectoryObject>> {
		base::observe(Self::KIND, "get_by_ids", async {
			let request = self
				.base_client
				.request(Method::POST, &["directoryObjects", "getByIds"])?
				.json(&GetByIdsRequest { ids, types: (!types.is_empty()).then_some(types) });
			let page: ValueList<DirectoryObject> = self.base_client.execute(request).await?;

			Ok(page.value)
		})
		.await
	}
}
