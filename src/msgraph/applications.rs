//! Client for `/applications`.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::{ObjectId, TenantId},
	msgraph::{Application, BaseClient, ClientKind, base, models::ValueList},
};

/// Performs operations on application registrations.
#[derive(Clone, Debug)]
pub struct ApplicationsClient {
	/// Connection settings applied by the client factory.
	pub base_client: BaseClient,
}
impl ApplicationsClient {
	const KIND: ClientKind = ClientKind::Applications;

	/// Creates a client scoped to `tenant_id` with default settings.
	pub fn new(tenant_id: TenantId) -> Self {
		Self { base_client: BaseClient::new(tenant_id) }
	}

	/// Creates a client scoped to `tenant_id` that shares the `http` transport.
	pub fn with_http_client(tenant_id: TenantId, http: ReqwestClient) -> Self {
		Self { base_client: BaseClient::with_http_client(tenant_id, http) }
	}

	/// Retrieves an application by object ID.
	pub async fn get(&self, id: &ObjectId) -> Result<Application> {
		base::observe(Self::KIND, "get", async {
			let request = self.base_client.request(Method::GET, &["applications", id.as_ref()])?;

			self.base_client.execute(request).await
		})
		.await
	}

	/// Lists applications, optionally narrowed by an OData `$filter` expression.
	///
	/// Only the first page is returned; paging is left to the caller.
	pub async fn list(&self, filter: Option<&str>) -> Result<Vec<Application>> {
		base::observe(Self::KIND, "list", async {
			let mut request = self.base_client.request(Method::GET, &["applications"])?;

			if let Some(filter) = filter {
				request = request.query(&[("$filter", filter)]);
			}

			let page: ValueList<Application> = self.base_client.execute(request).await?;

			Ok(page.value)
		})
		.await
	}

	/// Deletes an application by object ID.
	pub async fn delete(&self, id: &ObjectId) -> Result<()> {
		base::observe(Self::KIND, "delete", async {
			let request =
				self.base_client.request(Method::DELETE, &["applications", id.as_ref()])?;

			self.base_client.execute_empty(request).await
		})
		.await
	}
}
