//! Client for `/applicationTemplates`.

// crates.io
use reqwest::Method;
// self
use crate::{
	_prelude::*,
	auth::{TemplateId, TenantId},
	msgraph::{ApplicationServicePrincipal, ApplicationTemplate, BaseClient, ClientKind, base},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InstantiateRequest<'a> {
	display_name: &'a str,
}

/// Reads gallery templates and instantiates them into application/service principal pairs.
#[derive(Clone, Debug)]
pub struct ApplicationTemplatesClient {
	/// Connection settings applied by the client factory.
	pub base_client: BaseClient,
}
impl ApplicationTemplatesClient {
	const KIND: ClientKind = ClientKind::ApplicationTemplates;

	/// Creates a client scoped to `tenant_id` with default settings.
	pub fn new(tenant_id: TenantId) -> Self {
		Self { base_client: BaseClient::new(tenant_id) }
	}

	/// Creates a client scoped to `tenant_id` that shares the `http` transport.
	pub fn with_http_client(tenant_id: TenantId, http: ReqwestClient) -> Self {
		Self { base_client: BaseClient::with_http_client(tenant_id, http) }
	}

	/// Retrieves a gallery template.
	pub async fn get(&self, id: &TemplateId) -> Result<ApplicationTemplate> {
		base::observe(Self::KIND, "get", async {
			let request =
				self.base_client.request(Method::GET, &["applicationTemplates", id.as_ref()])?;

			self.base_client.execute(request).await
		})
		.await
	}

	/// Creates an application and service principal from a gallery template.
	///
	/// The call is not idempotent: a timeout after the server accepted the request can leave a
	/// created pair behind, so callers should not blindly retry it.
	pub async fn instantiate(
		&self,
		id: &TemplateId,
		display_name: &str,
	) -> Result<ApplicationServicePrincipal> {
		base::observe(Self::KIND, "instantiate", async {
			let request = self
				.base_client
				.request(Method::POST, &["applicationTemplates", id.as_ref(), "instantiate"])?
				.json(&InstantiateRequest { display_name });

			self.base_client.execute(request).await
		})
		.await
	}
}
