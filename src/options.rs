//! Options shared by every service client factory.
//!
//! [`ClientOptions`] carries the tenant, the target [`Environment`], the shared HTTP transport,
//! and the callback that installs credential settings on each freshly built [`BaseClient`].
//! Factories call [`ClientOptions::configure_client`] once per client after any
//! endpoint-specific overrides have been applied.

// self
use crate::{
	_prelude::*,
	auth::{Authorizer, TenantId},
	environment::Environment,
	msgraph::BaseClient,
};

/// Callback applied to every [`BaseClient`] a factory builds.
///
/// Closures of shape `Fn(&mut BaseClient)` implement the trait, so most callers never name it.
pub trait ConfigureClient: Send + Sync {
	/// Mutates `client` in place.
	fn configure_client(&self, client: &mut BaseClient);
}
impl<F> ConfigureClient for F
where
	F: Fn(&mut BaseClient) + Send + Sync,
{
	fn configure_client(&self, client: &mut BaseClient) {
		self(client)
	}
}

/// Immutable input to the service client factories.
#[derive(Clone)]
pub struct ClientOptions {
	/// Tenant every client is scoped to.
	pub tenant_id: TenantId,
	/// Target national cloud.
	pub environment: Environment,
	/// Credential source installed on every client.
	pub authorizer: Option<Arc<dyn Authorizer>>,
	/// Terraform CLI version reported in the user agent.
	pub terraform_version: Option<String>,
	/// Partner ID appended to the user agent for usage attribution.
	pub partner_id: Option<String>,
	/// Extra callback run after the standard settings are installed.
	pub configure: Option<Arc<dyn ConfigureClient>>,
	/// HTTP transport shared by every client a factory builds; a default client is created when
	/// unset.
	pub http: Option<ReqwestClient>,
}
impl ClientOptions {
	/// Creates options for `tenant_id` in `environment` with no credentials or extra callback.
	pub fn new(tenant_id: TenantId, environment: Environment) -> Self {
		Self {
			tenant_id,
			environment,
			authorizer: None,
			terraform_version: None,
			partner_id: None,
			configure: None,
			http: None,
		}
	}

	/// Sets the credential source.
	pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
		self.authorizer = Some(authorizer);

		self
	}

	/// Sets the Terraform CLI version reported in the user agent.
	pub fn with_terraform_version(mut self, version: impl Into<String>) -> Self {
		self.terraform_version = Some(version.into());

		self
	}

	/// Sets the partner ID appended to the user agent.
	pub fn with_partner_id(mut self, partner_id: impl Into<String>) -> Self {
		self.partner_id = Some(partner_id.into());

		self
	}

	/// Installs an extra callback run after the standard settings.
	pub fn with_configure(mut self, configure: impl ConfigureClient + 'static) -> Self {
		self.configure = Some(Arc::new(configure));

		self
	}

	/// Sets the HTTP transport shared by every client a factory builds.
	///
	/// Build it with [`ReqwestClient::builder`] to handle TLS initialization failures instead of
	/// letting the factory fall back to [`ReqwestClient::default`].
	pub fn with_http_client(mut self, http: ReqwestClient) -> Self {
		self.http = Some(http);

		self
	}

	/// Builds the `User-Agent` header value sent by every client.
	pub fn user_agent(&self) -> String {
		let terraform = self.terraform_version.as_deref().unwrap_or("unknown");
		let mut agent = format!(
			"HashiCorp Terraform/{terraform} (+https://www.terraform.io) {}/{}",
			env!("CARGO_PKG_NAME"),
			env!("CARGO_PKG_VERSION"),
		);

		if let Some(partner_id) = self.partner_id.as_deref().filter(|id| !id.trim().is_empty()) {
			agent.push_str(" pid-");
			agent.push_str(partner_id);
		}

		agent
	}

	/// Installs the environment endpoint, credentials, and user agent on `client`, then runs the
	/// extra callback (if any).
	///
	/// The API version is left untouched so factory-level overrides survive configuration.
	pub fn configure_client(&self, client: &mut BaseClient) {
		client.endpoint = self.environment.ms_graph.endpoint.url();
		client.authorizer = self.authorizer.clone();
		client.user_agent = Some(self.user_agent());

		if let Some(configure) = &self.configure {
			configure.configure_client(client);
		}
	}
}
impl Debug for ClientOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ClientOptions")
			.field("tenant_id", &self.tenant_id)
			.field("environment", &self.environment)
			.field("authorizer", &self.authorizer.as_ref().map(|_| "<authorizer>"))
			.field("terraform_version", &self.terraform_version)
			.field("partner_id", &self.partner_id)
			.field("configure", &self.configure.as_ref().map(|_| "<callback>"))
			.field("http", &self.http.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{auth::StaticTokenAuthorizer, msgraph::ApiVersion};

	fn options() -> ClientOptions {
		let tenant = TenantId::new("tenant-a").expect("Tenant fixture should be valid.");

		ClientOptions::new(tenant, Environment::CHINA)
	}

	#[test]
	fn user_agent_includes_versions_and_partner() {
		let agent =
			options().with_terraform_version("1.9.5").with_partner_id("acce5fac").user_agent();

		assert!(agent.starts_with("HashiCorp Terraform/1.9.5 (+https://www.terraform.io) "));
		assert!(agent.contains(concat!("directory-provider/", env!("CARGO_PKG_VERSION"))));
		assert!(agent.ends_with(" pid-acce5fac"));
		assert!(!options().with_partner_id("  ").user_agent().contains("pid-"));
	}

	#[test]
	fn configure_client_installs_environment_settings() {
		let options = options().with_authorizer(Arc::new(StaticTokenAuthorizer::new("t")));
		let mut client = BaseClient::new(options.tenant_id.clone());

		client.api_version = ApiVersion::Beta;
		options.configure_client(&mut client);

		assert_eq!(client.endpoint.as_str(), "https://microsoftgraph.chinacloudapi.cn/");
		assert_eq!(client.api_version, ApiVersion::Beta, "API version must not be reset.");
		assert!(client.authorizer.is_some());
		assert!(client.user_agent.as_deref().is_some_and(|ua| ua.contains("Terraform/unknown")));
	}

	#[test]
	fn extra_callback_runs_after_standard_settings() {
		let options = options().with_configure(|client: &mut BaseClient| {
			client.user_agent = client.user_agent.take().map(|ua| format!("{ua} custom"));
		});
		let mut client = BaseClient::new(options.tenant_id.clone());

		options.configure_client(&mut client);

		assert!(client.user_agent.as_deref().is_some_and(|ua| ua.ends_with(" custom")));
		assert!(format!("{options:?}").contains("<callback>"));
	}
}
