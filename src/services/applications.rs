//! Clients used by the application resources.

// self
use crate::{
	_prelude::*,
	msgraph::{
		ApplicationTemplatesClient, ApplicationsClient, BaseClient, ClientKind,
		DirectoryObjectsClient,
	},
	obs,
	options::ClientOptions,
	services::overrides,
};

/// Clients the application resources talk to.
///
/// Each client owns its own [`BaseClient`]; the only thing they share is one [`ReqwestClient`],
/// and with it the connection pool.
#[derive(Clone, Debug)]
pub struct ApplicationsClients {
	/// `/applications` client.
	pub applications_client: ApplicationsClient,
	/// `/applicationTemplates` client.
	pub application_templates_client: ApplicationTemplatesClient,
	/// `/directoryObjects` client.
	pub directory_objects_client: DirectoryObjectsClient,
}

/// Builds the application service clients for `options`.
///
/// Construction performs no I/O and returns no error; configuration problems surface on first
/// use. All three clients send through [`ClientOptions::http`], or through one default
/// [`ReqwestClient`] built here when it is unset.
/// Endpoint-keyed API version overrides are applied before
/// [`ClientOptions::configure_client`], which never touches the API version.
pub fn new_client(options: &ClientOptions) -> ApplicationsClients {
	let http = options.http.clone().unwrap_or_default();
	let mut applications_client =
		ApplicationsClient::with_http_client(options.tenant_id.clone(), http.clone());

	prepare(options, ClientKind::Applications, &mut applications_client.base_client);

	let mut application_templates_client =
		ApplicationTemplatesClient::with_http_client(options.tenant_id.clone(), http.clone());

	prepare(
		options,
		ClientKind::ApplicationTemplates,
		&mut application_templates_client.base_client,
	);

	let mut directory_objects_client =
		DirectoryObjectsClient::with_http_client(options.tenant_id.clone(), http);

	prepare(options, ClientKind::DirectoryObjects, &mut directory_objects_client.base_client);

	ApplicationsClients {
		applications_client,
		application_templates_client,
		directory_objects_client,
	}
}

fn prepare(options: &ClientOptions, kind: ClientKind, client: &mut BaseClient) {
	let endpoint = options.environment.ms_graph.endpoint;

	if let Some(api_version) = overrides::api_version_override(endpoint, kind) {
		obs::record_api_version_override(kind, endpoint, api_version);

		client.api_version = api_version;
	}

	options.configure_client(client);
}
