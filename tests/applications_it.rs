// std
use std::{io, sync::Arc};
// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use directory_provider::{
	auth::{AccessToken, Authorizer, ObjectId, StaticTokenAuthorizer, TemplateId, TenantId},
	environment::Environment,
	error::{ConfigError, DecodeError, Error, Result},
	msgraph::BaseClient,
	options::ClientOptions,
	reqwest::{
		Client as ReqwestClient,
		header::{HeaderMap, HeaderValue},
	},
	services::applications::{ApplicationsClients, new_client},
	url::Url,
};

const ACCESS_TOKEN: &str = "integration-token";

struct RevokedAuthorizer;
impl Authorizer for RevokedAuthorizer {
	fn token(&self) -> Result<AccessToken> {
		let source = io::Error::new(io::ErrorKind::PermissionDenied, "Credential was revoked.");

		Err(ConfigError::authorizer(source).into())
	}
}

fn build_clients(server: &MockServer, environment: Environment) -> ApplicationsClients {
	new_client(&build_options(server, environment))
}

fn build_options(server: &MockServer, environment: Environment) -> ClientOptions {
	let endpoint =
		Url::parse(&server.base_url()).expect("Mock server URL should parse successfully.");
	let tenant = TenantId::new("contoso-tenant")
		.expect("Tenant identifier should be valid for application client tests.");

	ClientOptions::new(tenant, environment)
		.with_authorizer(Arc::new(StaticTokenAuthorizer::new(ACCESS_TOKEN)))
		.with_terraform_version("1.9.0")
		.with_configure(move |client: &mut BaseClient| {
			client.endpoint = endpoint.clone();
		})
}

fn object_id(value: &str) -> ObjectId {
	ObjectId::new(value).expect("Object identifier fixture should be valid.")
}

fn template_id(value: &str) -> TemplateId {
	TemplateId::new(value).expect("Template identifier fixture should be valid.")
}

#[tokio::test]
async fn get_application_sends_credentials_and_user_agent() -> color_eyre::Result<()> {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1.0/applications/app-object-1")
				.header("authorization", format!("Bearer {ACCESS_TOKEN}"))
				.header_exists("user-agent");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"id": "app-object-1",
				"appId": "11111111-2222-3333-4444-555555555555",
				"displayName": "payroll",
				"createdDateTime": "2024-05-01T12:30:00Z"
			}));
		})
		.await;
	let app = clients.applications_client.get(&object_id("app-object-1")).await?;

	mock.assert_async().await;

	assert_eq!(app.id, Some(object_id("app-object-1")));
	assert_eq!(app.display_name.as_deref(), Some("payroll"));
	assert!(app.created_date_time.is_some());

	Ok(())
}

#[tokio::test]
async fn list_applications_forwards_filter() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/v1.0/applications")
				.query_param("$filter", "displayName eq 'payroll'");
			then.status(200).json_body(json!({
				"@odata.context": "https://graph.microsoft.com/v1.0/$metadata#applications",
				"value": [
					{ "id": "app-1", "displayName": "payroll" },
					{ "id": "app-2", "displayName": "payroll" }
				]
			}));
		})
		.await;
	let apps = clients
		.applications_client
		.list(Some("displayName eq 'payroll'"))
		.await
		.expect("Filtered list should succeed.");

	mock.assert_async().await;

	assert_eq!(apps.len(), 2);
	assert_eq!(apps[1].id, Some(object_id("app-2")));
}

#[tokio::test]
async fn delete_application_accepts_no_content() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let mock = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/v1.0/applications/app-object-1");
			then.status(204);
		})
		.await;

	clients
		.applications_client
		.delete(&object_id("app-object-1"))
		.await
		.expect("Delete should succeed on 204.");
	mock.assert_async().await;
}

#[tokio::test]
async fn missing_application_maps_to_not_found() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/applications/gone");
			then.status(404).json_body(json!({
				"error": {
					"code": "Request_ResourceNotFound",
					"message": "Resource 'gone' does not exist."
				}
			}));
		})
		.await;
	let err = clients
		.applications_client
		.get(&object_id("gone"))
		.await
		.expect_err("Missing application should fail.");

	assert!(err.is_not_found());
	assert!(matches!(
		err,
		Error::Api { code: Some(ref code), .. } if code == "Request_ResourceNotFound"
	));
}

#[tokio::test]
async fn malformed_payload_reports_decode_path() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/applications");
			then.status(200).json_body(json!({ "value": [{ "id": 42 }] }));
		})
		.await;
	let err = clients
		.applications_client
		.list(None)
		.await
		.expect_err("Numeric object IDs should fail to decode.");
	let Error::Decode(DecodeError::Json { source, status }) = err else {
		panic!("Expected a decode error.");
	};

	assert_eq!(status, 200);
	assert_eq!(source.path().to_string(), "value[0].id");
}

#[tokio::test]
async fn us_gov_l4_instantiates_templates_on_beta() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::US_GOVERNMENT_L4);
	let instantiate = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/beta/applicationTemplates/8adf8e6e/instantiate")
				.json_body(json!({ "displayName": "salesforce" }));
			then.status(201).json_body(json!({
				"application": { "id": "app-object-9", "displayName": "salesforce" },
				"servicePrincipal": {
					"id": "sp-object-9",
					"accountEnabled": true,
					"servicePrincipalType": "Application"
				}
			}));
		})
		.await;
	let apps = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/applications/app-object-9");
			then.status(200).json_body(json!({ "id": "app-object-9" }));
		})
		.await;
	let created = clients
		.application_templates_client
		.instantiate(&template_id("8adf8e6e"), "salesforce")
		.await
		.expect("Template instantiation should succeed.");

	clients
		.applications_client
		.get(&object_id("app-object-9"))
		.await
		.expect("Applications client must stay on v1.0 in US Gov L4.");
	instantiate.assert_async().await;
	apps.assert_async().await;

	assert_eq!(created.application.id, Some(object_id("app-object-9")));
	assert_eq!(created.service_principal.account_enabled, Some(true));
}

#[tokio::test]
async fn global_templates_stay_on_v1() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/applicationTemplates/8adf8e6e");
			then.status(200).json_body(json!({
				"id": "8adf8e6e",
				"displayName": "Salesforce",
				"categories": ["crm", "sales"],
				"supportedSingleSignOnModes": ["saml"]
			}));
		})
		.await;
	let template = clients
		.application_templates_client
		.get(&template_id("8adf8e6e"))
		.await
		.expect("Template lookup should succeed.");

	mock.assert_async().await;

	assert_eq!(template.categories, ["crm", "sales"]);
	assert_eq!(template.supported_single_sign_on_modes, ["saml"]);
}

#[tokio::test]
async fn directory_objects_resolve_by_ids() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let typed = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1.0/directoryObjects/getByIds")
				.json_body(json!({ "ids": ["user-1", "group-1"], "types": ["user", "group"] }));
			then.status(200).json_body(json!({
				"value": [
					{ "@odata.type": "#microsoft.graph.user", "id": "user-1", "displayName": "Jo" },
					{ "@odata.type": "#microsoft.graph.group", "id": "group-1" }
				]
			}));
		})
		.await;
	let untyped = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/v1.0/directoryObjects/getByIds")
				.json_body(json!({ "ids": ["sp-1"] }));
			then.status(200).json_body(json!({
				"value": [{ "@odata.type": "#microsoft.graph.servicePrincipal", "id": "sp-1" }]
			}));
		})
		.await;
	let objects = clients
		.directory_objects_client
		.get_by_ids(&[object_id("user-1"), object_id("group-1")], &["user", "group"])
		.await
		.expect("Typed lookup should succeed.");
	let principals = clients
		.directory_objects_client
		.get_by_ids(&[object_id("sp-1")], &[])
		.await
		.expect("Untyped lookup should succeed.");

	typed.assert_async().await;
	untyped.assert_async().await;

	assert_eq!(
		objects.iter().filter_map(|object| object.type_name()).collect::<Vec<_>>(),
		["user", "group"]
	);
	assert_eq!(principals[0].type_name(), Some("servicePrincipal"));
}

#[tokio::test]
async fn get_directory_object_reports_server_errors() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/directoryObjects/obj-1");
			then.status(504).body("upstream timed out");
		})
		.await;
	let err = clients
		.directory_objects_client
		.get(&object_id("obj-1"))
		.await
		.expect_err("Gateway timeouts should surface as API errors.");

	assert_eq!(err.status(), Some(504));
	assert!(matches!(err, Error::Api { ref message, .. } if message == "upstream timed out"));
}

#[tokio::test]
async fn identifiers_cannot_escape_their_path_segment() {
	let server = MockServer::start_async().await;
	let clients = build_clients(&server, Environment::GLOBAL);
	let users = server
		.mock_async(|when, then| {
			when.path("/v1.0/users/u1");
			then.status(204);
		})
		.await;
	let applications = server
		.mock_async(|when, then| {
			when.method(DELETE).path_matches(r"^/v1\.0/applications/x");
			then.status(204);
		})
		.await;

	clients
		.applications_client
		.delete(&object_id("x/../../users/u1"))
		.await
		.expect("Traversal-shaped IDs should stay under /applications.");
	applications.assert_async().await;

	let err = clients
		.applications_client
		.delete(&object_id(".."))
		.await
		.expect_err("Dot-segment IDs should be rejected before sending.");

	assert!(matches!(err, Error::Config(ConfigError::InvalidPathSegment { .. })));
	assert_eq!(users.hits_async().await, 0);
}

#[tokio::test]
async fn failing_authorizer_surfaces_as_config_error_before_sending() {
	let server = MockServer::start_async().await;
	let clients = new_client(
		&build_options(&server, Environment::GLOBAL).with_authorizer(Arc::new(RevokedAuthorizer)),
	);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v1.0/applications/app-object-1");
			then.status(200).json_body(json!({ "id": "app-object-1" }));
		})
		.await;
	let err = clients
		.applications_client
		.get(&object_id("app-object-1"))
		.await
		.expect_err("Revoked credentials should fail the request.");

	assert!(matches!(err, Error::Config(ConfigError::Authorizer { .. })));
	assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn injected_http_client_is_shared_by_every_client() {
	let server = MockServer::start_async().await;
	let mut headers = HeaderMap::new();

	headers.insert("x-transport", HeaderValue::from_static("shared"));

	let http = ReqwestClient::builder()
		.default_headers(headers)
		.build()
		.expect("Test HTTP client should build.");
	let clients = new_client(&build_options(&server, Environment::GLOBAL).with_http_client(http));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.header("x-transport", "shared")
				.path_matches(r"^/v1\.0/(applications|applicationTemplates|directoryObjects)/shared$");
			then.status(200).json_body(json!({ "id": "shared" }));
		})
		.await;

	clients
		.applications_client
		.get(&object_id("shared"))
		.await
		.expect("Applications client should use the injected transport.");
	clients
		.application_templates_client
		.get(&template_id("shared"))
		.await
		.expect("Templates client should use the injected transport.");
	clients
		.directory_objects_client
		.get(&object_id("shared"))
		.await
		.expect("Directory objects client should use the injected transport.");

	assert_eq!(mock.hits_async().await, 3);
}
