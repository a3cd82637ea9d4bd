//! National cloud environments and the Graph endpoints they resolve to.
//!
//! An [`Environment`] is selected once per provider configuration (usually from its name, e.g.
//! `usgovernmentl4`) and drives both the base URL installed on every client and the
//! endpoint-keyed API version overrides applied by the client factory.

// std
use std::sync::LazyLock;
// self
use crate::_prelude::*;

// Indexed by `MsGraphEndpoint as usize`; parsed once per process.
static ENDPOINT_URLS: LazyLock<[Url; 5]> = LazyLock::new(|| {
	MsGraphEndpoint::ALL.map(|endpoint| {
		Url::parse(endpoint.as_str()).expect("Built-in Graph endpoints are valid URLs.")
	})
});

/// Errors raised while resolving an environment by name.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EnvironmentError {
	/// The name does not match any known national cloud.
	#[error("Unknown environment `{name}`; expected one of: {}.", Environment::NAMES.join(", "))]
	Unknown {
		/// Name that failed to resolve.
		name: String,
	},
}

/// Graph API endpoint identity for each national cloud.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MsGraphEndpoint {
	/// Public cloud.
	Global,
	/// Cloud operated by 21Vianet.
	China,
	/// US Government (GCC High).
	UsGovL4,
	/// US Government Department of Defense.
	UsGovL5,
	/// Early-access canary ring.
	Canary,
}
impl MsGraphEndpoint {
	const ALL: [Self; 5] = [Self::Global, Self::China, Self::UsGovL4, Self::UsGovL5, Self::Canary];

	/// Returns the endpoint's base URL without a trailing slash.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Global => "https://graph.microsoft.com",
			Self::China => "https://microsoftgraph.chinacloudapi.cn",
			Self::UsGovL4 => "https://graph.microsoft.us",
			Self::UsGovL5 => "https://dod-graph.microsoft.us",
			Self::Canary => "https://canary.graph.microsoft.com",
		}
	}

	/// Returns the endpoint's base [`Url`].
	pub fn url(self) -> Url {
		ENDPOINT_URLS[self as usize].clone()
	}
}
impl Display for MsGraphEndpoint {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Graph API surface exposed by an environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MsGraphApi {
	/// Well-known application ID of Microsoft Graph in this cloud.
	pub app_id: &'static str,
	/// Endpoint identity used for client base URLs and override lookups.
	pub endpoint: MsGraphEndpoint,
}

/// A national cloud the provider can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Environment {
	/// Canonical lowercase name (`global`, `usgovernmentl4`, …).
	pub name: &'static str,
	/// Graph API surface.
	pub ms_graph: MsGraphApi,
}
impl Environment {
	/// Public cloud.
	pub const GLOBAL: Self = Self::new("global", MsGraphEndpoint::Global);
	/// China cloud.
	pub const CHINA: Self = Self::new("china", MsGraphEndpoint::China);
	/// US Government L4 cloud.
	pub const US_GOVERNMENT_L4: Self = Self::new("usgovernmentl4", MsGraphEndpoint::UsGovL4);
	/// US Government L5 (DoD) cloud.
	pub const US_GOVERNMENT_L5: Self = Self::new("usgovernmentl5", MsGraphEndpoint::UsGovL5);
	/// Canary ring.
	pub const CANARY: Self = Self::new("canary", MsGraphEndpoint::Canary);

	const ALL: [Self; 5] =
		[Self::GLOBAL, Self::CHINA, Self::US_GOVERNMENT_L4, Self::US_GOVERNMENT_L5, Self::CANARY];
	const MS_GRAPH_APP_ID: &'static str = "00000003-0000-0000-c000-000000000000";
	const NAMES: [&'static str; 5] =
		["global", "china", "usgovernmentl4", "usgovernmentl5", "canary"];

	const fn new(name: &'static str, endpoint: MsGraphEndpoint) -> Self {
		Self { name, ms_graph: MsGraphApi { app_id: Self::MS_GRAPH_APP_ID, endpoint } }
	}

	/// Resolves an environment from its name, ignoring ASCII case and surrounding whitespace.
	///
	/// `public` is accepted as an alias of `global`.
	pub fn from_name(name: &str) -> Result<Self, EnvironmentError> {
		let wanted = name.trim();

		if wanted.eq_ignore_ascii_case("public") {
			return Ok(Self::GLOBAL);
		}

		Self::ALL
			.into_iter()
			.find(|env| env.name.eq_ignore_ascii_case(wanted))
			.ok_or_else(|| EnvironmentError::Unknown { name: name.to_owned() })
	}
}
impl Default for Environment {
	fn default() -> Self {
		Self::GLOBAL
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.name)
	}
}
impl FromStr for Environment {
	type Err = EnvironmentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_name(s)
	}
}
impl TryFrom<String> for Environment {
	type Error = EnvironmentError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_name(&value)
	}
}
impl From<Environment> for String {
	fn from(value: Environment) -> Self {
		value.name.to_owned()
	}
}
