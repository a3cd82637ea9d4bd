//! Diagnostics returned by schema validators.
//!
//! Validators never fail abnormally: every outcome is a (possibly empty) [`Diagnostics`] value
//! that the surrounding schema framework inspects to decide whether an apply may proceed. Each
//! [`Diagnostic`] carries the [`AttributePath`] of the offending attribute so messages can name
//! it.

// std
use std::{ops::Deref, slice::Iter};
// self
use crate::_prelude::*;

/// How seriously the framework should treat a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
	/// Blocks the operation.
	Error,
	/// Reported to the user but does not block.
	Warning,
}
impl Severity {
	/// Returns a stable label suitable for log fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warning => "warning",
		}
	}
}
impl Display for Severity {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One step of an [`AttributePath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
	/// Named attribute of an object or block.
	Attribute(String),
	/// Key of a map element.
	ElementKey(String),
	/// Index of a list element.
	Index(usize),
}

/// Location of an attribute inside a resource configuration.
///
/// Renders as `owners[0].email` or `tags["env"]`; the empty (root) path renders as `value`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath(Vec<PathStep>);
impl AttributePath {
	/// Returns the root path.
	pub fn root() -> Self {
		Self::default()
	}

	/// Starts a path at a top-level attribute.
	pub fn attribute(name: impl Into<String>) -> Self {
		Self::root().with_attribute(name)
	}

	/// Appends a named attribute step.
	pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
		self.0.push(PathStep::Attribute(name.into()));

		self
	}

	/// Appends a map key step.
	pub fn with_element_key(mut self, key: impl Into<String>) -> Self {
		self.0.push(PathStep::ElementKey(key.into()));

		self
	}

	/// Appends a list index step.
	pub fn with_index(mut self, index: usize) -> Self {
		self.0.push(PathStep::Index(index));

		self
	}

	/// Returns `true` for the root path.
	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over the path steps.
	pub fn iter(&self) -> Iter<'_, PathStep> {
		self.0.iter()
	}
}
impl Display for AttributePath {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_root() {
			return f.write_str("value");
		}

		for (idx, step) in self.0.iter().enumerate() {
			match step {
				PathStep::Attribute(name) if idx == 0 => f.write_str(name)?,
				PathStep::Attribute(name) => write!(f, ".{name}")?,
				PathStep::ElementKey(key) => write!(f, "[{key:?}]")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}

		Ok(())
	}
}
impl FromIterator<PathStep> for AttributePath {
	fn from_iter<I: IntoIterator<Item = PathStep>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	/// Severity reported to the framework.
	pub severity: Severity,
	/// Short, user-facing headline.
	pub summary: String,
	/// Optional longer explanation naming the attribute and value.
	pub detail: Option<String>,
	/// Attribute the finding applies to.
	pub attribute_path: AttributePath,
}
impl Diagnostic {
	/// Creates an error-severity diagnostic for `path`.
	pub fn error(summary: impl Into<String>, path: &AttributePath) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: None,
			attribute_path: path.clone(),
		}
	}

	/// Creates a warning-severity diagnostic for `path`.
	pub fn warning(summary: impl Into<String>, path: &AttributePath) -> Self {
		Self { severity: Severity::Warning, ..Self::error(summary, path) }
	}

	/// Attaches a detail message.
	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail = Some(detail.into());

		self
	}
}
impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "{}: {}: {}", self.severity, self.attribute_path, self.summary)?;

		if let Some(detail) = &self.detail {
			write!(f, " ({detail})")?;
		}

		Ok(())
	}
}

/// Ordered collection of diagnostics produced by one validation call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);
impl Diagnostics {
	/// Returns an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a diagnostic.
	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.0.push(diagnostic);
	}

	/// Appends every diagnostic from `other`.
	pub fn extend(&mut self, other: Diagnostics) {
		self.0.extend(other.0);
	}

	/// Returns `true` when any diagnostic has [`Severity::Error`].
	pub fn has_error(&self) -> bool {
		self.0.iter().any(|d| d.severity == Severity::Error)
	}

	/// Consumes the collection into its diagnostics.
	pub fn into_vec(self) -> Vec<Diagnostic> {
		self.0
	}
}
impl Deref for Diagnostics {
	type Target = [Diagnostic];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<Diagnostic> for Diagnostics {
	fn from(value: Diagnostic) -> Self {
		Self(vec![value])
	}
}
impl FromIterator<Diagnostic> for Diagnostics {
	fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
impl IntoIterator for Diagnostics {
	type IntoIter = std::vec::IntoIter<Diagnostic>;
	type Item = Diagnostic;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
