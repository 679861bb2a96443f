//! Partial-response field selection.

// self
use crate::_prelude::*;

/// Default fields requested for profile reads.
pub const PROFILE_FIELDS: &[&str] =
	&["id", "username", "threads_profile_picture_url", "threads_biography"];
/// Default fields requested for post reads.
pub const POST_FIELDS: &[&str] = &[
	"id",
	"media_product_type",
	"media_type",
	"media_url",
	"permalink",
	"owner",
	"username",
	"text",
	"timestamp",
	"shortcode",
	"thumbnail_url",
	"children",
	"is_quote_post",
	"alt_text",
	"link_attachment_url",
	"has_replies",
	"is_reply",
	"is_reply_owned_by_me",
	"root_post",
	"replied_to",
	"hide_status",
	"reply_audience",
	"quoted_post",
	"reposted_post",
	"gif_url",
	"poll_attachment",
];
/// Default fields requested for container status reads.
pub const STATUS_FIELDS: &[&str] = &["status", "error_message"];
/// Default fields requested for publishing quota reads.
pub const QUOTA_FIELDS: &[&str] = &["quota_usage", "config"];

/// Errors emitted when validating field names.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum FieldSetError {
	/// Empty field names are not allowed.
	#[error("Field names cannot be empty.")]
	Empty,
	/// Field names cannot contain the comma delimiter or whitespace.
	#[error("Field name contains a delimiter or whitespace: {field}.")]
	InvalidCharacter {
		/// The offending field name.
		field: String,
	},
}

/// Ordered, deduplicated list of response fields sent as the `fields` query parameter.
///
/// Unlike scope sets, order is significant: the serialized parameter keeps the caller's
/// order and drops later duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldSet(Vec<String>);
impl FieldSet {
	/// Creates a validated field set from any iterator.
	pub fn new<I, S>(fields: I) -> Result<Self, FieldSetError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut out = Vec::new();

		for field in fields {
			let field = field.into();

			if field.is_empty() {
				return Err(FieldSetError::Empty);
			}
			if field.chars().any(|c| c == ',' || c.is_whitespace()) {
				return Err(FieldSetError::InvalidCharacter { field });
			}
			if !out.contains(&field) {
				out.push(field);
			}
		}

		Ok(Self(out))
	}

	/// Builds a set from known-good constant field names without validation.
	pub(crate) fn from_static(fields: &[&str]) -> Self {
		Self(fields.iter().map(|f| (*f).to_owned()).collect())
	}

	/// Number of distinct fields.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if no fields are selected.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over the fields in request order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Comma-joined representation used on the wire.
	pub fn joined(&self) -> String {
		self.0.join(",")
	}
}
impl FromStr for FieldSet {
	type Err = FieldSetError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.trim().is_empty() {
			return Ok(Self::default());
		}

		Self::new(s.split(',').map(str::trim))
	}
}
impl TryFrom<Vec<String>> for FieldSet {
	type Error = FieldSetError;

	fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl From<FieldSet> for Vec<String> {
	fn from(value: FieldSet) -> Self {
		value.0
	}
}
impl Display for FieldSet {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.joined())
	}
}

/// Resolves the `fields` parameter, falling back to `defaults`.
pub(crate) fn fields_param(fields: Option<&FieldSet>, defaults: &[&str]) -> String {
	fields.map(FieldSet::joined).unwrap_or_else(|| defaults.join(","))
}
