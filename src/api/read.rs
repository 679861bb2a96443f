//! Profile, timeline, search, and container-inspection reads.

// crates.io
use oauth2::http::Method;
// self
use crate::{
	_prelude::*,
	api::{
		POST_FIELDS, PROFILE_FIELDS, QUOTA_FIELDS, STATUS_FIELDS, SearchType, ThreadsClient,
		fields::{FieldSet, fields_param},
	},
	http::ThreadsHttpClient,
	obs::Operation,
};

/// Pagination and time-window filters shared by the timeline endpoints.
///
/// Unset cursors are omitted from the request entirely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageQuery {
	/// Maximum number of items per page.
	pub limit: u32,
	/// Fields to request; the default post fields when `None`.
	pub fields: Option<FieldSet>,
	/// Cursor pointing at the page before.
	pub before: Option<String>,
	/// Cursor pointing at the page after.
	pub after: Option<String>,
	/// Lower time bound (unix timestamp or strtotime-compatible value).
	pub since: Option<String>,
	/// Upper time bound (unix timestamp or strtotime-compatible value).
	pub until: Option<String>,
}
impl PageQuery {
	/// Default page size.
	pub const DEFAULT_LIMIT: u32 = 25;

	/// Creates a query with the default page size and no filters.
	pub fn new() -> Self {
		Self {
			limit: Self::DEFAULT_LIMIT,
			fields: None,
			before: None,
			after: None,
			since: None,
			until: None,
		}
	}

	/// Overrides the page size.
	pub fn with_limit(mut self, limit: u32) -> Self {
		self.limit = limit;

		self
	}

	/// Overrides the requested fields.
	pub fn with_fields(mut self, fields: FieldSet) -> Self {
		self.fields = Some(fields);

		self
	}

	/// Sets the `before` cursor.
	pub fn before(mut self, cursor: impl Into<String>) -> Self {
		self.before = Some(cursor.into());

		self
	}

	/// Sets the `after` cursor.
	pub fn after(mut self, cursor: impl Into<String>) -> Self {
		self.after = Some(cursor.into());

		self
	}

	/// Sets the `since` bound.
	pub fn since(mut self, since: impl Into<String>) -> Self {
		self.since = Some(since.into());

		self
	}

	/// Sets the `until` bound.
	pub fn until(mut self, until: impl Into<String>) -> Self {
		self.until = Some(until.into());

		self
	}
}
impl Default for PageQuery {
	fn default() -> Self {
		Self::new()
	}
}

impl<C> ThreadsClient<C>
where
	C: ?Sized + ThreadsHttpClient,
{
	/// Fetches a profile (`me` for the token owner).
	pub async fn profiles(&self, user: &str, fields: Option<&FieldSet>) -> Result<Value> {
		let request = self
			.request(Method::GET, user)?
			.query("fields", fields_param(fields, PROFILE_FIELDS));

		self.call(Operation::Profiles, request).await?.json()
	}

	/// Lists a user's posts; returns `{data, paging}`.
	pub async fn posts(&self, user: &str, query: &PageQuery) -> Result<Value> {
		self.page(Operation::Posts, &format!("{user}/threads"), query).await
	}

	/// Lists a user's replies; returns `{data, paging}`.
	pub async fn replies(&self, user: &str, query: &PageQuery) -> Result<Value> {
		self.page(Operation::Replies, &format!("{user}/replies"), query).await
	}

	/// Fetches a single post.
	pub async fn single(&self, id: &str, fields: Option<&FieldSet>) -> Result<Value> {
		let request = self
			.request(Method::GET, id)?
			.query("fields", fields_param(fields, POST_FIELDS));

		self.call(Operation::Single, request).await?.json()
	}

	/// Searches public posts by keyword.
	pub async fn search(
		&self,
		query: &str,
		search_type: SearchType,
		fields: Option<&FieldSet>,
	) -> Result<Value> {
		let request = self
			.request(Method::GET, "keyword_search")?
			.query("q", query)
			.query("search_type", search_type.as_str())
			.query("fields", fields_param(fields, POST_FIELDS));

		self.call(Operation::Search, request).await?.json()
	}

	/// Reads a container's processing status.
	pub async fn status(&self, id: &str, fields: Option<&FieldSet>) -> Result<Value> {
		let request = self
			.request(Method::GET, id)?
			.query("fields", fields_param(fields, STATUS_FIELDS));

		self.call(Operation::Status, request).await?.json()
	}

	/// Reads a user's publishing quota.
	pub async fn quota(&self, user: &str, fields: Option<&FieldSet>) -> Result<Value> {
		let request = self
			.request(Method::GET, &format!("{user}/threads_publishing_limit"))?
			.query("fields", fields_param(fields, QUOTA_FIELDS));

		self.call(Operation::Quota, request).await?.json()
	}

	async fn page(&self, operation: Operation, path: &str, query: &PageQuery) -> Result<Value> {
		let request = self
			.request(Method::GET, path)?
			.query("fields", fields_param(query.fields.as_ref(), POST_FIELDS))
			.query("limit", query.limit.to_string())
			.query_opt("before", query.before.as_deref())
			.query_opt("after", query.after.as_deref())
			.query_opt("since", query.since.as_deref())
			.query_opt("until", query.until.as_deref());

		self.call(operation, request).await?.json()
	}
}
