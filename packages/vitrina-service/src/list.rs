use vitrina_domain::Post;

use crate::{ContentService, Error, Result, fallback, query};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ListPostsRequest {
	/// Defaults to the configured locale.
	pub locale: Option<String>,
	/// 1-based; defaults to 1.
	pub page: Option<u32>,
	/// Defaults to the configured page size.
	pub page_size: Option<u32>,
	pub featured: Option<bool>,
	pub category_id: Option<i64>,
	pub search: Option<String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
	pub posts: Vec<Post>,
	pub pagination: Pagination,
	/// Present when the live fetch failed and the built-in set was served.
	/// Degraded, not fatal.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<FetchError>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	pub page: u32,
	pub page_size: u32,
	pub page_count: u32,
	pub total: u32,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FetchError {
	pub message: String,
	#[serde(rename = "type")]
	pub kind: FetchErrorKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FetchErrorKind {
	ApiError,
	ConnectionError,
}

impl FetchError {
	fn from_provider(err: &vitrina_providers::Error) -> Self {
		let kind = match err {
			vitrina_providers::Error::Api { .. } | vitrina_providers::Error::Schema { .. } =>
				FetchErrorKind::ApiError,
			_ => FetchErrorKind::ConnectionError,
		};

		Self { message: format!("Could not load posts from the CMS: {err}"), kind }
	}
}

impl ContentService {
	/// One bulk fetch, then featured, category, search, locale and
	/// pagination stages, all client-side. A fetch failure substitutes the
	/// built-in post set, filtered identically, with an error descriptor
	/// attached.
	pub async fn list_posts(&self, req: ListPostsRequest) -> Result<PostsPage> {
		let page = req.page.unwrap_or(1);
		let page_size = req.page_size.unwrap_or(self.cfg.content.default_page_size);

		if page == 0 || page_size == 0 {
			return Err(Error::InvalidRequest {
				message: "page and page_size must be at least 1.".to_string(),
			});
		}

		let locale =
			req.locale.clone().unwrap_or_else(|| self.cfg.content.default_locale.clone());
		let filters = query::PostFilters {
			featured: req.featured,
			category_id: req.category_id,
			search: req.search.as_deref(),
		};

		let (posts, error) = match self.fetch_normalized().await {
			Ok(posts) => (posts, None),
			Err(err) => {
				tracing::warn!(error = %err, "Post fetch failed; serving the built-in set.");

				(fallback::fallback_posts(&locale), Some(FetchError::from_provider(&err)))
			},
		};
		let posts = query::apply_filters(posts, &filters);
		let posts = query::apply_locale(posts, &locale);
		let (posts, pagination) = query::paginate(posts, page, page_size);

		Ok(PostsPage { posts, pagination, error })
	}
}
