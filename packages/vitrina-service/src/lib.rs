pub mod cache;
pub mod categories;
pub mod fallback;
pub mod list;
pub mod normalize;
pub mod outbound;
pub mod post;

mod query;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;
use time::OffsetDateTime;

pub use cache::ReferenceCache;
pub use list::{FetchError, FetchErrorKind, ListPostsRequest, Pagination, PostsPage};
pub use normalize::{NormalizationWarning, NormalizeContext, normalize};
use vitrina_config::{Cms, Config, Contact, Newsletter};
use vitrina_domain::{Author, Category, Post};
use vitrina_providers::{cms, contact, newsletter};
pub use vitrina_providers::contact::ContactMessage;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
}

/// Seam over the CMS so tests can drive the service with canned records.
pub trait CmsProvider
where
	Self: Send + Sync,
{
	fn fetch_post_records<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Value>>>;

	fn fetch_authors<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Author>>>;

	fn fetch_categories<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Category>>>;
}

/// Seam over the third-party form and mailing-list backends.
pub trait OutboundProvider
where
	Self: Send + Sync,
{
	fn submit_contact<'a>(
		&'a self,
		cfg: &'a Contact,
		message: &'a ContactMessage,
	) -> BoxFuture<'a, vitrina_providers::Result<()>>;

	fn subscribe<'a>(
		&'a self,
		cfg: &'a Newsletter,
		email: &'a str,
	) -> BoxFuture<'a, vitrina_providers::Result<()>>;
}

#[derive(Clone)]
pub struct Providers {
	pub cms: Arc<dyn CmsProvider>,
	pub outbound: Arc<dyn OutboundProvider>,
}

pub struct ContentService {
	pub cfg: Config,
	pub providers: Providers,
	refs: ReferenceCache,
	clock: fn() -> OffsetDateTime,
}

struct DefaultProviders;

impl CmsProvider for DefaultProviders {
	fn fetch_post_records<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Value>>> {
		Box::pin(cms::fetch_post_records(cfg))
	}

	fn fetch_authors<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Author>>> {
		Box::pin(cms::fetch_authors(cfg))
	}

	fn fetch_categories<'a>(
		&'a self,
		cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Category>>> {
		Box::pin(cms::fetch_categories(cfg))
	}
}

impl OutboundProvider for DefaultProviders {
	fn submit_contact<'a>(
		&'a self,
		cfg: &'a Contact,
		message: &'a ContactMessage,
	) -> BoxFuture<'a, vitrina_providers::Result<()>> {
		Box::pin(contact::submit(cfg, message))
	}

	fn subscribe<'a>(
		&'a self,
		cfg: &'a Newsletter,
		email: &'a str,
	) -> BoxFuture<'a, vitrina_providers::Result<()>> {
		Box::pin(newsletter::subscribe(cfg, email))
	}
}

impl Providers {
	pub fn new(cms: Arc<dyn CmsProvider>, outbound: Arc<dyn OutboundProvider>) -> Self {
		Self { cms, outbound }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { cms: provider.clone(), outbound: provider }
	}
}

impl ContentService {
	pub fn new(cfg: Config) -> Self {
		Self::with_providers(cfg, Providers::default())
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		let refs = ReferenceCache::new(cfg.content.reference_ttl_secs);

		Self { cfg, providers, refs, clock: OffsetDateTime::now_utc }
	}

	/// Replaces the wall clock, pinning timestamp defaults and cache ages.
	pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
		self.clock = clock;

		self
	}

	pub fn reference_cache(&self) -> &ReferenceCache {
		&self.refs
	}

	/// Fetches the full CMS batch and normalizes every record, enriching
	/// from the cached author/category tables.
	pub(crate) async fn fetch_normalized(&self) -> vitrina_providers::Result<Vec<Post>> {
		let records = self.providers.cms.fetch_post_records(&self.cfg.cms).await?;

		Ok(self.normalize_batch(&records).await)
	}

	pub(crate) async fn normalize_batch(&self, records: &[Value]) -> Vec<Post> {
		let now = (self.clock)();
		let authors =
			self.refs.authors(now, self.providers.cms.fetch_authors(&self.cfg.cms)).await;
		let categories =
			self.refs.categories(now, self.providers.cms.fetch_categories(&self.cfg.cms)).await;
		let ctx = NormalizeContext {
			cms_base: &self.cfg.cms.base_url,
			authors: &authors,
			categories: &categories,
			now,
		};

		records
			.iter()
			.map(|raw| {
				let (post, warnings) = normalize(raw, &ctx);

				for warning in &warnings {
					tracing::warn!(post_id = post.id, %warning, "Normalized around a bad field.");
				}

				post
			})
			.collect()
	}
}
