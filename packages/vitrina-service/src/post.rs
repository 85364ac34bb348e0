use vitrina_domain::{Post, fields};

use crate::ContentService;

impl ContentService {
	/// Single-post lookup by slug over the bulk fetch. A miss and a fetch
	/// failure both read as "not found"; the page layer renders that state.
	pub async fn post_by_slug(&self, slug: &str) -> Option<Post> {
		let records = match self.providers.cms.fetch_post_records(&self.cfg.cms).await {
			Ok(records) => records,
			Err(err) => {
				tracing::warn!(slug, error = %err, "Post lookup fetch failed.");

				return None;
			},
		};
		let record = records
			.iter()
			.find(|record| fields::str_field(record, "slug") == Some(slug))?
			.clone();

		self.normalize_batch(&[record]).await.pop()
	}
}
