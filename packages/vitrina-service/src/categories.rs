use vitrina_domain::Category;

use crate::ContentService;

impl ContentService {
	/// Cached category table, each entry carrying its derived color. Empty
	/// when the one reference fetch failed.
	pub async fn list_categories(&self) -> Vec<Category> {
		let now = (self.clock)();

		self.refs.categories(now, self.providers.cms.fetch_categories(&self.cfg.cms)).await
	}
}
