use vitrina_domain::{Post, fields};

use crate::list::Pagination;

pub(crate) struct PostFilters<'a> {
	pub(crate) featured: Option<bool>,
	pub(crate) category_id: Option<i64>,
	pub(crate) search: Option<&'a str>,
}

/// Featured, category, then free-text search, in that order, each over the
/// survivors of the previous stage.
pub(crate) fn apply_filters(mut posts: Vec<Post>, filters: &PostFilters<'_>) -> Vec<Post> {
	if let Some(featured) = filters.featured {
		posts.retain(|post| post.featured == featured);
	}
	if let Some(category_id) = filters.category_id {
		posts.retain(|post| {
			post.category.as_ref().map(|category| category.id == category_id).unwrap_or(false)
		});
	}
	if let Some(query) = filters.search.map(str::trim).filter(|query| !query.is_empty()) {
		let query = query.to_lowercase();

		posts.retain(|post| matches_query(post, &query));
	}

	posts
}

fn matches_query(post: &Post, lowercase_query: &str) -> bool {
	[&post.title, &post.excerpt, &post.content]
		.into_iter()
		.any(|text| text.to_lowercase().contains(lowercase_query))
}

/// Keeps the locale-matching subset when it is non-empty; otherwise keeps
/// everything, since wrong-locale content beats an empty page.
pub(crate) fn apply_locale(posts: Vec<Post>, locale: &str) -> Vec<Post> {
	let matching = posts
		.iter()
		.filter(|post| fields::locale_matches(&post.locale, locale))
		.cloned()
		.collect::<Vec<_>>();

	if matching.is_empty() {
		tracing::warn!(locale, total = posts.len(), "No posts match the locale; keeping all.");

		posts
	} else {
		matching
	}
}

pub(crate) fn paginate(posts: Vec<Post>, page: u32, page_size: u32) -> (Vec<Post>, Pagination) {
	let total = posts.len();
	let start = (page as usize - 1) * page_size as usize;
	let slice = posts.into_iter().skip(start).take(page_size as usize).collect();
	let pagination = Pagination {
		page,
		page_size,
		page_count: total.div_ceil(page_size as usize) as u32,
		total: total as u32,
	};

	(slice, pagination)
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;

	use super::*;

	fn post(id: i64, locale: &str) -> Post {
		Post {
			id,
			title: format!("Post {id}"),
			slug: format!("post-{id}"),
			excerpt: String::new(),
			content: String::new(),
			published_at: datetime!(2023-01-01 00:00 UTC),
			featured: false,
			read_time: 1,
			cover_image: "https://pictures.example.com/a.png".to_string(),
			locale: locale.to_string(),
			author: None,
			category: None,
		}
	}

	#[test]
	fn slice_length_follows_the_pagination_law() {
		for (total, page, page_size) in
			[(5usize, 1u32, 2u32), (5, 3, 2), (5, 4, 2), (0, 1, 10), (10, 1, 10), (7, 2, 3)]
		{
			let posts = (0..total as i64).map(|id| post(id, "en")).collect();
			let (slice, pagination) = paginate(posts, page, page_size);
			let expected =
				(page_size as usize).min(total.saturating_sub((page as usize - 1) * page_size as usize));

			assert_eq!(slice.len(), expected, "total={total} page={page} size={page_size}");
			assert_eq!(
				pagination.page_count,
				total.div_ceil(page_size as usize) as u32,
			);
			assert_eq!(pagination.total, total as u32);
		}
	}

	#[test]
	fn locale_mismatch_keeps_the_full_set() {
		let posts = vec![post(1, "en"), post(2, "en")];
		let kept = apply_locale(posts.clone(), "es");

		assert_eq!(kept, posts);
	}

	#[test]
	fn locale_subset_replaces_the_set_when_non_empty() {
		let posts = vec![post(1, "en"), post(2, "es-MX"), post(3, "es")];
		let kept = apply_locale(posts, "es");

		assert_eq!(kept.iter().map(|post| post.id).collect::<Vec<_>>(), vec![2, 3]);
	}

	#[test]
	fn search_matches_case_insensitively_across_text_fields() {
		let mut in_title = post(1, "en");
		let mut in_content = post(2, "en");
		let mut miss = post(3, "en");

		in_title.title = "Optimizing with AI".to_string();
		in_content.content = "all about artificial intelligence and ai".to_string();
		miss.title = "Nothing relevant".to_string();
		miss.content = "ordinary words only".to_string();

		let filters =
			PostFilters { featured: None, category_id: None, search: Some("AI") };
		let kept = apply_filters(vec![in_title, in_content, miss], &filters);

		assert_eq!(kept.iter().map(|post| post.id).collect::<Vec<_>>(), vec![1, 2]);
	}

	#[test]
	fn blank_search_is_ignored() {
		let filters = PostFilters { featured: None, category_id: None, search: Some("   ") };
		let kept = apply_filters(vec![post(1, "en")], &filters);

		assert_eq!(kept.len(), 1);
	}

	#[test]
	fn featured_filter_keeps_both_polarities() {
		let mut featured = post(1, "en");

		featured.featured = true;

		let plain = post(2, "en");
		let all = vec![featured, plain];

		let only_featured = apply_filters(
			all.clone(),
			&PostFilters { featured: Some(true), category_id: None, search: None },
		);
		let only_plain = apply_filters(
			all,
			&PostFilters { featured: Some(false), category_id: None, search: None },
		);

		assert_eq!(only_featured.iter().map(|post| post.id).collect::<Vec<_>>(), vec![1]);
		assert_eq!(only_plain.iter().map(|post| post.id).collect::<Vec<_>>(), vec![2]);
	}
}
