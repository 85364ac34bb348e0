use std::fmt::{Display, Formatter};

use serde_json::Value;
use time::OffsetDateTime;

use vitrina_domain::{Author, Category, Post, fields, image};

/// Non-fatal irregularities absorbed while normalizing a record. Reported
/// alongside the Post so callers can log them without failing the batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NormalizationWarning {
	NullRecord,
	MissingField { field: &'static str },
	NoImageField,
	UnknownAuthor { id: i64 },
	UnknownCategory { id: i64 },
}

impl Display for NormalizationWarning {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::NullRecord => write!(f, "record was null or not an object"),
			Self::MissingField { field } => write!(f, "missing field {field}"),
			Self::NoImageField => write!(f, "no image-like field resolved"),
			Self::UnknownAuthor { id } => write!(f, "author {id} not in reference table"),
			Self::UnknownCategory { id } => write!(f, "category {id} not in reference table"),
		}
	}
}

pub struct NormalizeContext<'a> {
	pub cms_base: &'a str,
	pub authors: &'a [Author],
	pub categories: &'a [Category],
	pub now: OffsetDateTime,
}

/// Builds the stable view model from a raw record of whatever shape the CMS
/// produced. Never fails: malformed fields resolve to defaults, and a null
/// record yields the sentinel error post.
pub fn normalize(raw: &Value, ctx: &NormalizeContext<'_>) -> (Post, Vec<NormalizationWarning>) {
	if !raw.is_object() {
		return (error_post(ctx.now), vec![NormalizationWarning::NullRecord]);
	}

	let mut warnings = Vec::new();
	let id = fields::int_field(raw, "id").unwrap_or(0);
	let title = fields::text_field(raw, "title");
	let slug = fields::text_field(raw, "slug");
	let content = fields::text_field(raw, "content");

	for (field, value) in [("title", &title), ("slug", &slug)] {
		if value.is_empty() {
			warnings.push(NormalizationWarning::MissingField { field });
		}
	}

	if image::find_image(raw).is_none() {
		warnings.push(NormalizationWarning::NoImageField);
	}

	let cover_image = image::resolve_image(raw, ctx.cms_base, id);

	let author_ref = fields::reference_id(raw, "author");
	let author = match author_ref.and_then(|id| find_author(ctx.authors, id)) {
		Some(author) => Some(author),
		None => {
			if let Some(id) = author_ref {
				warnings.push(NormalizationWarning::UnknownAuthor { id });
			}

			// Always show someone: unmatched or missing authors fall back
			// to the first table entry.
			ctx.authors.first().cloned()
		},
	};

	let category = fields::reference_id(raw, "category").and_then(|id| {
		let found = ctx.categories.iter().find(|category| category.id == id).cloned();

		if found.is_none() {
			warnings.push(NormalizationWarning::UnknownCategory { id });
		}

		found
	});

	let post = Post {
		id,
		read_time: fields::resolve_read_time(raw, &content),
		published_at: fields::resolve_published_at(raw, ctx.now),
		featured: fields::resolve_featured(raw),
		locale: fields::resolve_locale(raw),
		excerpt: fields::text_field(raw, "excerpt"),
		title,
		slug,
		content,
		cover_image,
		author,
		category,
	};

	(post, warnings)
}

fn find_author(authors: &[Author], id: i64) -> Option<Author> {
	authors.iter().find(|author| author.id == id).cloned()
}

// Substituted for a record that is null or not an object at all.
fn error_post(now: OffsetDateTime) -> Post {
	Post {
		id: 0,
		title: "Error".to_string(),
		slug: "error".to_string(),
		excerpt: "The post could not be loaded.".to_string(),
		content: "The content could not be loaded.".to_string(),
		published_at: now,
		featured: false,
		read_time: 1,
		cover_image: image::PLACEHOLDER_IMAGE.to_string(),
		locale: "es".to_string(),
		author: None,
		category: None,
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;
	use time::macros::datetime;

	use super::*;

	const NOW: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

	fn ctx<'a>(authors: &'a [Author], categories: &'a [Category]) -> NormalizeContext<'a> {
		NormalizeContext { cms_base: "https://cms.example.com", authors, categories, now: NOW }
	}

	fn authors() -> Vec<Author> {
		vec![
			Author { id: 1, name: "Ana Costa".to_string(), role: None, avatar: None, bio: None },
			Author { id: 2, name: "Luis Mora".to_string(), role: None, avatar: None, bio: None },
		]
	}

	fn categories() -> Vec<Category> {
		vec![Category {
			id: 4,
			name: "Artificial Intelligence".to_string(),
			slug: "artificial-intelligence".to_string(),
			color: "#06b6d4".to_string(),
		}]
	}

	#[test]
	fn null_records_yield_the_sentinel_post() {
		let (post, warnings) = normalize(&Value::Null, &ctx(&[], &[]));

		assert_eq!(post.slug, "error");
		assert_eq!(post.locale, "es");
		assert!(post.cover_image.starts_with("https://"));
		assert_eq!(warnings, vec![NormalizationWarning::NullRecord]);
	}

	#[test]
	fn string_featured_coerces_to_bool() {
		let (post, _) = normalize(&json!({ "id": 1, "featured": "true" }), &ctx(&[], &[]));

		assert!(post.featured);
	}

	#[test]
	fn normalization_is_idempotent() {
		let authors = authors();
		let categories = categories();
		let ctx = ctx(&authors, &categories);
		let raw = json!({
			"id": 7,
			"title": "A title",
			"slug": "a-title",
			"content": "Some words here.",
			"author": 2,
			"category": 4,
		});

		let (first, _) = normalize(&raw, &ctx);
		let (second, _) = normalize(&raw, &ctx);

		assert_eq!(first, second);
	}

	#[test]
	fn unmatched_author_falls_back_to_first_entry() {
		let authors = authors();
		let (post, warnings) =
			normalize(&json!({ "id": 1, "author": 99 }), &ctx(&authors, &[]));

		assert_eq!(post.author.as_ref().map(|author| author.id), Some(1));
		assert!(warnings.contains(&NormalizationWarning::UnknownAuthor { id: 99 }));
	}

	#[test]
	fn missing_author_reference_still_gets_the_first_entry() {
		let authors = authors();
		let (post, warnings) = normalize(&json!({ "id": 1 }), &ctx(&authors, &[]));

		assert_eq!(post.author.as_ref().map(|author| author.id), Some(1));
		assert!(!warnings.iter().any(|w| matches!(w, NormalizationWarning::UnknownAuthor { .. })));
	}

	#[test]
	fn unmatched_category_stays_empty() {
		let categories = categories();
		let (post, warnings) =
			normalize(&json!({ "id": 1, "category": 9 }), &ctx(&[], &categories));

		assert_eq!(post.category, None);
		assert!(warnings.contains(&NormalizationWarning::UnknownCategory { id: 9 }));
	}

	#[test]
	fn embedded_category_object_resolves_by_id() {
		let categories = categories();
		let (post, _) = normalize(
			&json!({ "id": 1, "category": { "id": 4, "name": "ignored" } }),
			&ctx(&[], &categories),
		);

		assert_eq!(post.category.as_ref().map(|category| category.id), Some(4));
	}

	#[test]
	fn defaults_cover_every_invariant_field() {
		let (post, warnings) = normalize(&json!({}), &ctx(&[], &[]));

		assert_eq!(post.id, 0);
		assert_eq!(post.locale, "en");
		assert!(post.read_time >= 1);
		assert!(post.cover_image.starts_with("https://"));
		assert_eq!(post.published_at, NOW);
		assert!(warnings.contains(&NormalizationWarning::MissingField { field: "title" }));
		assert!(warnings.contains(&NormalizationWarning::NoImageField));
	}

	#[test]
	fn attributes_nested_records_normalize_like_flat_ones() {
		let raw = json!({
			"id": 3,
			"attributes": {
				"title": "Nested",
				"slug": "nested",
				"coverImage": "Logo_d5cc426ec7.png",
				"locale": "es",
			},
		});
		let (post, _) = normalize(&raw, &ctx(&[], &[]));

		assert_eq!(post.title, "Nested");
		assert_eq!(post.cover_image, "https://cms.example.com/uploads/Logo_d5cc426ec7.png");
		assert_eq!(post.locale, "es");
	}
}
