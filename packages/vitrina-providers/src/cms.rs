use serde_json::Value;

use vitrina_config::Cms;
use vitrina_domain::{Author, Category, category, fields};

use crate::{Error, Result};

/// Fetches every blog-post record, unfiltered. The CMS exposes server-side
/// filters, but its record shape has drifted across schema versions, so all
/// filtering happens client-side over the raw batch.
pub async fn fetch_post_records(cfg: &Cms) -> Result<Vec<Value>> {
	parse_collection(get_json(cfg, "/api/blog-posts").await?)
}

pub async fn fetch_authors(cfg: &Cms) -> Result<Vec<Author>> {
	let records = parse_collection(get_json(cfg, "/api/authors").await?)?;

	Ok(records.iter().filter_map(parse_author).collect())
}

pub async fn fetch_categories(cfg: &Cms) -> Result<Vec<Category>> {
	let records = parse_collection(get_json(cfg, "/api/categories").await?)?;

	Ok(records.iter().filter_map(parse_category).collect())
}

async fn get_json(cfg: &Cms, path: &str) -> Result<Value> {
	let client = crate::http_client(cfg.timeout_ms)?;
	let res = client.get(format!("{}{path}", cfg.base_url)).send().await?;
	let json = res.error_for_status()?.json::<Value>().await?;

	Ok(json)
}

/// Collection endpoints answer `{ "data": [...], "meta": {...} }`.
fn parse_collection(json: Value) -> Result<Vec<Value>> {
	match json.get("data") {
		Some(Value::Array(records)) => Ok(records.clone()),
		_ => Err(Error::Schema { message: "Response is missing the data array.".to_string() }),
	}
}

// Reference records missing an id or name are unusable for enrichment and
// are dropped from the table rather than failing the batch.
fn parse_author(record: &Value) -> Option<Author> {
	Some(Author {
		id: fields::int_field(record, "id")?,
		name: fields::str_field(record, "name")?.to_string(),
		role: fields::str_field(record, "role").map(str::to_string),
		avatar: fields::str_field(record, "avatar").map(str::to_string),
		bio: fields::str_field(record, "bio").map(str::to_string),
	})
}

fn parse_category(record: &Value) -> Option<Category> {
	let name = fields::str_field(record, "name")?.to_string();
	let color = category::category_color(&name).to_string();

	Some(Category {
		id: fields::int_field(record, "id")?,
		slug: fields::text_field(record, "slug"),
		name,
		color,
	})
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn collection_requires_a_data_array() {
		assert_eq!(parse_collection(json!({ "data": [{ "id": 1 }] })).unwrap().len(), 1);
		assert!(matches!(
			parse_collection(json!({ "data": "nope" })),
			Err(Error::Schema { .. }),
		));
		assert!(matches!(parse_collection(json!({})), Err(Error::Schema { .. })));
	}

	#[test]
	fn parses_flat_author_records() {
		let author = parse_author(&json!({
			"id": 1,
			"name": "Ana Costa",
			"role": "Consultant",
			"bio": "Bio.",
		}))
		.unwrap();

		assert_eq!(author.id, 1);
		assert_eq!(author.role.as_deref(), Some("Consultant"));
		assert_eq!(author.avatar, None);
	}

	#[test]
	fn parses_attributes_nested_author_records() {
		let author =
			parse_author(&json!({ "id": 4, "attributes": { "name": "Luis Mora" } })).unwrap();

		assert_eq!(author.name, "Luis Mora");
	}

	#[test]
	fn drops_reference_records_without_id_or_name() {
		assert!(parse_author(&json!({ "name": "No Id" })).is_none());
		assert!(parse_category(&json!({ "id": 2 })).is_none());
	}

	#[test]
	fn categories_carry_their_derived_color() {
		let cat = parse_category(&json!({
			"id": 3,
			"name": "Case Studies",
			"slug": "case-studies",
		}))
		.unwrap();

		assert_eq!(cat.color, "#f59e0b");
	}
}
