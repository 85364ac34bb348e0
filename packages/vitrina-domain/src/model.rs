use time::OffsetDateTime;

/// Stable, UI-facing shape produced by normalization, decoupled from the CMS
/// schema variant that supplied the raw record.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub slug: String,
	pub excerpt: String,
	pub content: String,
	#[serde(with = "time::serde::rfc3339")]
	pub published_at: OffsetDateTime,
	pub featured: bool,
	pub read_time: u32,
	pub cover_image: String,
	pub locale: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub author: Option<Author>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<Category>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Author {
	pub id: i64,
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub role: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Category {
	pub id: i64,
	pub name: String,
	pub slug: String,
	pub color: String,
}
