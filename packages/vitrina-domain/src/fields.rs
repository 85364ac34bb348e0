use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Words per minute used when a record carries no usable `readTime`.
const READING_RATE_WPM: usize = 200;

type FieldExtractor = for<'a> fn(&'a Value, &str) -> Option<&'a Value>;

/// Known record encodings, tried in priority order. The CMS has shipped both
/// flat records and records with everything nested under `attributes`.
const FIELD_EXTRACTORS: &[FieldExtractor] = &[flat_field, attributes_field];

fn flat_field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
	record.get(key)
}

fn attributes_field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
	record.get("attributes")?.get(key)
}

/// Locates `key` in whichever schema variant the record uses. First
/// extractor producing a non-null value wins.
pub fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
	FIELD_EXTRACTORS
		.iter()
		.find_map(|extract| extract(record, key).filter(|value| !value.is_null()))
}

pub fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
	field(record, key).and_then(Value::as_str).filter(|value| !value.is_empty())
}

/// String value with an empty-string default for absent or non-string fields.
pub fn text_field(record: &Value, key: &str) -> String {
	str_field(record, key).unwrap_or_default().to_string()
}

pub fn int_field(record: &Value, key: &str) -> Option<i64> {
	field(record, key).and_then(Value::as_i64)
}

/// Record locale, tolerating the misspelled `localee` key some records carry.
pub fn resolve_locale(record: &Value) -> String {
	str_field(record, "locale").or_else(|| str_field(record, "localee")).unwrap_or("en").to_string()
}

/// Exact match or prefix match, so `es` accepts `es-MX`.
pub fn locale_matches(post_locale: &str, requested: &str) -> bool {
	post_locale == requested || post_locale.starts_with(requested)
}

/// `true` and `"true"` are featured; anything else, including null, is not.
pub fn resolve_featured(record: &Value) -> bool {
	match field(record, "featured") {
		Some(Value::Bool(flag)) => *flag,
		Some(Value::String(text)) => text == "true",
		_ => false,
	}
}

/// Reading time in minutes: the record's own positive `readTime` when
/// present, otherwise estimated from the content's word count.
pub fn resolve_read_time(record: &Value, content: &str) -> u32 {
	int_field(record, "readTime")
		.filter(|minutes| *minutes > 0)
		.map(|minutes| minutes as u32)
		.unwrap_or_else(|| estimate_read_time(content))
}

pub fn estimate_read_time(content: &str) -> u32 {
	let words = content.split_whitespace().count();

	(words.div_ceil(READING_RATE_WPM) as u32).max(1)
}

/// Publication timestamp from `publishedAt` or the legacy `dateAt`, falling
/// back to `now` when neither parses.
pub fn resolve_published_at(record: &Value, now: OffsetDateTime) -> OffsetDateTime {
	str_field(record, "publishedAt")
		.or_else(|| str_field(record, "dateAt"))
		.and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok())
		.unwrap_or(now)
}

/// Id of a related entity carried either as a raw id or an embedded object.
pub fn reference_id(record: &Value, key: &str) -> Option<i64> {
	match field(record, key)? {
		Value::Number(id) => id.as_i64(),
		Value::Object(embedded) => embedded.get("id").and_then(Value::as_i64),
		_ => None,
	}
}
