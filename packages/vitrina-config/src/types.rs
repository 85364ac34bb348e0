use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub cms: Cms,
	pub content: Content,
	pub contact: Contact,
	pub newsletter: Newsletter,
}

#[derive(Debug, Deserialize)]
pub struct Cms {
	/// Root of the headless CMS, without a trailing slash.
	pub base_url: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Content {
	#[serde(default = "default_locale")]
	pub default_locale: String,
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	/// Seconds before the cached author/category tables may be refetched.
	/// Absent means the tables live for the whole process.
	pub reference_ttl_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct Contact {
	/// Form backend root, e.g. `https://formspree.io/f`.
	pub endpoint: String,
	pub form_id: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Newsletter {
	pub api_base: String,
	pub api_key: String,
	pub list_id: u64,
	/// Attribute stamped onto every subscription, e.g. `website`.
	pub source: Option<String>,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
	10_000
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_page_size() -> u32 {
	10
}
