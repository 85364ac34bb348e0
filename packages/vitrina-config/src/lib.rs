mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Cms, Config, Contact, Content, Newsletter};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if !cfg.cms.base_url.starts_with("http") {
		return Err(Error::Validation {
			message: "cms.base_url must be an absolute http(s) URL.".to_string(),
		});
	}
	if cfg.cms.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "cms.timeout_ms must be greater than zero.".to_string(),
		});
	}

	let locale = cfg.content.default_locale.as_str();

	if locale.is_empty() || !locale.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-') {
		return Err(Error::Validation {
			message: "content.default_locale must be a lowercase language tag.".to_string(),
		});
	}
	if cfg.content.default_page_size == 0 {
		return Err(Error::Validation {
			message: "content.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.content.reference_ttl_secs == Some(0) {
		return Err(Error::Validation {
			message: "content.reference_ttl_secs must be greater than zero when set.".to_string(),
		});
	}

	if !cfg.contact.endpoint.starts_with("http") {
		return Err(Error::Validation {
			message: "contact.endpoint must be an absolute http(s) URL.".to_string(),
		});
	}
	if cfg.contact.form_id.trim().is_empty() {
		return Err(Error::Validation { message: "contact.form_id must be non-empty.".to_string() });
	}
	if cfg.contact.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "contact.timeout_ms must be greater than zero.".to_string(),
		});
	}

	if !cfg.newsletter.api_base.starts_with("http") {
		return Err(Error::Validation {
			message: "newsletter.api_base must be an absolute http(s) URL.".to_string(),
		});
	}
	if cfg.newsletter.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "newsletter.api_key must be non-empty.".to_string(),
		});
	}
	if cfg.newsletter.list_id == 0 {
		return Err(Error::Validation {
			message: "newsletter.list_id must be greater than zero.".to_string(),
		});
	}
	if cfg.newsletter.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "newsletter.timeout_ms must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	truncate_trailing_slash(&mut cfg.cms.base_url);
	truncate_trailing_slash(&mut cfg.contact.endpoint);
	truncate_trailing_slash(&mut cfg.newsletter.api_base);

	if cfg.newsletter.source.as_deref().map(|source| source.trim().is_empty()).unwrap_or(false) {
		cfg.newsletter.source = None;
	}
}

fn truncate_trailing_slash(url: &mut String) {
	while url.ends_with('/') {
		url.pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Config {
		toml::from_str(
			r#"
			[cms]
			base_url = "https://cms.example.com/"

			[content]

			[contact]
			endpoint = "https://forms.example.com/f"
			form_id = "xldjlqgv"

			[newsletter]
			api_base = "https://mail.example.com"
			api_key = "key"
			list_id = 2
			source = "  "
			"#,
		)
		.expect("sample config must parse")
	}

	#[test]
	fn normalize_trims_slashes_and_blank_source() {
		let mut cfg = sample();

		normalize(&mut cfg);

		assert_eq!(cfg.cms.base_url, "https://cms.example.com");
		assert_eq!(cfg.newsletter.source, None);
		assert!(validate(&cfg).is_ok());
	}

	#[test]
	fn defaults_apply() {
		let cfg = sample();

		assert_eq!(cfg.cms.timeout_ms, 10_000);
		assert_eq!(cfg.content.default_locale, "en");
		assert_eq!(cfg.content.default_page_size, 10);
		assert_eq!(cfg.content.reference_ttl_secs, None);
	}

	#[test]
	fn validation_rejects_relative_base_url() {
		let mut cfg = sample();

		cfg.cms.base_url = "cms.example.com".to_string();

		assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
	}

	#[test]
	fn validation_rejects_blank_api_key() {
		let mut cfg = sample();

		cfg.newsletter.api_key = " ".to_string();

		assert!(matches!(validate(&cfg), Err(Error::Validation { .. })));
	}
}
