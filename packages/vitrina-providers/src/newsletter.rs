use serde_json::Value;

use vitrina_config::Newsletter;

use crate::{Error, Result};

/// Creates a contact on the mailing list. An already-subscribed address is a
/// success from the caller's point of view, not an error.
pub async fn subscribe(cfg: &Newsletter, email: &str) -> Result<()> {
	let client = crate::http_client(cfg.timeout_ms)?;
	let mut body = serde_json::json!({
		"email": email,
		"listIds": [cfg.list_id],
		"updateEnabled": false,
	});

	if let Some(source) = cfg.source.as_deref() {
		body["attributes"] = serde_json::json!({ "SOURCE": source });
	}

	let res = client
		.post(format!("{}/v3/contacts", cfg.api_base))
		.header("api-key", &cfg.api_key)
		.json(&body)
		.send()
		.await?;

	if res.status().is_success() {
		return Ok(());
	}

	let status = res.status().as_u16();
	let detail: Value = res.json().await.unwrap_or(Value::Null);

	subscription_outcome(status, &detail)
}

fn subscription_outcome(status: u16, detail: &Value) -> Result<()> {
	if detail.get("code").and_then(Value::as_str) == Some("duplicate_parameter") {
		return Ok(());
	}

	Err(Error::Api {
		status,
		message: detail
			.get("message")
			.and_then(Value::as_str)
			.unwrap_or("Subscription rejected.")
			.to_string(),
	})
}
