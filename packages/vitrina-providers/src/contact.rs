use vitrina_config::Contact;

use crate::Result;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ContactMessage {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub phone: String,
	pub requirements: String,
}

/// Posts the message form-encoded to the form backend. The backend only
/// reports success or failure; there is no structured error detail to keep.
pub async fn submit(cfg: &Contact, message: &ContactMessage) -> Result<()> {
	let client = crate::http_client(cfg.timeout_ms)?;
	let form = [
		("firstName", message.first_name.as_str()),
		("lastName", message.last_name.as_str()),
		("email", message.email.as_str()),
		("phone", message.phone.as_str()),
		("requirements", message.requirements.as_str()),
	];

	client
		.post(format!("{}/{}", cfg.endpoint, cfg.form_id))
		.form(&form)
		.send()
		.await?
		.error_for_status()?;

	Ok(())
}
