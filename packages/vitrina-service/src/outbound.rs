use crate::{ContactMessage, ContentService};

// Both submissions surface as a bare success flag; the page layer only ever
// shows a generic retry message, so the structured error is logged here and
// flattened.
impl ContentService {
	pub async fn submit_contact(&self, message: &ContactMessage) -> bool {
		match self.providers.outbound.submit_contact(&self.cfg.contact, message).await {
			Ok(()) => true,
			Err(err) => {
				tracing::warn!(error = %err, "Contact form submission failed.");

				false
			},
		}
	}

	pub async fn subscribe_newsletter(&self, email: &str) -> bool {
		match self.providers.outbound.subscribe(&self.cfg.newsletter, email).await {
			Ok(()) => true,
			Err(err) => {
				tracing::warn!(error = %err, "Newsletter subscription failed.");

				false
			},
		}
	}
}
