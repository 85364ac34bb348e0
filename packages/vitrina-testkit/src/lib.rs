use std::sync::{
	Mutex,
	atomic::{AtomicUsize, Ordering},
};

use serde_json::{Value, json};

use vitrina_config::{Cms, Config, Contact, Content, Newsletter};
use vitrina_domain::{Author, Category};
use vitrina_service::{BoxFuture, CmsProvider, ContactMessage, OutboundProvider};

/// Canned provider outcome: a value, or one of the two failure families.
#[derive(Clone, Debug)]
pub enum Canned<T> {
	Value(T),
	ApiError,
	ConnectionError,
}

impl<T> Canned<T>
where
	T: Clone,
{
	fn produce(&self) -> vitrina_providers::Result<T> {
		match self {
			Self::Value(value) => Ok(value.clone()),
			Self::ApiError => Err(vitrina_providers::Error::Api {
				status: 500,
				message: "stub: internal server error".to_string(),
			}),
			Self::ConnectionError => Err(vitrina_providers::Error::Transport {
				message: "stub: connection refused".to_string(),
			}),
		}
	}
}

pub struct StubCms {
	posts: Canned<Vec<Value>>,
	authors: Canned<Vec<Author>>,
	categories: Canned<Vec<Category>>,
	pub post_calls: AtomicUsize,
	pub author_calls: AtomicUsize,
	pub category_calls: AtomicUsize,
}

impl StubCms {
	pub fn with_posts(records: Vec<Value>) -> Self {
		Self::new(Canned::Value(records))
	}

	/// Every post fetch fails at the transport level; reference tables stay
	/// empty but reachable.
	pub fn failing() -> Self {
		Self::new(Canned::ConnectionError)
	}

	/// Every post fetch fails with a non-2xx response.
	pub fn failing_with_status() -> Self {
		Self::new(Canned::ApiError)
	}

	fn new(posts: Canned<Vec<Value>>) -> Self {
		Self {
			posts,
			authors: Canned::Value(Vec::new()),
			categories: Canned::Value(Vec::new()),
			post_calls: AtomicUsize::new(0),
			author_calls: AtomicUsize::new(0),
			category_calls: AtomicUsize::new(0),
		}
	}

	pub fn with_authors(mut self, authors: Vec<Author>) -> Self {
		self.authors = Canned::Value(authors);

		self
	}

	pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
		self.categories = Canned::Value(categories);

		self
	}

	pub fn with_failing_references(mut self) -> Self {
		self.authors = Canned::ConnectionError;
		self.categories = Canned::ConnectionError;

		self
	}
}

// Counters increment inside the futures: a constructed-then-dropped fetch is
// not a fetch, and a warm cache drops them un-awaited.
impl CmsProvider for StubCms {
	fn fetch_post_records<'a>(
		&'a self,
		_cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Value>>> {
		Box::pin(async move {
			self.post_calls.fetch_add(1, Ordering::SeqCst);

			self.posts.produce()
		})
	}

	fn fetch_authors<'a>(
		&'a self,
		_cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Author>>> {
		Box::pin(async move {
			self.author_calls.fetch_add(1, Ordering::SeqCst);

			self.authors.produce()
		})
	}

	fn fetch_categories<'a>(
		&'a self,
		_cfg: &'a Cms,
	) -> BoxFuture<'a, vitrina_providers::Result<Vec<Category>>> {
		Box::pin(async move {
			self.category_calls.fetch_add(1, Ordering::SeqCst);

			self.categories.produce()
		})
	}
}

pub struct StubOutbound {
	succeed: bool,
	pub contact_calls: AtomicUsize,
	pub subscribed_emails: Mutex<Vec<String>>,
}

impl StubOutbound {
	pub fn ok() -> Self {
		Self::new(true)
	}

	pub fn failing() -> Self {
		Self::new(false)
	}

	fn new(succeed: bool) -> Self {
		Self {
			succeed,
			contact_calls: AtomicUsize::new(0),
			subscribed_emails: Mutex::new(Vec::new()),
		}
	}

	fn outcome(&self) -> vitrina_providers::Result<()> {
		if self.succeed {
			Ok(())
		} else {
			Err(vitrina_providers::Error::Api {
				status: 422,
				message: "stub: rejected".to_string(),
			})
		}
	}
}

impl OutboundProvider for StubOutbound {
	fn submit_contact<'a>(
		&'a self,
		_cfg: &'a Contact,
		_message: &'a ContactMessage,
	) -> BoxFuture<'a, vitrina_providers::Result<()>> {
		Box::pin(async move {
			self.contact_calls.fetch_add(1, Ordering::SeqCst);

			self.outcome()
		})
	}

	fn subscribe<'a>(
		&'a self,
		_cfg: &'a Newsletter,
		email: &'a str,
	) -> BoxFuture<'a, vitrina_providers::Result<()>> {
		Box::pin(async move {
			if self.succeed {
				self.subscribed_emails
					.lock()
					.unwrap_or_else(|err| err.into_inner())
					.push(email.to_string());
			}

			self.outcome()
		})
	}
}

pub fn test_config() -> Config {
	Config {
		cms: Cms { base_url: "https://cms.example.com".to_string(), timeout_ms: 1_000 },
		content: Content {
			default_locale: "en".to_string(),
			default_page_size: 10,
			reference_ttl_secs: None,
		},
		contact: Contact {
			endpoint: "https://forms.example.com/f".to_string(),
			form_id: "test-form".to_string(),
			timeout_ms: 1_000,
		},
		newsletter: Newsletter {
			api_base: "https://mail.example.com".to_string(),
			api_key: "test-key".to_string(),
			list_id: 2,
			source: Some("website".to_string()),
			timeout_ms: 1_000,
		},
	}
}

/// One valid flat record in the CMS's current shape.
pub fn post_record(id: i64, title: &str, slug: &str, locale: &str) -> Value {
	json!({
		"id": id,
		"title": title,
		"slug": slug,
		"excerpt": format!("{title} excerpt"),
		"content": format!("{title} body text."),
		"publishedAt": "2023-05-15T10:00:00Z",
		"coverImage": format!("{slug}.png"),
		"locale": locale,
	})
}

/// Five valid Spanish records, ids 1 through 5.
pub fn spanish_batch() -> Vec<Value> {
	(1..=5).map(|id| post_record(id, &format!("Entrada {id}"), &format!("entrada-{id}"), "es")).collect()
}

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}
