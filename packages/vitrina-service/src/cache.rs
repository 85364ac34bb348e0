use time::{Duration, OffsetDateTime};
use tokio::sync::Mutex;

use vitrina_domain::{Author, Category};

/// Process-lifetime author and category tables.
///
/// Each table is fetched at most once (per TTL window, when one is set) and
/// memoized, including a failed fetch, which memoizes the empty table; a
/// transient failure starves enrichment until `invalidate` or TTL expiry.
/// The slot mutex is held across the fetch, so concurrent first uses wait
/// for one request instead of issuing duplicates.
pub struct ReferenceCache {
	authors: Mutex<Option<Cached<Author>>>,
	categories: Mutex<Option<Cached<Category>>>,
	ttl: Option<Duration>,
}

struct Cached<T> {
	value: Vec<T>,
	fetched_at: OffsetDateTime,
}

impl ReferenceCache {
	pub fn new(ttl_secs: Option<u64>) -> Self {
		Self {
			authors: Mutex::new(None),
			categories: Mutex::new(None),
			ttl: ttl_secs.map(|secs| Duration::seconds(secs as i64)),
		}
	}

	pub async fn authors<F>(&self, now: OffsetDateTime, fetch: F) -> Vec<Author>
	where
		F: Future<Output = vitrina_providers::Result<Vec<Author>>>,
	{
		Self::get(&self.authors, self.ttl, now, fetch, "authors").await
	}

	pub async fn categories<F>(&self, now: OffsetDateTime, fetch: F) -> Vec<Category>
	where
		F: Future<Output = vitrina_providers::Result<Vec<Category>>>,
	{
		Self::get(&self.categories, self.ttl, now, fetch, "categories").await
	}

	/// Drops both tables; the next use refetches.
	pub async fn invalidate(&self) {
		*self.authors.lock().await = None;
		*self.categories.lock().await = None;
	}

	async fn get<T, F>(
		slot: &Mutex<Option<Cached<T>>>,
		ttl: Option<Duration>,
		now: OffsetDateTime,
		fetch: F,
		table: &str,
	) -> Vec<T>
	where
		T: Clone,
		F: Future<Output = vitrina_providers::Result<Vec<T>>>,
	{
		let mut guard = slot.lock().await;

		if let Some(cached) = guard.as_ref()
			&& !ttl.map(|ttl| now - cached.fetched_at >= ttl).unwrap_or(false)
		{
			return cached.value.clone();
		}

		let value = match fetch.await {
			Ok(value) => value,
			Err(err) => {
				tracing::warn!(table, error = %err, "Reference fetch failed; memoizing empty table.");

				Vec::new()
			},
		};

		*guard = Some(Cached { value: value.clone(), fetched_at: now });

		value
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use time::macros::datetime;

	use super::*;

	fn author(id: i64) -> Author {
		Author { id, name: format!("author-{id}"), role: None, avatar: None, bio: None }
	}

	#[tokio::test]
	async fn fetches_once_and_memoizes() {
		let cache = ReferenceCache::new(None);
		let calls = AtomicUsize::new(0);
		let now = datetime!(2024-01-01 00:00 UTC);

		for _ in 0..3 {
			let got = cache
				.authors(now, async {
					calls.fetch_add(1, Ordering::SeqCst);

					Ok(vec![author(1)])
				})
				.await;

			assert_eq!(got.len(), 1);
		}

		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn failures_memoize_the_empty_table() {
		let cache = ReferenceCache::new(None);
		let calls = AtomicUsize::new(0);
		let now = datetime!(2024-01-01 00:00 UTC);

		for _ in 0..2 {
			let got = cache
				.authors(now, async {
					calls.fetch_add(1, Ordering::SeqCst);

					Err(vitrina_providers::Error::Transport {
						message: "connection refused".to_string(),
					})
				})
				.await;

			assert!(got.is_empty());
		}

		// No retry-on-empty: the failed fetch is memoized too.
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn invalidate_forces_a_refetch() {
		let cache = ReferenceCache::new(None);
		let calls = AtomicUsize::new(0);
		let now = datetime!(2024-01-01 00:00 UTC);
		let fetch = || async {
			calls.fetch_add(1, Ordering::SeqCst);

			Ok(vec![author(1)])
		};

		cache.authors(now, fetch()).await;
		cache.invalidate().await;
		cache.authors(now, fetch()).await;

		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[tokio::test]
	async fn ttl_expiry_refetches() {
		let cache = ReferenceCache::new(Some(60));
		let calls = AtomicUsize::new(0);
		let fetch = || async {
			calls.fetch_add(1, Ordering::SeqCst);

			Ok(vec![author(1)])
		};

		cache.authors(datetime!(2024-01-01 00:00 UTC), fetch()).await;
		cache.authors(datetime!(2024-01-01 00:00:30 UTC), fetch()).await;
		cache.authors(datetime!(2024-01-01 00:01:30 UTC), fetch()).await;

		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}
}
