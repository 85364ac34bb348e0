pub mod cms;
pub mod contact;
pub mod newsletter;

mod error;

pub use error::{Error, Result};

use std::time::Duration;

use reqwest::Client;

fn http_client(timeout_ms: u64) -> Result<Client> {
	Client::builder().timeout(Duration::from_millis(timeout_ms)).build().map_err(Error::Client)
}
