use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::io::Read;
use std::time::Duration;

use super::SourceResolver;
use crate::utils::error::Error;

/// Fetches pod specs with a single bounded GET request.
///
/// The response is handed out as the reader; its connection goes back to the
/// pool, or is closed, when the reader is dropped.
#[derive(Clone)]
pub struct HttpResolver {
    client: Client,
}

impl HttpResolver {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| Error::HttpClientError { source })?;

        Ok(HttpResolver { client })
    }
}

impl SourceResolver for HttpResolver {
    fn open(&self, location: &str) -> Result<Box<dyn Read>, Error> {
        let response = self
            .client
            .get(location)
            .send()
            .map_err(|source| Error::FetchError {
                url: location.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatusError {
                url: location.to_string(),
                status: status.as_u16(),
                reason: status.to_string(),
            });
        }

        Ok(Box::new(response))
    }
}
