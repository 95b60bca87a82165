//! Turning a user supplied pod spec location into a readable stream.

use log::debug;
use std::io::Read;
use std::time::Duration;

use crate::utils::error::Error;

pub mod file;
pub mod http;

pub use self::file::FileResolver;
pub use self::http::HttpResolver;

/// Opens a pod spec location. Implementations make exactly one attempt.
pub trait SourceResolver {
    fn open(&self, location: &str) -> Result<Box<dyn Read>, Error>;
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Fetches `http://` and `https://` locations, reads everything else from disk.
pub struct DefaultResolver {
    http: HttpResolver,
    file: FileResolver,
}

impl DefaultResolver {
    pub fn new(fetch_timeout: Duration) -> Result<Self, Error> {
        Ok(DefaultResolver {
            http: HttpResolver::new(fetch_timeout)?,
            file: FileResolver,
        })
    }
}

impl SourceResolver for DefaultResolver {
    fn open(&self, location: &str) -> Result<Box<dyn Read>, Error> {
        if is_url(location) {
            debug!("fetching pod spec from {}", location);
            self.http.open(location)
        } else {
            debug!("reading pod spec from {}", location);
            self.file.open(location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::is_url;

    #[test]
    fn can_tell_urls_from_paths() {
        assert!(is_url("http://example.com/pod.yaml"));
        assert!(is_url("https://example.com/pod.yaml"));
        assert!(!is_url("ftp://example.com/pod.yaml"));
        assert!(!is_url("./http/pod.yaml"));
        assert!(!is_url("/tmp/pod.json"));
    }
}
