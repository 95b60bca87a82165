use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use super::SourceResolver;
use crate::utils::error::Error;

/// Opens pod specs from the local filesystem, relative paths resolved against
/// the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileResolver;

impl FileResolver {
    fn absolute(location: &str) -> Result<PathBuf, Error> {
        let cwd = std::env::current_dir().map_err(|source| Error::OpenError {
            path: PathBuf::from(location),
            source,
        })?;
        Ok(cwd.join(location))
    }
}

impl SourceResolver for FileResolver {
    fn open(&self, location: &str) -> Result<Box<dyn Read>, Error> {
        let path = Self::absolute(location)?;
        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(source) => Err(Error::OpenError { path, source }),
        }
    }
}
