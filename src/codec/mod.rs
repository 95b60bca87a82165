//! Decoding pod documents written either as JSON or as YAML.
//!
//! The format is never declared by the caller: the leading bytes of the
//! document decide. Only the first document of a stream is decoded.

use k8s_openapi::api::core::v1 as versioned;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;

use crate::models::quantity::Quantity;
use crate::utils::error::Error;

/// Number of leading bytes inspected before picking a format.
pub const LOOKAHEAD: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// JSON when the first non-whitespace byte of the lookahead window opens an
    /// object, YAML otherwise.
    pub fn detect(document: &[u8]) -> Format {
        let window = &document[..document.len().min(LOOKAHEAD)];
        match window.iter().copied().find(|byte| !byte.is_ascii_whitespace()) {
            Some(b'{') => Format::Json,
            _ => Format::Yaml,
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, document: &[u8]) -> Result<T, Error> {
        match self {
            Format::Json => {
                let mut stream = serde_json::Deserializer::from_slice(document).into_iter::<T>();
                match stream.next() {
                    Some(result) => result.map_err(|err| Error::DecodeError(err.to_string())),
                    None => Err(Error::DecodeError("EOF".to_owned())),
                }
            }
            Format::Yaml => match serde_yaml::Deserializer::from_slice(document).next() {
                Some(first) => T::deserialize(first).map_err(|err| Error::DecodeError(err.to_string())),
                None => Err(Error::DecodeError("EOF".to_owned())),
            },
        }
    }
}

/// Drains a source into memory. The whole document is decoded at once.
pub fn read_document<R: Read>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut document = Vec::with_capacity(LOOKAHEAD);
    reader.read_to_end(&mut document)?;
    Ok(document)
}

pub fn decode<T: DeserializeOwned>(document: &[u8]) -> Result<T, Error> {
    if document.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::DecodeError("EOF".to_owned()));
    }

    let format = Format::detect(document);
    debug!("decoding {} byte document as {:?}", document.len(), format);
    format.decode(document)
}

/// Rejects resource quantities that do not parse, so that a malformed amount
/// fails the document before any pod is defaulted or validated.
pub fn check_quantities(pods: &[versioned::Pod]) -> Result<(), Error> {
    let resource_lists = pods
        .iter()
        .filter_map(|pod| pod.spec.as_ref())
        .flat_map(|spec| spec.containers.iter().chain(spec.init_containers.iter().flatten()))
        .filter_map(|container| container.resources.as_ref())
        .flat_map(|resources| resources.limits.iter().chain(resources.requests.iter()));

    for list in resource_lists {
        for quantity in list.values() {
            Quantity::parse(&quantity.0).map_err(|err| Error::DecodeError(err.to_string()))?;
        }
    }
    Ok(())
}
