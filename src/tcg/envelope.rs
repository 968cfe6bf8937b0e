//! Decoding of list responses.
//!
//! Providers answer either with `{"data": [...]}` or with a bare array. Each
//! known shape is tried in order and the first success wins.

use crate::error::{CatalogError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: Vec<T>,
}

type DecodeAttempt<T> = fn(&[u8]) -> serde_json::Result<Vec<T>>;

fn decode_wrapped<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<Vec<T>> {
    serde_json::from_slice::<DataEnvelope<T>>(body).map(|envelope| envelope.data)
}

fn decode_bare<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<Vec<T>> {
    serde_json::from_slice(body)
}

/// Decode a list body, wrapped shape first, then bare array
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    let attempts: [(&str, DecodeAttempt<T>); 2] = [
        ("data envelope", decode_wrapped::<T>),
        ("bare array", decode_bare::<T>),
    ];

    let mut failures = Vec::with_capacity(attempts.len());
    for (shape, attempt) in attempts {
        match attempt(body) {
            Ok(items) => {
                log::debug!("Decoded {} items as {}", items.len(), shape);
                return Ok(items);
            }
            Err(e) => {
                log::debug!("Body is not a {}: {}", shape, e);
                failures.push(format!("{}: {}", shape, e));
            }
        }
    }

    Err(CatalogError::decode(failures.join("; "), body))
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
