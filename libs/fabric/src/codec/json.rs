use serde::{Deserialize, Serialize};

use crate::codec::Codec;

/// JSON codec backed by `serde_json`
///
/// Wire field names follow the target type's serde naming; snake_case wire
/// fields map straight onto Rust fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    type Error = serde_json::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        serde_json::to_vec(value)
    }

    fn decode<T: for<'de> Deserialize<'de>>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_json::from_slice(bytes)
    }
}
