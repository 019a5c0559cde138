use serde::{Deserialize, Serialize};

pub mod json;

pub use self::json::JsonCodec;

/// Codec trait for serializing request bodies and deserializing responses
pub trait Codec: Send + Sync {
    /// Diagnostic produced when bytes do not match the target schema
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encode a value into bytes
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;

    /// Decode bytes into a value
    fn decode<T: for<'de> Deserialize<'de>>(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}
