//! Networking Core - error taxonomy shared by every networking crate

pub mod error;

pub use error::{BoxError, Error, Result, ServerErrorPayload};
