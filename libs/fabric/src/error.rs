pub use networking_core::error::{BoxError, Error, Result, ServerErrorPayload};
