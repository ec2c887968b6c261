//! All data types for the rankbase library.

pub mod error;
pub mod record;
pub mod scope;
pub mod signal;

pub use error::{RankError, RankResult};
pub use record::{EntityRecord, EntityRecordBuilder, FieldNode, FieldValue};
pub use scope::Scope;
pub use signal::{Dimension, Signals};

/// Opaque entity identifier, unique within a record set.
pub type EntityId = String;

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
