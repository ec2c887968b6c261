//! Signal extraction — optional record fields become numeric ranking inputs.

pub mod extractor;
pub mod inbound;
pub mod weights;

pub use extractor::{latest_series_value, SignalExtractor};
pub use inbound::inbound_references;
pub use weights::{FieldWeight, SignalWeights};
