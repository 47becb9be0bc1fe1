//! Data model shared by the sanctions export transformer.
//!
//! Two halves live here: the parsed source document ([`Element`],
//! [`Document`]) and the flattened output ([`Feature`], [`Record`],
//! [`RecordBuilder`]).

pub mod attributes;
pub mod element;
pub mod feature;
pub mod record;

pub use element::{Descendants, Document, Element};
pub use feature::Feature;
pub use record::{PayloadValue, Record, RecordBuilder};
