//! # Cubetable Types
//!
//! Shared type definitions for the cubetable workspace: the record model
//! rows are drawn from, the column-oriented payload derived from a record
//! slice, and the full option set handed to an external table-rendering
//! widget.
//!
//! These types carry no behavior beyond construction and (de)serialization;
//! the transformation logic that produces them lives in the `cubetable`
//! crate.

pub mod options;
pub mod payload;
pub mod record;

pub use options::{PER_PAGE_SELECT, WidgetOptions};
pub use payload::TablePayload;
pub use record::{Record, RecordOrder, records_from_slice, records_from_str};
