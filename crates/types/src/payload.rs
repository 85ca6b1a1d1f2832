//! Column-oriented table payload derived from a record slice.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Headings plus row matrix for one render.
///
/// Derived fresh for every render and handed to the rendering widget as
/// part of [`crate::WidgetOptions`]; never persisted between renders. Row
/// order follows the record slice, column order follows the first record's
/// field enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TablePayload {
    /// Display headings, one per column.
    pub headings: Vec<String>,
    /// Cell values, one inner vector per record.
    pub data: Vec<Vec<Value>>,
}

impl TablePayload {
    /// Number of rows in the payload.
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// True when every row carries exactly one cell per heading.
    pub fn is_rectangular(&self) -> bool {
        self.data.iter().all(|row| row.len() == self.headings.len())
    }
}
