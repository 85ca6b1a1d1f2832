//! # Cubetable
//!
//! A row-level data table for dashboards built from linked visual
//! components over a shared multi-dimensional data cube. Whenever the
//! cube's filter set changes, the table re-renders the current filtered
//! record slice as a paginated, sortable, searchable grid.
//!
//! The crate owns the data-to-table transformation and the assembly of a
//! complete widget configuration; the pieces around it are trait seams:
//!
//! - [`Dimension`] supplies ordered or reverse-ordered record slices
//!   under the cube's current filter state.
//! - [`Surface`] is the target container in the document tree that gets
//!   torn down and rebuilt on every render.
//! - [`TableRenderer`] is the external widget that consumes the assembled
//!   [`WidgetOptions`] and paints rows, columns, and pagination chrome.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut table: DataTable<CubeDimension, DomSurface, GridWidget> = DataTable::builder()
//!     .dimension(cube.dimension("city"))
//!     .surface(DomSurface::lookup("#table-anchor")?)
//!     .build()?;
//!
//! table.config_mut().set_size(25).set_order(RecordOrder::Descending);
//! table.render()?;
//! ```

pub mod collaborators;
pub mod component;
pub mod config;
pub mod error;
pub mod transform;

pub use collaborators::{Dimension, Surface, TableRenderer};
pub use component::{Attachable, DataTable, DataTableBuilder};
pub use config::TableConfig;
pub use cubetable_types::{
    PER_PAGE_SELECT, Record, RecordOrder, TablePayload, WidgetOptions, records_from_slice,
    records_from_str,
};
pub use error::DataTableError;
