use thiserror::Error;

/// Errors emitted while attaching or rendering a data table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataTableError {
    /// The dimension returned an empty record slice, so no table schema
    /// can be derived.
    #[error("dimension returned an empty record slice")]
    EmptyDataset,
    /// The builder was finalized without a dimension.
    #[error("a data table cannot attach without a dimension")]
    MissingDimension,
    /// The builder was finalized without a render surface.
    #[error("a data table cannot attach without a render surface")]
    MissingSurface,
}
