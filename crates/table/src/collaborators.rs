//! Trait seams for the component's external collaborators.
//!
//! The table component does not filter data, own the document tree, or
//! paint cells. Each of those concerns sits behind a trait here, so the
//! component can be exercised against an in-memory cube and a mock
//! surface exactly the way it runs against production collaborators.

use cubetable_types::{Record, WidgetOptions};

/// Ordered retrieval over the shared filtered dataset.
///
/// A dimension is one axis of the data cube. Filters applied elsewhere in
/// the dashboard narrow the records it yields; the table never sees the
/// filter state itself, only the resulting slices.
pub trait Dimension {
    /// Returns up to `count` records ranked lowest-first.
    fn bottom(&self, count: usize) -> Vec<Record>;

    /// Returns up to `count` records ranked highest-first.
    fn top(&self, count: usize) -> Vec<Record>;
}

/// Target container the table is painted into.
///
/// Every render performs a full teardown: the component removes the
/// surface's children one by one, then attaches a single fresh table
/// element. There is no incremental-update path.
pub trait Surface {
    /// Handle to a table element created inside this surface.
    type Table;

    /// Detaches the surface's last child. Returns `false` once no
    /// children remain.
    fn remove_last_child(&mut self) -> bool;

    /// Creates a new empty table element and attaches it as the last
    /// child, returning its handle.
    fn append_table(&mut self) -> Self::Table;
}

/// External widget that paints rows, columns, and pagination chrome.
///
/// A renderer instance is constructed fresh for every render, bound to
/// the table element created for that render, and owns it until the next
/// render discards both.
pub trait TableRenderer<T>: Sized {
    /// Mounts the widget on `table` with the assembled option set.
    fn mount(table: T, options: WidgetOptions) -> Self;
}
