//! User-settable display options for a data table.

use indexmap::IndexMap;
use serde_json::Value;

use cubetable_types::RecordOrder;

/// Display options bundle with accessor-style get/set semantics.
///
/// Every setter is a plain state mutation returning `&mut Self` so calls
/// chain; none of them validate — structurally odd values pass through to
/// the rendering widget untouched, which is the caller's responsibility.
/// The one toggle whose change must repaint immediately
/// (`enable_scrolling`) has its redraw-triggering entry point on
/// [`crate::DataTable`], not here.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    size: usize,
    columns: Option<Vec<Value>>,
    order: RecordOrder,
    begin_slice: usize,
    end_slice: Option<usize>,
    enable_sort: bool,
    enable_search: bool,
    enable_paging: bool,
    enable_scrolling: bool,
    scroll_y: String,
    enable_paging_size_change: bool,
    enable_header: bool,
    enable_footer: bool,
    enable_auto_width: bool,
    labels: Option<Value>,
    header_labels: Option<IndexMap<String, String>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            size: 10,
            columns: None,
            order: RecordOrder::Ascending,
            begin_slice: 0,
            end_slice: None,
            enable_sort: false,
            enable_search: false,
            enable_paging: true,
            enable_scrolling: false,
            scroll_y: String::new(),
            enable_paging_size_change: false,
            enable_header: true,
            enable_footer: false,
            enable_auto_width: false,
            labels: None,
            header_labels: None,
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // Getters

    /// Rows per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Explicit column layout override, handed to the widget verbatim.
    pub fn columns(&self) -> Option<&Vec<Value>> {
        self.columns.as_ref()
    }

    /// Direction records are retrieved from the dimension.
    pub fn order(&self) -> RecordOrder {
        self.order
    }

    /// Reserved lower slice bound; stored but not applied when the
    /// payload is assembled.
    pub fn begin_slice(&self) -> usize {
        self.begin_slice
    }

    /// Reserved upper slice bound; stored but not applied when the
    /// payload is assembled.
    pub fn end_slice(&self) -> Option<usize> {
        self.end_slice
    }

    pub fn sort_enabled(&self) -> bool {
        self.enable_sort
    }

    pub fn search_enabled(&self) -> bool {
        self.enable_search
    }

    pub fn paging_enabled(&self) -> bool {
        self.enable_paging
    }

    pub fn scrolling_enabled(&self) -> bool {
        self.enable_scrolling
    }

    /// Vertical scroll extent, only meaningful while scrolling is enabled.
    pub fn scroll_y(&self) -> &str {
        &self.scroll_y
    }

    pub fn paging_size_change_enabled(&self) -> bool {
        self.enable_paging_size_change
    }

    pub fn header_enabled(&self) -> bool {
        self.enable_header
    }

    pub fn footer_enabled(&self) -> bool {
        self.enable_footer
    }

    pub fn auto_width_enabled(&self) -> bool {
        self.enable_auto_width
    }

    /// Widget-specific label overrides, handed through verbatim.
    pub fn labels(&self) -> Option<&Value> {
        self.labels.as_ref()
    }

    /// Per-field heading text overrides.
    pub fn header_labels(&self) -> Option<&IndexMap<String, String>> {
        self.header_labels.as_ref()
    }

    // Setters

    pub fn set_size(&mut self, size: usize) -> &mut Self {
        self.size = size;
        self
    }

    pub fn set_columns(&mut self, columns: Option<Vec<Value>>) -> &mut Self {
        self.columns = columns;
        self
    }

    pub fn set_order(&mut self, order: RecordOrder) -> &mut Self {
        self.order = order;
        self
    }

    pub fn set_begin_slice(&mut self, begin_slice: usize) -> &mut Self {
        self.begin_slice = begin_slice;
        self
    }

    pub fn set_end_slice(&mut self, end_slice: Option<usize>) -> &mut Self {
        self.end_slice = end_slice;
        self
    }

    pub fn set_sort_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_sort = enable;
        self
    }

    pub fn set_search_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_search = enable;
        self
    }

    pub fn set_paging_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_paging = enable;
        self
    }

    /// Pure counterpart of [`crate::DataTable::set_scrolling_enabled`];
    /// stores the flag without repainting.
    pub fn set_scrolling_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_scrolling = enable;
        self
    }

    pub fn set_scroll_y(&mut self, scroll_y: impl Into<String>) -> &mut Self {
        self.scroll_y = scroll_y.into();
        self
    }

    pub fn set_paging_size_change_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_paging_size_change = enable;
        self
    }

    pub fn set_header_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_header = enable;
        self
    }

    pub fn set_footer_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_footer = enable;
        self
    }

    pub fn set_auto_width_enabled(&mut self, enable: bool) -> &mut Self {
        self.enable_auto_width = enable;
        self
    }

    pub fn set_labels(&mut self, labels: Option<Value>) -> &mut Self {
        self.labels = labels;
        self
    }

    pub fn set_header_labels(&mut self, header_labels: Option<IndexMap<String, String>>) -> &mut Self {
        self.header_labels = header_labels;
        self
    }
}
