//! Data-to-table transformation and widget option assembly.
//!
//! This is the only part of the component carrying real logic: a filtered
//! record slice goes in, a column-oriented payload and a complete widget
//! option set come out. Everything here is synchronous and deterministic
//! over the dimension's current snapshot; there are no retries.

use indexmap::IndexMap;

use cubetable_types::{PER_PAGE_SELECT, Record, RecordOrder, TablePayload, WidgetOptions};

use crate::collaborators::Dimension;
use crate::config::TableConfig;
use crate::error::DataTableError;

/// Retrieves the full filtered record slice from a dimension.
///
/// Ascending order maps to bottom-ranked retrieval, descending to
/// top-ranked. Both ask for an unbounded count: page size and the
/// reserved slice bounds never limit what is fetched, only how the
/// widget presents it.
pub fn fetch_records<D: Dimension>(dimension: &D, order: RecordOrder) -> Vec<Record> {
    match order {
        RecordOrder::Ascending => dimension.bottom(usize::MAX),
        RecordOrder::Descending => dimension.top(usize::MAX),
    }
}

/// Derives the heading list and row matrix from a record slice.
///
/// The first record's field enumeration order defines the table schema.
/// Every record then contributes one row holding its own field values in
/// its own enumeration order — a record missing a schema field produces a
/// short row, which is reported as a diagnostic but left intact so the
/// output shape stays faithful to the input.
///
/// Heading overrides replace display text only; they never drop, rename,
/// or reorder the underlying fields. A present-but-empty override falls
/// back to the field name.
///
/// # Errors
///
/// [`DataTableError::EmptyDataset`] when the slice holds no records, as
/// no schema can be derived.
pub fn payload_from_records(
    records: &[Record],
    header_labels: Option<&IndexMap<String, String>>,
) -> Result<TablePayload, DataTableError> {
    let first = records.first().ok_or(DataTableError::EmptyDataset)?;
    let mut headings: Vec<String> = first.keys().cloned().collect();

    let mut data = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let row: Vec<serde_json::Value> = record.values().cloned().collect();
        if row.len() != headings.len() {
            tracing::warn!(
                row = index,
                cells = row.len(),
                expected = headings.len(),
                "record shape differs from the table schema"
            );
        }
        data.push(row);
    }

    if let Some(labels) = header_labels {
        for heading in &mut headings {
            match labels.get(heading.as_str()) {
                Some(label) if !label.is_empty() => *heading = label.clone(),
                _ => {}
            }
        }
    }

    Ok(TablePayload { headings, data })
}

/// Assembles the complete option set for one widget mount.
pub fn widget_options(config: &TableConfig, data: TablePayload) -> WidgetOptions {
    WidgetOptions {
        data,
        columns: config.columns().cloned(),
        fixed_columns: !config.auto_width_enabled(),
        header: config.header_enabled(),
        footer: config.footer_enabled(),
        paging: config.paging_enabled(),
        per_page: config.size(),
        per_page_select: config
            .paging_size_change_enabled()
            .then(|| PER_PAGE_SELECT.to_vec()),
        scroll_y: config
            .scrolling_enabled()
            .then(|| config.scroll_y().to_string()),
        searchable: config.search_enabled(),
        sortable: config.sort_enabled(),
        labels: config.labels().cloned(),
    }
}
