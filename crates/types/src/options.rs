//! The full option set handed to the external table-rendering widget.

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::payload::TablePayload;

/// Page-size choices offered when the page-size selector is enabled.
pub const PER_PAGE_SELECT: [usize; 5] = [5, 10, 15, 20, 25];

/// Complete, consistent configuration for one widget mount.
///
/// Recomputed on every render and consumed by the rendering collaborator;
/// never persisted. Serializes with the widget's camelCase wire keys, and
/// with the widget's boolean-or-value convention for `perPageSelect` and
/// `scrollY`: the disabled state is the literal `false`, not `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOptions {
    /// Rows and headings to render.
    pub data: TablePayload,
    /// Explicit column layout, passed through verbatim when set.
    pub columns: Option<Vec<Value>>,
    /// Disables the widget's automatic column sizing when true.
    pub fixed_columns: bool,
    /// Show the header row.
    pub header: bool,
    /// Show the footer row.
    pub footer: bool,
    /// Enable pagination controls.
    pub paging: bool,
    /// Rows per page.
    pub per_page: usize,
    /// Page-size selector choices; `None` leaves the selector off.
    #[serde(serialize_with = "false_when_none")]
    pub per_page_select: Option<Vec<usize>>,
    /// Vertical scroll extent; `None` disables the scroll region.
    #[serde(serialize_with = "false_when_none")]
    pub scroll_y: Option<String>,
    /// Enable the search box.
    pub searchable: bool,
    /// Enable column sorting.
    pub sortable: bool,
    /// Widget-specific label overrides, passed through verbatim when set.
    pub labels: Option<Value>,
}

fn false_when_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options() -> WidgetOptions {
        WidgetOptions {
            data: TablePayload::default(),
            columns: None,
            fixed_columns: true,
            header: true,
            footer: false,
            paging: true,
            per_page: 10,
            per_page_select: None,
            scroll_y: None,
            searchable: false,
            sortable: false,
            labels: None,
        }
    }

    #[test]
    fn disabled_selector_and_scroll_serialize_as_false() {
        let wire = serde_json::to_value(options()).unwrap();

        assert_eq!(wire["perPageSelect"], json!(false));
        assert_eq!(wire["scrollY"], json!(false));
    }

    #[test]
    fn enabled_selector_and_scroll_serialize_verbatim() {
        let mut opts = options();
        opts.per_page_select = Some(PER_PAGE_SELECT.to_vec());
        opts.scroll_y = Some("40vh".into());
        let wire = serde_json::to_value(opts).unwrap();

        assert_eq!(wire["perPageSelect"], json!([5, 10, 15, 20, 25]));
        assert_eq!(wire["scrollY"], json!("40vh"));
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let wire = serde_json::to_value(options()).unwrap();

        assert!(wire.get("fixedColumns").is_some());
        assert!(wire.get("perPage").is_some());
        assert!(wire.get("fixed_columns").is_none());
    }
}
