//! A plain-text rendering collaborator: surface plus widget.
//!
//! The surface models the container the dashboard shell would hand the
//! table; a "table element" here is a shared line buffer the widget
//! writes its formatted grid into.

use std::cell::RefCell;
use std::rc::Rc;

use cubetable::{Surface, TableRenderer, WidgetOptions};
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// One mounted table element: the lines the widget painted.
pub type Frame = Rc<RefCell<Vec<String>>>;

/// Container in the (text) document tree the table attaches to.
#[derive(Default)]
pub struct TextSurface {
    children: Vec<Frame>,
}

impl TextSurface {
    /// Lines of the most recently attached table, if any.
    pub fn current_frame(&self) -> Option<Vec<String>> {
        self.children.last().map(|frame| frame.borrow().clone())
    }
}

impl Surface for TextSurface {
    type Table = Frame;

    fn remove_last_child(&mut self) -> bool {
        self.children.pop().is_some()
    }

    fn append_table(&mut self) -> Frame {
        let frame = Frame::default();
        self.children.push(frame.clone());
        frame
    }
}

/// Text table widget consuming the assembled option set.
pub struct TextWidget {
    _frame: Frame,
}

impl TableRenderer<Frame> for TextWidget {
    fn mount(table: Frame, options: WidgetOptions) -> Self {
        let lines = paint(&options);
        *table.borrow_mut() = lines;
        Self { _frame: table }
    }
}

fn paint(options: &WidgetOptions) -> Vec<String> {
    let payload = &options.data;
    let widths = column_widths(options);
    let mut lines = Vec::new();

    if options.header {
        lines.push(format_row(&payload.headings, &widths));
        lines.push(separator(&widths));
    }

    let visible = if options.paging {
        options.per_page.min(payload.data.len())
    } else {
        payload.data.len()
    };
    for row in &payload.data[..visible] {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        lines.push(format_row(&cells, &widths));
    }

    if options.footer {
        lines.push(separator(&widths));
        lines.push(format_row(&payload.headings, &widths));
    }

    if options.paging {
        let pages = payload.data.len().div_ceil(options.per_page.max(1));
        let mut chrome = format!("page 1 of {pages} · {} rows", payload.data.len());
        if let Some(choices) = &options.per_page_select {
            chrome.push_str(&format!(" · page size {choices:?}"));
        }
        lines.push(chrome);
    }
    if options.searchable {
        lines.push("[search: type to filter rows]".to_string());
    }
    if options.sortable {
        lines.push("[sort: click a heading]".to_string());
    }

    lines
}

fn column_widths(options: &WidgetOptions) -> Vec<usize> {
    let payload = &options.data;
    let mut widths: Vec<usize> = payload.headings.iter().map(|h| h.width()).collect();
    for row in &payload.data {
        for (index, value) in row.iter().enumerate() {
            let width = cell_text(value).width();
            match widths.get_mut(index) {
                Some(current) => *current = (*current).max(width),
                // short-row hazard in reverse: a row wider than the schema
                None => widths.push(width),
            }
        }
    }
    widths
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, width) in widths.iter().enumerate() {
        let text = cells.get(index).map(String::as_str).unwrap_or("");
        line.push_str(text);
        line.push_str(&" ".repeat(width.saturating_sub(text.width()) + 2));
    }
    line.trim_end().to_string()
}

fn separator(widths: &[usize]) -> String {
    widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("--")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubetable::TablePayload;
    use serde_json::json;

    fn options(payload: TablePayload) -> WidgetOptions {
        WidgetOptions {
            data: payload,
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

    fn payload() -> TablePayload {
        TablePayload {
            headings: vec!["city".into(), "population".into()],
            data: vec![
                vec![json!("Basel"), json!(173000)],
                vec![json!("Zurich"), json!(434000)],
            ],
        }
    }

    #[test]
    fn header_row_and_separator_come_first() {
        let lines = paint(&options(payload()));

        assert!(lines[0].starts_with("city"));
        assert!(lines[1].starts_with('-'));
        assert!(lines[2].starts_with("Basel"));
    }

    #[test]
    fn paging_limits_visible_rows() {
        let mut opts = options(payload());
        opts.per_page = 1;

        let lines = paint(&opts);

        assert!(lines.iter().any(|line| line.starts_with("Basel")));
        assert!(!lines.iter().any(|line| line.starts_with("Zurich")));
        assert!(lines.iter().any(|line| line.contains("page 1 of 2")));
    }

    #[test]
    fn disabled_header_skips_headings() {
        let mut opts = options(payload());
        opts.header = false;

        let lines = paint(&opts);

        assert!(lines[0].starts_with("Basel"));
    }
}
