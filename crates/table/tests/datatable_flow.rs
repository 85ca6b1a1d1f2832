//! End-to-end flow over mock collaborators: dimension → transform →
//! surface teardown → renderer mount.

use cubetable::{
    Attachable, DataTable, Dimension, Record, RecordOrder, Surface, TableRenderer, WidgetOptions,
    records_from_str,
};
use indexmap::IndexMap;
use serde_json::json;

/// Cube axis over an in-memory record set, ranked by a sort key the way a
/// filtering engine would rank its dimension values.
struct KeyedDimension {
    records: Vec<Record>,
    key: String,
}

impl KeyedDimension {
    fn new(json: &str, key: &str) -> Self {
        Self {
            records: records_from_str(json).unwrap(),
            key: key.to_string(),
        }
    }

    fn ranked(&self) -> Vec<Record> {
        let mut ranked = self.records.clone();
        ranked.sort_by(|a, b| {
            let left = a.get(&self.key).and_then(|v| v.as_i64()).unwrap_or_default();
            let right = b.get(&self.key).and_then(|v| v.as_i64()).unwrap_or_default();
            left.cmp(&right)
        });
        ranked
    }
}

impl Dimension for KeyedDimension {
    fn bottom(&self, count: usize) -> Vec<Record> {
        self.ranked().into_iter().take(count).collect()
    }

    fn top(&self, count: usize) -> Vec<Record> {
        self.ranked().into_iter().rev().take(count).collect()
    }
}

#[derive(Default)]
struct CountingSurface {
    children: usize,
    tables_created: usize,
}

impl Surface for CountingSurface {
    type Table = usize;

    fn remove_last_child(&mut self) -> bool {
        if self.children == 0 {
            return false;
        }
        self.children -= 1;
        true
    }

    fn append_table(&mut self) -> usize {
        self.children += 1;
        self.tables_created += 1;
        self.tables_created
    }
}

struct CapturingRenderer {
    options: WidgetOptions,
}

impl TableRenderer<usize> for CapturingRenderer {
    fn mount(_table: usize, options: WidgetOptions) -> Self {
        Self { options }
    }
}

const CITIES: &str = r#"[
    {"city": "Basel", "population": 173000},
    {"city": "Zurich", "population": 434000},
    {"city": "Geneva", "population": 203000}
]"#;

fn city_table() -> DataTable<KeyedDimension, CountingSurface, CapturingRenderer> {
    DataTable::<KeyedDimension, CountingSurface, CapturingRenderer>::builder()
        .dimension(KeyedDimension::new(CITIES, "population"))
        .surface(CountingSurface::default())
        .build()
        .unwrap()
}

#[test]
fn ascending_render_ranks_rows_lowest_first() {
    let mut table = city_table();

    table.render().unwrap();

    let payload = &table.renderer().unwrap().options.data;
    assert_eq!(payload.headings, ["city", "population"]);
    assert_eq!(payload.data[0][0], json!("Basel"));
    assert_eq!(payload.data[2][0], json!("Zurich"));
    assert!(payload.is_rectangular());
}

#[test]
fn flipping_order_swaps_retrieval_not_row_shape() {
    let mut table = city_table();
    table.config_mut().set_order(RecordOrder::Descending);

    table.render().unwrap();

    let payload = &table.renderer().unwrap().options.data;
    assert_eq!(payload.data[0][0], json!("Zurich"));
    assert_eq!(payload.data[2][0], json!("Basel"));
    assert_eq!(payload.headings, ["city", "population"]);
}

#[test]
fn header_labels_flow_through_to_the_mounted_widget() {
    let mut table = city_table();
    table.config_mut().set_header_labels(Some(IndexMap::from([(
        "population".to_string(),
        "Residents".to_string(),
    )])));

    table.render().unwrap();

    let options = &table.renderer().unwrap().options;
    assert_eq!(options.data.headings, ["city", "Residents"]);
}

#[test]
fn filter_change_redraws_from_scratch() {
    let mut table = city_table();

    // initial attach, then two upstream filter-change redraws
    Attachable::render(&mut table).unwrap();
    Attachable::redraw(&mut table).unwrap();
    Attachable::redraw(&mut table).unwrap();

    assert_eq!(table.surface().tables_created, 3);
    assert_eq!(table.surface().children, 1);
}

#[test]
fn widget_contract_matches_the_configured_toggles() {
    let mut table = city_table();
    table
        .config_mut()
        .set_search_enabled(true)
        .set_paging_size_change_enabled(true)
        .set_labels(Some(json!({"placeholder": "Search cities"})));

    table.render().unwrap();

    let wire = serde_json::to_value(&table.renderer().unwrap().options).unwrap();
    assert_eq!(wire["searchable"], json!(true));
    assert_eq!(wire["perPageSelect"], json!([5, 10, 15, 20, 25]));
    assert_eq!(wire["labels"]["placeholder"], json!("Search cities"));
    assert_eq!(wire["scrollY"], json!(false));
    assert_eq!(wire["paging"], json!(true));
    assert_eq!(wire["header"], json!(true));
    assert_eq!(wire["footer"], json!(false));
}
