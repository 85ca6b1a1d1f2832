//! Runnable cubetable wiring: an in-memory cube axis, a text surface, and
//! a text table widget, driven by CLI flags that map onto the table's
//! display options. Passing `--floor` simulates a linked component
//! narrowing the cube's filter after the initial attach, which triggers a
//! full redraw of the table.

mod cube;
mod text_widget;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indexmap::IndexMap;
use tracing::Level;

use cubetable::{DataTable, Record, RecordOrder, TableConfig, records_from_str};

use crate::cube::SharedDimension;
use crate::text_widget::{TextSurface, TextWidget};

const SAMPLE_RECORDS: &str = r#"[
    {"city": "Basel", "canton": "BS", "population": 173000},
    {"city": "Zurich", "canton": "ZH", "population": 434000},
    {"city": "Geneva", "canton": "GE", "population": 203000},
    {"city": "Bern", "canton": "BE", "population": 134000},
    {"city": "Lausanne", "canton": "VD", "population": 140000},
    {"city": "Winterthur", "canton": "ZH", "population": 114000},
    {"city": "Lucerne", "canton": "LU", "population": 82000}
]"#;

#[derive(Parser)]
#[command(name = "cubetable-demo", about = "Render a cross-filterable data table as text")]
struct Cli {
    /// JSON file with an array of record objects; a built-in sample is
    /// used when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Field the dimension ranks records by; defaults to the first field
    /// of the first record
    #[arg(long)]
    rank_by: Option<String>,

    /// Retrieval direction (asc or desc)
    #[arg(long, default_value = "asc")]
    order: RecordOrder,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    size: usize,

    #[arg(long)]
    sortable: bool,

    #[arg(long)]
    searchable: bool,

    /// Repeat the heading row below the data
    #[arg(long)]
    footer: bool,

    /// Offer the page-size selector
    #[arg(long)]
    page_sizes: bool,

    /// Heading override as field=Label; repeatable
    #[arg(long = "label", value_name = "FIELD=LABEL")]
    labels: Vec<String>,

    /// After the first render, narrow the cube to records whose rank
    /// field is at least this value and redraw
    #[arg(long)]
    floor: Option<i64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let records = load_records(&cli)?;
    let rank_key = match &cli.rank_by {
        Some(key) => key.clone(),
        None => records
            .first()
            .and_then(|record| record.keys().next().cloned())
            .context("cannot pick a rank field from an empty dataset")?,
    };

    let dimension = SharedDimension::new(records, rank_key);
    let cube_handle = dimension.clone();

    let mut table: DataTable<SharedDimension, TextSurface, TextWidget> =
        DataTable::<SharedDimension, TextSurface, TextWidget>::builder()
        .dimension(dimension)
        .surface(TextSurface::default())
        .config(table_config(&cli)?)
        .build()?;

    table.render().context("initial render")?;
    print_frame(table.surface());

    if let Some(floor) = cli.floor {
        cube_handle.set_floor(Some(floor));
        table.redraw().context("redraw after filter change")?;
        println!("\n-- filter applied: rank field >= {floor} --\n");
        print_frame(table.surface());
    }

    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

fn load_records(cli: &Cli) -> Result<Vec<Record>> {
    let json = match &cli.data {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => SAMPLE_RECORDS.to_string(),
    };
    records_from_str(&json).context("parsing records")
}

fn table_config(cli: &Cli) -> Result<TableConfig> {
    let mut config = TableConfig::new();
    config
        .set_order(cli.order)
        .set_size(cli.size)
        .set_sort_enabled(cli.sortable)
        .set_search_enabled(cli.searchable)
        .set_footer_enabled(cli.footer)
        .set_paging_size_change_enabled(cli.page_sizes);

    if !cli.labels.is_empty() {
        let mut labels = IndexMap::new();
        for pair in &cli.labels {
            let (field, label) = pair
                .split_once('=')
                .with_context(|| format!("expected FIELD=LABEL, got `{pair}`"))?;
            labels.insert(field.to_string(), label.to_string());
        }
        config.set_header_labels(Some(labels));
    }

    Ok(config)
}

fn print_frame(surface: &TextSurface) {
    if let Some(lines) = surface.current_frame() {
        for line in lines {
            println!("{line}");
        }
    }
}
