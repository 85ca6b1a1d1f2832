//! In-memory stand-in for the cube's filtering engine.

use std::cell::RefCell;
use std::rc::Rc;

use cubetable::{Dimension, Record};
use serde_json::Value;

/// One axis of an in-memory cube: records ranked by a sort key, narrowed
/// by whatever filter the rest of the dashboard currently applies.
pub struct MemoryDimension {
    records: Vec<Record>,
    rank_key: String,
    floor: Option<i64>,
}

impl MemoryDimension {
    pub fn new(records: Vec<Record>, rank_key: impl Into<String>) -> Self {
        Self {
            records,
            rank_key: rank_key.into(),
            floor: None,
        }
    }

    /// Admits only records whose rank-key value is at least `floor`,
    /// mimicking a filter applied by a linked component.
    pub fn set_floor(&mut self, floor: Option<i64>) {
        self.floor = floor;
    }

    fn rank(&self, record: &Record) -> i64 {
        record
            .get(&self.rank_key)
            .map(rank_value)
            .unwrap_or_default()
    }

    fn filtered_ranked(&self) -> Vec<Record> {
        let mut slice: Vec<Record> = self
            .records
            .iter()
            .filter(|record| match self.floor {
                Some(floor) => self.rank(record) >= floor,
                None => true,
            })
            .cloned()
            .collect();
        slice.sort_by_key(|record| self.rank(record));
        slice
    }
}

impl Dimension for MemoryDimension {
    fn bottom(&self, count: usize) -> Vec<Record> {
        self.filtered_ranked().into_iter().take(count).collect()
    }

    fn top(&self, count: usize) -> Vec<Record> {
        self.filtered_ranked().into_iter().rev().take(count).collect()
    }
}

/// Shared handle over a [`MemoryDimension`], so the table and the rest of
/// the dashboard observe the same filter state.
#[derive(Clone)]
pub struct SharedDimension(Rc<RefCell<MemoryDimension>>);

impl SharedDimension {
    pub fn new(records: Vec<Record>, rank_key: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(MemoryDimension::new(records, rank_key))))
    }

    pub fn set_floor(&self, floor: Option<i64>) {
        self.0.borrow_mut().set_floor(floor);
    }
}

impl Dimension for SharedDimension {
    fn bottom(&self, count: usize) -> Vec<Record> {
        self.0.borrow().bottom(count)
    }

    fn top(&self, count: usize) -> Vec<Record> {
        self.0.borrow().top(count)
    }
}

fn rank_value(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n.as_i64().unwrap_or_default(),
        Value::Bool(b) => *b as i64,
        // non-numeric keys rank by their first bytes, enough for a demo
        Value::String(s) => s
            .bytes()
            .take(8)
            .fold(0i64, |acc, byte| (acc << 8) | i64::from(byte)),
        _ => 0,
    }
}
