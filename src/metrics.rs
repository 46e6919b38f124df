//! Gateway Metrics Module
//!
//! Operation-counter telemetry. Counters are observational only: increments
//! are infallible and never influence request handling.

use std::collections::HashMap;
use std::sync::Mutex;

// == Operation Status ==
/// Outcome tag recorded with every operation increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Success,
    Conflict,
    NotFound,
}

impl OpStatus {
    /// Tag value for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            OpStatus::Success => "success",
            OpStatus::Conflict => "conflict",
            OpStatus::NotFound => "not_found",
        }
    }
}

// == Counter ==
/// A named, monotonically increasing counter with attribute tags.
///
/// Each distinct tag set gets its own cell. `add` cannot fail; a poisoned
/// lock drops the increment rather than panicking into the request path.
#[derive(Debug)]
pub struct Counter {
    name: &'static str,
    description: &'static str,
    unit: &'static str,
    cells: Mutex<HashMap<Vec<(String, String)>, u64>>,
}

impl Counter {
    /// Creates a new Counter with all cells at zero.
    pub fn new(name: &'static str, description: &'static str, unit: &'static str) -> Self {
        Self {
            name,
            description,
            unit,
            cells: Mutex::new(HashMap::new()),
        }
    }

    /// Increments the cell for `tags` by `delta`.
    pub fn add(&self, delta: u64, tags: &[(&str, &str)]) {
        if let Ok(mut cells) = self.cells.lock() {
            let cell = cells.entry(tag_key(tags)).or_insert(0);
            *cell = cell.saturating_add(delta);
        }
    }

    /// Returns the current value of the cell for `tags`.
    pub fn value(&self, tags: &[(&str, &str)]) -> u64 {
        self.cells
            .lock()
            .map(|cells| cells.get(&tag_key(tags)).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Returns the sum across all tag sets.
    pub fn total(&self) -> u64 {
        self.cells
            .lock()
            .map(|cells| cells.values().sum())
            .unwrap_or(0)
    }

    /// Instrument name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Instrument description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Instrument unit.
    pub fn unit(&self) -> &'static str {
        self.unit
    }
}

fn tag_key(tags: &[(&str, &str)]) -> Vec<(String, String)> {
    tags.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// == Gateway Metrics ==
/// The three counters emitted by the gateway.
#[derive(Debug)]
pub struct GatewayMetrics {
    /// One increment per operation, tagged with {operation, status}
    pub operations: Counter,
    /// Incremented on each successful create
    pub keys_created: Counter,
    /// Incremented per key removed (delete and delete-all)
    pub keys_deleted: Counter,
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayMetrics {
    /// Creates the gateway's counter set.
    pub fn new() -> Self {
        Self {
            operations: Counter::new(
                "redis.operations.total",
                "Total number of Redis operations",
                "operations",
            ),
            keys_created: Counter::new(
                "redis.keys.created",
                "Number of keys created in Redis",
                "keys",
            ),
            keys_deleted: Counter::new(
                "redis.keys.deleted",
                "Number of keys deleted from Redis",
                "keys",
            ),
        }
    }

    /// Records one operation with its outcome.
    pub fn record_operation(&self, operation: &str, status: OpStatus) {
        self.operations
            .add(1, &[("operation", operation), ("status", status.as_str())]);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_new() {
        let counter = Counter::new("test.counter", "A test counter", "items");
        assert_eq!(counter.name(), "test.counter");
        assert_eq!(counter.description(), "A test counter");
        assert_eq!(counter.unit(), "items");
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn test_counter_add_untagged() {
        let counter = Counter::new("test.counter", "A test counter", "items");
        counter.add(1, &[]);
        counter.add(2, &[]);
        assert_eq!(counter.value(&[]), 3);
    }

    #[test]
    fn test_counter_separates_tag_sets() {
        let counter = Counter::new("test.counter", "A test counter", "items");
        counter.add(1, &[("operation", "get"), ("status", "success")]);
        counter.add(1, &[("operation", "get"), ("status", "not_found")]);
        counter.add(1, &[("operation", "get"), ("status", "success")]);

        assert_eq!(
            counter.value(&[("operation", "get"), ("status", "success")]),
            2
        );
        assert_eq!(
            counter.value(&[("operation", "get"), ("status", "not_found")]),
            1
        );
        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_counter_value_unknown_tags() {
        let counter = Counter::new("test.counter", "A test counter", "items");
        assert_eq!(counter.value(&[("operation", "never")]), 0);
    }

    #[test]
    fn test_record_operation() {
        let metrics = GatewayMetrics::new();
        metrics.record_operation("create", OpStatus::Success);
        metrics.record_operation("create", OpStatus::Conflict);

        assert_eq!(
            metrics
                .operations
                .value(&[("operation", "create"), ("status", "success")]),
            1
        );
        assert_eq!(
            metrics
                .operations
                .value(&[("operation", "create"), ("status", "conflict")]),
            1
        );
    }

    #[test]
    fn test_op_status_tags() {
        assert_eq!(OpStatus::Success.as_str(), "success");
        assert_eq!(OpStatus::Conflict.as_str(), "conflict");
        assert_eq!(OpStatus::NotFound.as_str(), "not_found");
    }
}
