//! Nested timing spans for profiling a tick.
//!
//! The stack is an ordinary value owned by whoever profiles; nothing here is
//! global.

use std::time::{Duration, Instant};

/// A finished span.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanRecord {
    pub label: &'static str,
    /// Nesting depth at which the span was opened (0 = outermost).
    pub depth: usize,
    pub elapsed: Duration,
}

impl SpanRecord {
    /// One report line, indented two spaces per nesting level.
    pub fn indented(&self) -> String {
        format!(
            "{:indent$}{}: {:.3} ms",
            "",
            self.label,
            self.elapsed.as_secs_f64() * 1000.0,
            indent = self.depth * 2
        )
    }
}

#[derive(Debug, Default)]
pub struct SpanStack {
    open: Vec<(&'static str, Instant)>,
    records: Vec<SpanRecord>,
}

impl SpanStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, label: &'static str) {
        self.open.push((label, Instant::now()));
    }

    /// Close the innermost open span. `None` if nothing is open.
    pub fn end(&mut self) -> Option<SpanRecord> {
        let (label, started) = self.open.pop()?;
        let record = SpanRecord {
            label,
            depth: self.open.len(),
            elapsed: started.elapsed(),
        };
        tracing::debug!(
            label = record.label,
            depth = record.depth,
            "{}",
            record.indented()
        );
        self.records.push(record.clone());
        Some(record)
    }

    /// Time `f` inside a span named `label`.
    pub fn measure<T>(&mut self, label: &'static str, f: impl FnOnce() -> T) -> T {
        self.begin(label);
        let value = f();
        self.end();
        value
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn records(&self) -> &[SpanRecord] {
        &self.records
    }

    pub fn take_records(&mut self) -> Vec<SpanRecord> {
        std::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_line() {
        let record = SpanRecord {
            label: "field_advance",
            depth: 2,
            elapsed: Duration::from_micros(1500),
        };
        assert_eq!(record.indented(), "    field_advance: 1.500 ms");

        let outer = SpanRecord {
            depth: 0,
            ..record
        };
        assert_eq!(outer.indented(), "field_advance: 1.500 ms");
    }

    #[test]
    fn test_nested_spans() {
        let mut spans = SpanStack::new();
        spans.begin("tick");
        spans.begin("advance");
        assert_eq!(spans.depth(), 2);

        let inner = spans.end().unwrap();
        assert_eq!(inner.label, "advance");
        assert_eq!(inner.depth, 1);

        let outer = spans.end().unwrap();
        assert_eq!(outer.label, "tick");
        assert_eq!(outer.depth, 0);
        assert!(outer.elapsed >= inner.elapsed);

        assert!(spans.end().is_none());
        assert_eq!(spans.records().len(), 2);
    }

    #[test]
    fn test_measure_returns_value() {
        let mut spans = SpanStack::new();
        let value = spans.measure("sum", || (1..=10).sum::<u32>());
        assert_eq!(value, 55);

        let records = spans.take_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "sum");
        assert!(spans.records().is_empty());
    }
}
