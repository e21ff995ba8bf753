use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

use crate::error::ContractError;

/// The collection function an [`super::Executor`] run is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operation {
    Filter,
    FindFirst,
    Map,
    TryMap,
    MapKeys,
    MapValues,
}

/// Execution events emitted by the executor.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionEvent {
    RunStarted {
        op: Operation,
        label: Option<String>,
    },
    /// `map` dropped the element at `index` because its transformation failed.
    ElementSkipped { index: usize },
    /// `try_map` stopped at the element at `index`.
    ShortCircuited { index: usize },
    /// `try_map` was called without a transformation and returned an error.
    ContractViolated { op: Operation, error: ContractError },
    RunFinished {
        op: Operation,
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunFinished { op, metrics, .. } => {
                eprintln!("[generics][{op:?}] finished: {metrics}");
            }
            other => eprintln!("[generics] {other:?}"),
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExecutionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn ExecutionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserver for CompositeObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Real-time metrics for executor runs.
///
/// Counters describe the most recent run and are reset when a new one begins; `run_id` counts
/// every run started so far. Callers can snapshot them at any time.
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    elements_in: AtomicU64,
    elements_out: AtomicU64,
    elements_skipped: AtomicU64,
    short_circuits: AtomicU64,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            elements_in: AtomicU64::new(0),
            elements_out: AtomicU64::new(0),
            elements_skipped: AtomicU64::new(0),
            short_circuits: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);

        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.elements_in.store(0, Ordering::SeqCst);
        self.elements_out.store(0, Ordering::SeqCst);
        self.elements_skipped.store(0, Ordering::SeqCst);
        self.short_circuits.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration, elements_out: usize) {
        self.elements_out
            .store(elements_out as u64, Ordering::SeqCst);
        // Keep a finished run distinguishable from one still in progress.
        let ns = elapsed.as_nanos().clamp(1, u64::MAX as u128) as u64;
        self.elapsed_ns.store(ns, Ordering::SeqCst);
    }

    pub fn on_element_in(&self) {
        let _ = self.elements_in.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_elements_in(&self, n: usize) {
        let _ = self.elements_in.fetch_add(n as u64, Ordering::SeqCst);
    }

    pub fn on_element_skipped(&self) {
        let _ = self.elements_skipped.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_short_circuit(&self) {
        let _ = self.short_circuits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let run_id = self.run_id.load(Ordering::SeqCst);
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id,
            elapsed,
            elements_in: self.elements_in.load(Ordering::SeqCst),
            elements_out: self.elements_out.load(Ordering::SeqCst),
            elements_skipped: self.elements_skipped.load(Ordering::SeqCst),
            short_circuits: self.short_circuits.load(Ordering::SeqCst),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    /// Elements handed to the callback (or, for key/value extraction, map entries read).
    pub elements_in: u64,
    pub elements_out: u64,
    pub elements_skipped: u64,
    pub short_circuits: u64,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, elements={}/{}, skipped={}, short_circuits={}, elapsed={:?}",
            self.run_id,
            self.elements_out,
            self.elements_in,
            self.elements_skipped,
            self.short_circuits,
            self.elapsed
        )
    }
}
