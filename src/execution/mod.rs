//! Observed execution of the collection functions.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - An [`Executor`] running the same six functions with the same results and contracts
//! - Real-time metrics + observer hooks for monitoring
//! - [`ExecutionOptions`], loadable from JSON
//!
//! Everything runs on the calling thread.

mod observer;

use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ContractError, TryMapResult};
use crate::processing::{filter, find_first, map, map_keys, map_values, try_map};

pub use observer::{
    CompositeObserver, ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    Operation, StdErrExecutionObserver,
};

/// Configuration for the [`Executor`].
///
/// Missing keys fall back to [`ExecutionOptions::default`] when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionOptions {
    /// Name attached to every [`ExecutionEvent::RunStarted`].
    pub label: Option<String>,
    /// Emit [`ExecutionEvent::ElementSkipped`] / [`ExecutionEvent::ShortCircuited`].
    ///
    /// Run-level events are emitted regardless.
    pub element_events: bool,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            label: None,
            element_events: true,
        }
    }
}

impl ExecutionOptions {
    /// Parse options from a JSON object, e.g. `{"label": "import", "element_events": false}`.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Runs the collection functions while reporting events and metrics.
///
/// Results are exactly those of the functions in [`crate::processing`]. A missing callback
/// panics before any event is emitted, except for [`Executor::try_map`], which reports
/// [`ExecutionEvent::ContractViolated`] and returns the error.
pub struct Executor {
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(ExecutionOptions::default())
    }
}

impl Executor {
    /// Create a new executor with the given options.
    pub fn new(opts: ExecutionOptions) -> Self {
        Self {
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        }
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.opts
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Observed [`crate::processing::filter`].
    pub fn filter<T, P>(&self, items: Option<&[T]>, predicate: Option<P>) -> Option<Vec<T>>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        require(items.is_some(), predicate.is_some(), ContractError::PredicateNotProvided);

        let op = Operation::Filter;
        let start = self.begin(op);
        let predicate = predicate.map(|mut p| {
            move |el: &T| {
                self.metrics.on_element_in();
                p(el)
            }
        });
        let out = filter(items, predicate);
        self.finish(op, start, out.as_ref().map_or(0, Vec::len));
        out
    }

    /// Observed [`crate::processing::find_first`].
    pub fn find_first<T, P>(&self, items: Option<&[T]>, predicate: Option<P>) -> (T, bool)
    where
        T: Clone + Default,
        P: FnMut(&T) -> bool,
    {
        require(items.is_some(), predicate.is_some(), ContractError::PredicateNotProvided);

        let op = Operation::FindFirst;
        let start = self.begin(op);
        let predicate = predicate.map(|mut p| {
            move |el: &T| {
                self.metrics.on_element_in();
                p(el)
            }
        });
        let (value, found) = find_first(items, predicate);
        self.finish(op, start, usize::from(found));
        (value, found)
    }

    /// Observed [`crate::processing::map`]. Each skipped element is counted and, if enabled,
    /// reported as [`ExecutionEvent::ElementSkipped`].
    pub fn map<From, To, E, F>(&self, items: Option<&[From]>, transform: Option<F>) -> Option<Vec<To>>
    where
        F: FnMut(&From) -> Result<To, E>,
    {
        require(items.is_some(), transform.is_some(), ContractError::TransformationNotProvided);

        let op = Operation::Map;
        let start = self.begin(op);
        let transform = transform.map(|mut f| {
            let mut index = 0usize;
            move |el: &From| {
                let i = index;
                index += 1;
                self.metrics.on_element_in();
                let res = f(el);
                if res.is_err() {
                    self.metrics.on_element_skipped();
                    if self.opts.element_events {
                        self.emit(ExecutionEvent::ElementSkipped { index: i });
                    }
                }
                res
            }
        });
        let out = map(items, transform);
        self.finish(op, start, out.as_ref().map_or(0, Vec::len));
        out
    }

    /// Observed [`crate::processing::try_map`]. The failing element is reported as
    /// [`ExecutionEvent::ShortCircuited`] when element events are enabled.
    pub fn try_map<From, To, E, F>(&self, items: Option<&[From]>, transform: Option<F>) -> TryMapResult<To, E>
    where
        F: FnMut(&From) -> Result<To, E>,
    {
        let op = Operation::TryMap;
        let start = self.begin(op);
        if items.is_some() && transform.is_none() {
            self.emit(ExecutionEvent::ContractViolated {
                op,
                error: ContractError::TransformationNotProvided,
            });
        }

        let transform = transform.map(|mut f| {
            let mut index = 0usize;
            move |el: &From| {
                let i = index;
                index += 1;
                self.metrics.on_element_in();
                let res = f(el);
                if res.is_err() {
                    self.metrics.on_short_circuit();
                    if self.opts.element_events {
                        self.emit(ExecutionEvent::ShortCircuited { index: i });
                    }
                }
                res
            }
        });
        let out = try_map(items, transform);
        let produced = match &out {
            Ok(values) => values.as_ref().map_or(0, Vec::len),
            Err(err) => err.partial().map_or(0, |p| p.len()),
        };
        self.finish(op, start, produced);
        out
    }

    /// Observed [`crate::processing::map_keys`].
    pub fn map_keys<K, V, S>(&self, map: Option<&HashMap<K, V, S>>) -> Option<Vec<K>>
    where
        K: Clone,
        S: BuildHasher,
    {
        let op = Operation::MapKeys;
        let start = self.begin(op);
        self.metrics.on_elements_in(map.map_or(0, HashMap::len));
        let out = map_keys(map);
        self.finish(op, start, out.as_ref().map_or(0, Vec::len));
        out
    }

    /// Observed [`crate::processing::map_values`].
    pub fn map_values<K, V, S>(&self, map: Option<&HashMap<K, V, S>>) -> Option<Vec<V>>
    where
        V: Clone,
        S: BuildHasher,
    {
        let op = Operation::MapValues;
        let start = self.begin(op);
        self.metrics.on_elements_in(map.map_or(0, HashMap::len));
        let out = map_values(map);
        self.finish(op, start, out.as_ref().map_or(0, Vec::len));
        out
    }

    fn begin(&self, op: Operation) -> Instant {
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            op,
            label: self.opts.label.clone(),
        });
        Instant::now()
    }

    fn finish(&self, op: Operation, start: Instant, produced: usize) {
        let elapsed = start.elapsed();
        self.metrics.end_run(elapsed, produced);
        self.emit(ExecutionEvent::RunFinished {
            op,
            elapsed,
            metrics: self.metrics.snapshot(),
        });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

/// Panics with `missing` when a present input comes without its callback.
fn require(input_present: bool, callback_present: bool, missing: ContractError) {
    if input_present && !callback_present {
        panic!("{missing}");
    }
}
