//! Tracing support for diagnostics and performance monitoring.
//!
//! This module provides tracing functionality when the `tracing` feature is enabled,
//! and provides no-op implementations when it's disabled.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::{BTreeMap, HashMap},
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    use crate::Representation;

    thread_local! {
        #[allow(clippy::type_complexity)]
        static TIMING_SCOPES: RefCell<HashMap<Representation, BTreeMap<&'static str, (Duration, usize)>>> =
            RefCell::new(HashMap::new());
        static TIMING_SCOPE: RefCell<Option<Representation>> = const { RefCell::new(None) };
    }

    /// Restores the previous timing scope when dropped.
    pub struct TimingScopeGuard {
        previous: Option<Representation>,
    }

    impl Drop for TimingScopeGuard {
        fn drop(&mut self) {
            TIMING_SCOPE.with(|scope| {
                *scope.borrow_mut() = self.previous;
            });
        }
    }

    /// Attributes spans closed on this thread to `scope` until the guard is dropped.
    pub fn set_timing_scope(scope: Representation) -> TimingScopeGuard {
        let previous = TIMING_SCOPE.with(|current| current.borrow_mut().replace(scope));
        TimingScopeGuard { previous }
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(scope) = TIMING_SCOPE.with(|scope| *scope.borrow()) else {
                return;
            };
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    TIMING_SCOPES.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals
                            .entry(scope)
                            .or_default()
                            .entry(name)
                            .or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs a global subscriber that records span timings.  Does nothing
    /// if a subscriber is already installed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Gets the accumulated `(total duration, count)` for a span name in a scope.
    pub fn method_timing(scope: Representation, name: &str) -> Option<(Duration, usize)> {
        TIMING_SCOPES.with(|totals| {
            totals
                .borrow()
                .get(&scope)
                .and_then(|entries| entries.get(name).copied())
        })
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        for scope in Representation::ALL {
            dump_scope_timings(scope);
        }
    }

    #[doc(hidden)]
    pub fn reset_method_timings() {
        init_tracing();
        TIMING_SCOPES.with(|totals| totals.borrow_mut().clear());
    }

    fn dump_scope_timings(scope: Representation) {
        TIMING_SCOPES.with(|totals| {
            let totals = totals.borrow();
            let label = format!("{scope} timings (desc):");
            let Some(entries) = totals.get(&scope) else {
                eprintln!("{}", label);
                return;
            };
            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
            eprintln!("{}", label);
            for (name, (duration, count)) in entries {
                eprintln!("  {name}: {:?} ({}x)", duration, count);
            }
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    use crate::Representation;

    pub struct TimingScopeGuard;

    pub fn set_timing_scope(_scope: Representation) -> TimingScopeGuard {
        TimingScopeGuard
    }

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn method_timing(_scope: Representation, _name: &str) -> Option<(Duration, usize)> {
        None
    }

    #[doc(hidden)]
    pub fn dump_method_timings() {
        // No-op when tracing is disabled
    }

    #[doc(hidden)]
    pub fn reset_method_timings() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;

// Internal event macros.  These compile to `()` without the `tracing` feature.

#[cfg(feature = "tracing")]
macro_rules! graph_trace {
    ($($arg:tt)*) => { ::tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_trace {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! graph_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "tracing")]
macro_rules! graph_debug_span {
    ($($arg:tt)*) => { ::tracing::debug_span!($($arg)*).entered() };
}

#[cfg(not(feature = "tracing"))]
macro_rules! graph_debug_span {
    ($($arg:tt)*) => {
        ()
    };
}

pub(crate) use {graph_debug, graph_debug_span, graph_trace};
