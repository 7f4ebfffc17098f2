//! Span timing for the search and move generation entry points.
//!
//! Enabled with `--features instrumentation`. Spans are only compiled in with the
//! feature, so regular builds pay nothing.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;
use tracing::span;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Span name -> (calls, total nanoseconds).
static TIMING_DATA: Lazy<Mutex<HashMap<String, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let start = match span.extensions_mut().remove::<Instant>() {
            Some(start) => start,
            None => return,
        };

        let elapsed = start.elapsed().as_nanos() as u64;
        if let Ok(mut data) = TIMING_DATA.lock() {
            let entry = data.entry(span.name().to_string()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += elapsed;
        }
    }
}

/// Installs the timing layer as the global subscriber.
///
/// With `RUST_LOG` unset or `off`, spans are timed silently. Any other value also
/// prints span events filtered by `RUST_LOG`.
pub fn init_tracing() -> Result<(), SetGlobalDefaultError> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_default();

    if env_filter.is_empty() || env_filter == "off" {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    }
}

/// Prints calls, total and average time per span, slowest first.
pub fn print_timing_statistics() {
    let mut entries: Vec<(String, (u64, u64))> = match TIMING_DATA.lock() {
        Ok(data) => data.iter().map(|(name, stats)| (name.clone(), *stats)).collect(),
        Err(_) => return,
    };

    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Function", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");
    for (name, (count, total_nanos)) in &entries {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            count,
            *total_nanos as f64 / 1_000_000.0,
            *total_nanos as f64 / *count as f64 / 1_000.0
        );
    }
    eprintln!("{:-<72}", "");
}
