//! Metrics command - run a search workload and report timings

use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use sfx_cli::output::{format_millis, pad};
use sfx_cli::Status;
use sfx_search::SearchQuery;
use sfx_telemetry::metrics;

/// Run `iterations` searches for `query` and print the registry
pub async fn run(ctx: &Context, query: &str, iterations: usize) -> Result<()> {
    let library = ctx.load().await?;

    {
        sfx_telemetry::timed_span!("metrics.workload", iterations);
        let search = SearchQuery::new(query);
        for _ in 0..iterations {
            let results = library.search(&search);
            metrics().gauge("search.last_result_count", results.len() as u64);
        }
        let suggestions = library.suggest(query, ctx.config.schema.search.suggestion_limit);
        metrics().gauge("search.last_suggestion_count", suggestions.len() as u64);
    }

    if ctx.is_json() {
        println!("{}", metrics().export_json());
        return Ok(());
    }

    let snapshot = metrics().snapshot();
    Status::header("Counters");
    for (name, value) in &snapshot.counters {
        println!("  {} {value}", pad(name, 28));
    }

    Status::header("Timings");
    for (name, stats) in &snapshot.histograms {
        println!(
            "  {} n={:<6} p50={:<10} p95={:<10} max={}",
            pad(name, 28),
            stats.count,
            format_millis(stats.p50),
            format_millis(stats.p95),
            format_millis(stats.max),
        );
    }

    println!();
    println!("{}", format!("session {}", sfx_telemetry::session_id()).dimmed());
    Ok(())
}
