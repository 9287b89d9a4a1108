//! Search and suggest commands

use super::{print_sounds, unscored};
use crate::context::Context;
use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use sfx_search::SearchQuery;

/// Flags for `sfx search`
pub struct SearchOptions {
    pub category: String,
    pub exact: bool,
    pub no_exact: bool,
    pub favorites: bool,
    pub scores: bool,
    pub limit: Option<usize>,
}

/// Ranked search
pub async fn run(ctx: &Context, query: &str, options: &SearchOptions) -> Result<()> {
    let library = ctx.load().await?;

    let exact = !options.no_exact && (options.exact || ctx.config.schema.search.exact_match);
    let search = SearchQuery::new(query)
        .in_category(options.category.as_str())
        .exact(exact);

    let mut results = library.browse_scored(&search, options.favorites);
    if let Some(limit) = options.limit {
        results.truncate(limit);
    }

    let rows: Vec<_> = results
        .iter()
        .map(|r| (r.item, options.scores.then_some(r.score)))
        .collect();

    if !ctx.is_json() && !query.trim().is_empty() {
        println!(
            "{} {} {}",
            "Results for".dimmed(),
            format!("\"{}\"", query.trim()).bold(),
            if options.favorites { "(favorites)".dimmed().to_string() } else { String::new() },
        );
        println!();
    }
    print_sounds(ctx.is_json(), &library, &rows);
    Ok(())
}

/// Typeahead suggestions
pub async fn suggest(ctx: &Context, partial: &str, limit: Option<usize>) -> Result<()> {
    let library = ctx.load().await?;
    let limit = limit.unwrap_or(ctx.config.schema.search.suggestion_limit);
    let suggestions = library.suggest(partial, limit);

    if ctx.is_json() {
        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
        let ids: Vec<u32> = suggestions.iter().map(|s| s.id).collect();
        println!("{}", json!({ "partial": partial, "ids": ids, "names": names }));
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{}", "No suggestions".dimmed());
        return Ok(());
    }

    let rows = unscored(&suggestions);
    print_sounds(false, &library, &rows);
    Ok(())
}
