use anyhow::Context;
use lens_client::ContentSource;
use lens_core::IndexEntry;
use lens_render::index_view;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SearchResponse<'a> {
    query: &'a str,
    count: String,
    papers: Vec<&'a IndexEntry>,
}

/// Handle `lens search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let index = ctx
        .source()?
        .fetch_index()
        .await
        .context("failed to load paper index")?;

    let query = args.query.as_deref().unwrap_or_default();
    let limit = args.limit.unwrap_or(ctx.config.general.default_limit);
    let response = search(&index.papers, query, limit as usize);
    output(&response, flags.format)
}

fn search<'a>(entries: &'a [IndexEntry], query: &'a str, limit: usize) -> SearchResponse<'a> {
    let matched = index_view::filter(entries, query);
    SearchResponse {
        query,
        count: index_view::count_label(matched.len(), entries.len()),
        papers: matched.into_iter().take(limit).collect(),
    }
}
