use std::path::Path;

use anyhow::Context;
use lens_app::Preferences;
use lens_render::View;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RenderResponse {
    path: String,
    view: &'static str,
    lang: String,
    level: String,
    count: String,
    out: String,
    bytes: usize,
}

/// Handle `lens render`.
///
/// Stored preferences seed the page; `--lang` / `--level` apply to this render
/// only and are never written back.
pub async fn handle(args: &RenderArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stored = ctx.preferences();
    let prefs = Preferences::in_memory();
    if let Some(lang) = args.lang.or_else(|| stored.stored_lang()) {
        prefs.save_lang(lang);
    }
    if let Some(level) = args.level.or_else(|| stored.stored_level()) {
        prefs.save_level(level);
    }

    let router = ctx.router(&args.path, prefs)?;
    if let Some(text) = &args.search {
        router.search(text);
    }
    router.route().await;

    let page = router.page();
    let html = page.to_html();

    let Some(out) = &args.out else {
        println!("{html}");
        return Ok(());
    };

    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out_path, &html)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!(path = %router.current_path(), out = %out_path.display(), "page written");

    let response = RenderResponse {
        path: router.current_path(),
        view: match page.view() {
            View::Index => "index",
            View::Paper => "paper",
        },
        lang: page.lang().to_string(),
        level: page.level().to_string(),
        count: page.count_label().to_string(),
        out: out_path.display().to_string(),
        bytes: html.len(),
    };
    output(&response, flags.format)
}
