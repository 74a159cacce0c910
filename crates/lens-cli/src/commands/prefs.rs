use lens_app::prefs::{LANG_KEY, LEVEL_KEY};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrefsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrefsResponse {
    store: Option<String>,
    preferred_lang: Option<String>,
    preferred_level: Option<String>,
    effective_lang: String,
    effective_level: String,
}

/// Handle `lens prefs`.
pub fn handle(action: &PrefsCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let prefs = ctx.preferences();

    if let PrefsCommands::Set { lang, level } = action {
        if lang.is_none() && level.is_none() {
            anyhow::bail!("nothing to set: pass --lang and/or --level");
        }
        if let Some(lang) = lang {
            prefs.save_lang(*lang);
        }
        if let Some(level) = level {
            prefs.save_level(*level);
        }
        tracing::info!(?lang, ?level, "preferences updated");
    }

    let response = PrefsResponse {
        store: ctx
            .config
            .preferences
            .resolved_store_path()
            .map(|path| path.display().to_string()),
        preferred_lang: prefs.get(LANG_KEY),
        preferred_level: prefs.get(LEVEL_KEY),
        effective_lang: prefs.initial_lang(&ctx.locale()).to_string(),
        effective_level: prefs.initial_level().to_string(),
    };
    output(&response, flags.format)
}
