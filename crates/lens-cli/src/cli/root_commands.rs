use clap::{Args, Subcommand};
use lens_core::{Lang, Level};

use crate::cli::subcommands::PrefsCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Route to a path and print the rendered page.
    Render(RenderArgs),
    /// Search the paper index.
    Search(SearchArgs),
    /// Scaffold a new paper and add it to the index.
    Add(AddArgs),
    /// Inspect or change stored reader preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// URL path to render (`/` or `/<slug>`).
    #[arg(default_value = "/")]
    pub path: String,
    /// Search text applied to the index list.
    #[arg(long)]
    pub search: Option<String>,
    /// Language for this render (not persisted).
    #[arg(long)]
    pub lang: Option<Lang>,
    /// Reading level for this render (not persisted).
    #[arg(long)]
    pub level: Option<Level>,
    /// Write the page to a file instead of stdout.
    #[arg(long)]
    pub out: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Search text; empty lists every paper.
    pub query: Option<String>,
    /// Max results to print (defaults to `general.default_limit`).
    #[arg(short, long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// English title.
    #[arg(long)]
    pub title_en: String,
    /// Chinese title.
    #[arg(long)]
    pub title_zh: String,
    /// Slug (derived from the English title when omitted).
    #[arg(long)]
    pub slug: Option<String>,
    /// arXiv identifier.
    #[arg(long)]
    pub arxiv: Option<String>,
}
