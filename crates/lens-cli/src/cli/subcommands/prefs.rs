use clap::Subcommand;
use lens_core::{Lang, Level};

/// Reader preference management.
#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
pub enum PrefsCommands {
    /// Show stored and effective preferences.
    Get,
    /// Store a preferred language and/or reading level.
    Set {
        /// Preferred language.
        #[arg(long)]
        lang: Option<Lang>,
        /// Preferred reading level.
        #[arg(long)]
        level: Option<Level>,
    },
}
