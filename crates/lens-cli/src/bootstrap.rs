use anyhow::Context;
use lens_config::LensConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LensConfig> {
    let mut config = LensConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags);
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;
    Ok(config)
}

fn apply_overrides(config: &mut LensConfig, flags: &GlobalFlags) {
    if let Some(data_dir) = &flags.data_dir {
        config.content.data_dir.clone_from(data_dir);
    }
    if let Some(base_url) = &flags.base_url {
        config.content.base_url.clone_from(base_url);
    }
}
