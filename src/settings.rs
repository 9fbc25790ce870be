use anyhow::Result;
use config::Config;
use serde::Deserialize;

pub const DEFAULT_EXPORT_FILENAME: &str = "x-links";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// File stem for spreadsheet exports (`XLINKS_EXPORT_FILENAME`).
    pub export_filename: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}

/// Defaults overlaid with `XLINKS_*` environment variables.
pub fn load() -> Result<Settings> {
    let settings = Config::builder()
        .set_default("export_filename", DEFAULT_EXPORT_FILENAME)?
        .add_source(config::Environment::with_prefix("XLINKS"))
        .build()?;
    Ok(settings.try_deserialize()?)
}

// ── Tests ──
