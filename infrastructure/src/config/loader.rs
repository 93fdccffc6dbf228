//! Settings loader with multi-source merging

use super::settings::{CensusSettings, SettingsOverrides};
use figment::{
    Figment,
    providers::{Env, Serialized},
};

/// Prefix of the environment variables read by [`SettingsLoader`]
pub const ENV_PREFIX: &str = "OLLAMA_CENSUS_";

/// Resolves [`CensusSettings`] from all sources
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit command-line overrides
    /// 2. `OLLAMA_CENSUS_*` environment variables (e.g. `OLLAMA_CENSUS_TIMEOUT_SECS`)
    /// 3. Default values
    pub fn load(overrides: &SettingsOverrides) -> Result<CensusSettings, Box<figment::Error>> {
        Self::figment(overrides).extract().map_err(Box::new)
    }

    fn figment(overrides: &SettingsOverrides) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(CensusSettings::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
    }
}
