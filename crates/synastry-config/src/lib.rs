use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use synastry::ChartSettings;

/// Relative locations tried for `configs/synastry.toml`, workspace root first.
pub const CONFIG_PATHS: [&str; 2] = ["configs/synastry.toml", "../../configs/synastry.toml"];

#[derive(Debug, Clone, Deserialize, Default)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartSettings>,
}

/// Parse settings from TOML text. Missing `[chart]` or missing keys fall
/// back to defaults.
pub fn parse_settings(text: &str) -> anyhow::Result<ChartSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse synastry.toml: {e}"))?;
    let settings = root.chart.unwrap_or_default();
    validate_settings(&settings)?;
    Ok(settings)
}

pub fn validate_settings(settings: &ChartSettings) -> anyhow::Result<()> {
    if !settings.latitude.is_finite() || settings.latitude.abs() >= 90.0 {
        anyhow::bail!(
            "chart.latitude must lie strictly between -90 and 90, got {}",
            settings.latitude
        );
    }
    if settings.max_aspects == 0 {
        anyhow::bail!("chart.max_aspects must be at least 1");
    }
    Ok(())
}

/// Load settings from an explicit file.
pub fn load_settings_from(path: &Path) -> anyhow::Result<ChartSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read config file {}", path.display()))?;
    let settings = parse_settings(&text)?;
    info!("Loaded chart settings from {}", path.display());
    Ok(settings)
}

/// Try the common relative paths; defaults when none exists.
pub fn load_settings() -> anyhow::Result<ChartSettings> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if path.exists() {
            return load_settings_from(path);
        }
    }
    debug!("No synastry.toml found in {:?}; using defaults", CONFIG_PATHS);
    Ok(ChartSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use synastry::LongitudeStrategy;

    #[test]
    fn test_empty_text_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), ChartSettings::default());
    }

    #[test]
    fn test_partial_chart_table() {
        let settings = parse_settings("[chart]\nlongitude_strategy = \"ephemeris\"\n").unwrap();
        assert_eq!(settings.longitude_strategy, LongitudeStrategy::Ephemeris);
        assert_eq!(settings.latitude, 40.0);
        assert_eq!(settings.max_aspects, 15);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_settings("[chart]\nlatitude = 95.0\n").is_err());
        assert!(parse_settings("[chart]\nmax_aspects = 0\n").is_err());
        assert!(parse_settings("[chart]\nlongitude_strategy = \"vsop\"\n").is_err());
        assert!(parse_settings("chart = [").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\nlatitude = -33.9\nmax_aspects = 10").unwrap();
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.latitude, -33.9);
        assert_eq!(settings.max_aspects, 10);
        assert_eq!(settings.longitude_strategy, LongitudeStrategy::Calendar);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_settings_from(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Could not read config file"));
    }

    #[test]
    fn test_shipped_config_parses() {
        let text = include_str!("../../../configs/synastry.toml");
        assert_eq!(parse_settings(text).unwrap(), ChartSettings::default());
    }
}
