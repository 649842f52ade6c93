use crate::pixel::ForegroundRule;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LineToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    /// Foreground rule, e.g. `{"rule": "luma_below", "threshold": 64}`.
    #[serde(default)]
    pub classify: ForegroundRule,
    #[serde(default)]
    pub mode: ScanMode,
    pub output: LineOutputConfig,
}

/// Which scanner entry point the tool runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// First line in raster order only.
    Single,
    /// Every non-overlapping line.
    #[default]
    Multi,
}

#[derive(Debug, Deserialize)]
pub struct LineOutputConfig {
    #[serde(rename = "lines_json")]
    pub lines_json: PathBuf,
    /// Optional PNG dump of the classified foreground mask.
    #[serde(default)]
    pub mask_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<LineToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub(crate) fn parse_config(data: &str) -> Result<LineToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = parse_config(r#"{"input": "a.png", "output": {"lines_json": "out/l.json"}}"#)
            .unwrap();
        assert_eq!(cfg.input, PathBuf::from("a.png"));
        assert_eq!(cfg.mode, ScanMode::Multi);
        assert_eq!(cfg.classify, ForegroundRule::ExactBlack);
        assert!(cfg.output.mask_image.is_none());
    }

    #[test]
    fn full_config_parses() {
        let cfg = parse_config(
            r#"{
                "input": "scan.bmp",
                "classify": {"rule": "luma_below", "threshold": 64},
                "mode": "single",
                "output": {"lines_json": "l.json", "mask_image": "mask.png"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.mode, ScanMode::Single);
        assert_eq!(cfg.classify, ForegroundRule::LumaBelow(64));
        assert_eq!(cfg.output.mask_image, Some(PathBuf::from("mask.png")));
    }

    #[test]
    fn missing_output_is_rejected() {
        assert!(parse_config(r#"{"input": "a.png"}"#).is_err());
    }
}
