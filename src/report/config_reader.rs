use crate::report::*;

use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub title: String,
    #[serde(rename = "snapshotDate")]
    pub snapshot_date: Option<String>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
}

/// The description of the report that is written in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub title: String,
    pub date: Option<String>,
}

impl OutputConfig {
    pub fn from_settings(settings: &OutputSettings) -> OutputConfig {
        OutputConfig {
            title: settings.title.clone(),
            date: settings.snapshot_date.clone(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            title: "Voter purge statistics".to_string(),
            date: None,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(rename = "outputSettings")]
    pub output_settings: OutputSettings,
    #[serde(rename = "datasetPath")]
    pub dataset_path: String,
    #[serde(rename = "scorecardPath")]
    pub scorecard_path: Option<String>,
}

pub fn read_config(path: &str) -> ReportResult<ReportConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: ReportConfig =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    info!("config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> ReportResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    debug!("read summary from {:?}", path);
    Ok(js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let js = r#"{
            "outputSettings": { "title": "Purges", "snapshotDate": "2024-01-01" },
            "datasetPath": "us_dataset.json"
        }"#;
        let config: ReportConfig = serde_json::from_str(js).unwrap();
        assert_eq!(config.dataset_path, "us_dataset.json");
        assert_eq!(config.scorecard_path, None);
        assert_eq!(config.output_settings.output_file, None);
        let oc = OutputConfig::from_settings(&config.output_settings);
        assert_eq!(oc.title, "Purges");
        assert_eq!(oc.date, Some("2024-01-01".to_string()));
    }

    #[test]
    fn missing_config_file() {
        let res = read_config("/nonexistent/vpstats_config.json");
        assert!(matches!(res, Err(ReportError::OpeningJson { .. })));
    }
}
