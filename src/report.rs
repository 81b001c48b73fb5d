use log::{debug, info, warn};

use regional_stats::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::report::config_reader::*;
use crate::report::io_dataset::*;

pub mod config_reader;
mod io_common;
mod io_dataset;

#[derive(Debug, Snafu)]
pub enum ReportError {
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing the JSON content of {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error rendering the summary"))]
    WritingJson { source: serde_json::Error },
    #[snafu(display("Error writing file {path}"))]
    WritingFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("County {fips}: field {field} is not a number: {value}"))]
    ParsingJsonNumber {
        fips: String,
        field: String,
        value: String,
    },
    #[snafu(display("Configuration file {path} has no parent directory"))]
    MissingParentDir { path: String },
    #[snafu(display("No dataset given: use --input or a configuration file"))]
    MissingDataset {},
    #[snafu(display("Invalid dataset or lookup"))]
    Dataset { source: StatsErrors },
    #[snafu(display("Unknown state {code}"))]
    UnknownState { code: String },
    #[snafu(display("Unknown county {name} in state {code}"))]
    UnknownCounty { code: String, name: String },
    #[snafu(display("Option --county requires --state"))]
    CountyWithoutState {},
    #[snafu(display("Difference detected between calculated summary and reference summary"))]
    ReferenceMismatch {},
}

type ReportResult<T> = Result<T, ReportError>;

// Non-finite numbers (NaN z-scores) are rendered as null by serde_json.
fn summary_stats_to_json(s: &SummaryStats) -> JSValue {
    json!({
        "count": s.count,
        "sum": s.sum,
        "mean": s.mean,
        "std": s.std,
    })
}

fn z_legend_to_json(legend: &ZLegend) -> JSValue {
    let mut m: JSMap<String, JSValue> = JSMap::new();
    for (offset, value) in legend.entries.iter() {
        m.insert(offset.to_string(), json!(value));
    }
    JSValue::Object(m)
}

fn regional_stats_to_json(rs: &RegionalStats) -> JSValue {
    let mut m: JSMap<String, JSValue> = JSMap::new();
    m.insert(
        "average_total_voters".to_string(),
        summary_stats_to_json(&rs.average_total_voters),
    );
    m.insert(
        "dropped_voters".to_string(),
        summary_stats_to_json(&rs.dropped_voters),
    );
    m.insert(
        "purged_percentage".to_string(),
        summary_stats_to_json(&rs.purged_percentage),
    );
    m.insert(
        "purged_percentage_z_legend".to_string(),
        z_legend_to_json(&rs.purged_percentage_z_legend),
    );
    if let Some(z) = rs.purged_percentage_country_z {
        m.insert("purged_percentage_country_z".to_string(), json!(z));
    }
    JSValue::Object(m)
}

fn county_to_json(c: &County) -> JSValue {
    json!({
        "name": c.name,
        "fips": c.fips,
        "stateFips": c.state_fips,
        "stateCode": c.state_code,
        "average_total_voters": c.average_total_voters,
        "dropped_voters": c.dropped_voters,
        "new_voters": c.new_voters,
        "purged_percentage": c.purged_percentage,
        "purged_percentage_state_z": c.purged_percentage_state_z,
        "purged_percentage_country_z": c.purged_percentage_country_z,
    })
}

fn state_to_json(s: &State<StateScorecard>) -> JSValue {
    let counties: Vec<JSValue> = s.counties.iter().map(county_to_json).collect();
    json!({
        "code": s.code,
        "fips": s.fips,
        "name": s.name,
        "stats": regional_stats_to_json(&s.stats),
        "scorecard": s.scorecard,
        "counties": counties,
    })
}

fn build_summary_js(config: &OutputConfig, ds: &IndexedDataset<StateScorecard>) -> JSValue {
    let states: Vec<JSValue> = ds.states.iter().map(state_to_json).collect();
    let counties: Vec<JSValue> = ds.counties.iter().map(county_to_json).collect();
    json!({
        "config": config,
        "country": regional_stats_to_json(&ds.country),
        "states": states,
        "counties": counties,
    })
}

fn build_focus_js(
    config: &OutputConfig,
    ds: &IndexedDataset<StateScorecard>,
    state_code: &str,
    county_name: Option<&str>,
) -> ReportResult<JSValue> {
    let state = ds
        .state(state_code)
        .context(DatasetSnafu {})?
        .context(UnknownStateSnafu { code: state_code })?;
    let mut js = json!({
        "config": config,
        "country": regional_stats_to_json(&ds.country),
        "state": state_to_json(state),
    });
    if let Some(name) = county_name {
        let county = ds
            .county(state_code, name)
            .context(DatasetSnafu {})?
            .context(UnknownCountySnafu {
                code: state_code,
                name,
            })?;
        js["county"] = county_to_json(&county);
    }
    Ok(js)
}

fn resolve(root: Option<&Path>, path: &str) -> String {
    match root {
        Some(r) => {
            let p: PathBuf = [r, Path::new(path)].iter().collect();
            p.display().to_string()
        }
        None => path.to_string(),
    }
}

fn write_output(destination: Option<&str>, content: &str) -> ReportResult<()> {
    match destination {
        None | Some("stdout") => {
            println!("{}", content);
        }
        Some(path) => {
            info!("Writing summary to {:?}", path);
            fs::write(path, content).context(WritingFileSnafu { path })?;
        }
    }
    Ok(())
}

pub fn run_report(args: &Args) -> ReportResult<()> {
    let config: Option<ReportConfig> = match &args.config {
        Some(path) => Some(read_config(path)?),
        None => None,
    };
    debug!("config: {:?}", config);

    let root_p: Option<&Path> = match &args.config {
        Some(path) => Some(
            Path::new(path.as_str())
                .parent()
                .context(MissingParentDirSnafu { path: path.clone() })?,
        ),
        None => None,
    };

    let dataset_path = match (&args.input, &config) {
        (Some(p), _) => p.clone(),
        (None, Some(c)) => resolve(root_p, &c.dataset_path),
        (None, None) => return MissingDatasetSnafu {}.fail(),
    };
    let scorecard_path = match (&args.scorecards, &config) {
        (Some(p), _) => Some(p.clone()),
        (None, Some(c)) => c.scorecard_path.as_ref().map(|p| resolve(root_p, p)),
        (None, None) => None,
    };

    let raw_states = read_dataset(&dataset_path)?;
    let scorecards = match &scorecard_path {
        Some(p) => read_scorecards(p)?,
        None => {
            warn!("No scorecards given, all the states will be reported without scorecard");
            Vec::new()
        }
    };

    let ds = IndexedDataset::new(enrich(&raw_states, &scorecards));
    info!(
        "Enriched {} states and {} counties",
        ds.states.len(),
        ds.counties.len()
    );

    let output_config = match &config {
        Some(c) => OutputConfig::from_settings(&c.output_settings),
        None => OutputConfig::default(),
    };

    let result_js = match (&args.state, &args.county) {
        (Some(code), county) => build_focus_js(&output_config, &ds, code, county.as_deref())?,
        (None, Some(_)) => return CountyWithoutStateSnafu {}.fail(),
        (None, None) => build_summary_js(&output_config, &ds),
    };

    let pretty_js_stats = serde_json::to_string_pretty(&result_js).context(WritingJsonSnafu {})?;

    let out_path: Option<String> = match (&args.out, &config) {
        (Some(p), _) => Some(p.clone()),
        (None, Some(c)) => c
            .output_settings
            .output_file
            .as_ref()
            .map(|p| resolve(root_p, p)),
        (None, None) => None,
    };
    write_output(out_path.as_deref(), &pretty_js_stats)?;

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(WritingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference string");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            return ReferenceMismatchSnafu {}.fail();
        }
    }

    Ok(())
}

#[cfg(test)]
fn test_dir(test_name: &str) -> String {
    format!("{}/testdata/{}", env!("CARGO_MANIFEST_DIR"), test_name)
}

#[cfg(test)]
fn run_report_test(args: &Args) {
    let res = run_report(args);
    if let Err(e) = &res {
        eprintln!("An error occured {}", e);
    }
    assert!(res.is_ok(), "report failed: {:?}", res);
}

#[cfg(test)]
pub fn test_wrapper(test_name: &str) {
    let dir = test_dir(test_name);
    run_report_test(&Args {
        config: Some(format!("{}/{}_config.json", dir, test_name)),
        reference: Some(format!("{}/{}_expected_summary.json", dir, test_name)),
        out: Some("stdout".to_string()),
        ..Args::default()
    });
}
