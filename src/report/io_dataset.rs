// Readers for the documents of the public API: the dataset of states and counties,
// and the state scorecards.

use std::collections::BTreeMap;

use regional_stats::builder::Builder;
use serde::{Deserialize, Serialize};

use crate::report::io_common::{read_js_number, read_js_text};
use crate::report::*;

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PublicCounty {
    pub county: String,
    #[serde(default)]
    pub average_total_voters: Option<JSValue>,
    #[serde(default)]
    pub dropped_voters: Option<JSValue>,
    #[serde(default)]
    pub new_voters: Option<JSValue>,
    #[serde(default)]
    pub purged_percentage: Option<JSValue>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PublicState {
    /// FIPS code of the state
    pub code: String,
    pub name: String,
    /// Postal code of the state
    pub abv: String,
    pub counties: BTreeMap<String, PublicCounty>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PublicStates {
    pub states: Vec<PublicState>,
}

/// A published rating of a state. Only `state` is interpreted.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct StateScorecard {
    pub state: String,
    #[serde(default)]
    pub stars: Option<JSValue>,
    #[serde(default)]
    pub categories: Vec<JSValue>,
}

impl Scorecard for StateScorecard {
    fn state_code(&self) -> &str {
        &self.state
    }
}

fn read_county(fips: &str, pc: &PublicCounty) -> ReportResult<RawCounty> {
    Ok(RawCounty {
        county: pc.county.clone(),
        average_total_voters: read_js_number(
            &pc.average_total_voters,
            fips,
            "average_total_voters",
        )?,
        dropped_voters: read_js_number(&pc.dropped_voters, fips, "dropped_voters")?,
        new_voters: read_js_number(&pc.new_voters, fips, "new_voters")?,
        purged_percentage: read_js_text(&pc.purged_percentage, fips, "purged_percentage")?,
    })
}

pub fn parse_dataset(public: &PublicStates) -> ReportResult<Vec<RawState>> {
    let mut builder = Builder::new();
    for ps in public.states.iter() {
        builder
            .add_state(&ps.code, &ps.abv, &ps.name)
            .context(DatasetSnafu {})?;
        for (fips, pc) in ps.counties.iter() {
            let county = read_county(fips, pc)?;
            builder
                .add_county(&ps.abv, fips, &county)
                .context(DatasetSnafu {})?;
        }
        debug!(
            "parse_dataset: state {} ({}): {} counties",
            ps.abv,
            ps.code,
            ps.counties.len()
        );
    }
    Ok(builder.states().to_vec())
}

pub fn read_dataset(path: &str) -> ReportResult<Vec<RawState>> {
    info!("Attempting to read dataset {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let public: PublicStates =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    parse_dataset(&public)
}

pub fn read_scorecards(path: &str) -> ReportResult<Vec<StateScorecard>> {
    info!("Attempting to read scorecards {:?}", path);
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let scorecards: Vec<StateScorecard> =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(scorecards)
}
