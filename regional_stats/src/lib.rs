mod config;
mod indexed;
mod stats;

pub mod builder;
pub mod dataset;
pub mod manual;
pub mod quick_start;

use log::{debug, info, warn};

pub use crate::config::*;
pub use crate::dataset::IndexedDataset;
pub use crate::indexed::{IndexedCollection, Record};

/// Computes the statistics of the counties of every state and of the whole country,
/// and annotates each county and state with its z-scores.
///
/// Arguments:
/// * `raw_states` the states of the upstream dataset, in the order in which they
/// should be returned
/// * `scorecards` the published scorecards. A state without scorecard gets `None`.
///
/// The computation is deterministic: the same input always gives the same output.
/// Regions with a zero standard deviation produce NaN (or infinite) z-scores.
pub fn enrich<S: Scorecard>(raw_states: &[RawState], scorecards: &[S]) -> EnrichedData<S> {
    info!(
        "Processing {:?} states, {:?} scorecards",
        raw_states.len(),
        scorecards.len()
    );

    let mut states: Vec<State<S>> = Vec::new();
    for raw in raw_states.iter() {
        let counties = flatten_counties(raw);
        let stats = regional_stats(&counties);
        debug!(
            "enrich: state {}: {} counties, purged_percentage: {:?}",
            raw.code,
            counties.len(),
            stats.purged_percentage
        );
        let scorecard = scorecards
            .iter()
            .find(|sc| sc.state_code() == raw.code)
            .cloned();
        if scorecard.is_none() {
            debug!("enrich: no scorecard for state {}", raw.code);
        }
        states.push(State {
            code: raw.code.clone(),
            fips: raw.fips.clone(),
            name: raw.name.clone(),
            counties,
            stats,
            scorecard,
        });
    }

    let country = {
        let all: Vec<County> = states
            .iter()
            .flat_map(|s| s.counties.iter().cloned())
            .collect();
        regional_stats(&all)
    };
    info!(
        "Country: {} counties, purged_percentage: {:?}",
        country.purged_percentage.count, country.purged_percentage
    );

    let country_pp = country.purged_percentage;
    for state in states.iter_mut() {
        let state_pp = state.stats.purged_percentage;
        state.stats.purged_percentage_country_z = Some(country_pp.z_score(state_pp.mean));
        for county in state.counties.iter_mut() {
            county.purged_percentage_state_z = county.purged_percentage.map(|p| state_pp.z_score(p));
            county.purged_percentage_country_z =
                county.purged_percentage.map(|p| country_pp.z_score(p));
        }
    }

    let counties: Vec<County> = states
        .iter()
        .flat_map(|s| s.counties.iter().cloned())
        .collect();

    EnrichedData {
        country,
        states,
        counties,
    }
}

fn flatten_counties(raw: &RawState) -> Vec<County> {
    raw.counties
        .iter()
        .map(|(fips, rc)| County {
            name: rc.county.clone(),
            fips: fips.clone(),
            state_fips: raw.fips.clone(),
            state_code: raw.code.clone(),
            average_total_voters: rc.average_total_voters,
            dropped_voters: rc.dropped_voters,
            new_voters: rc.new_voters,
            purged_percentage: rc
                .purged_percentage
                .as_deref()
                .map(|s| parse_percentage(s, fips)),
            purged_percentage_state_z: None,
            purged_percentage_country_z: None,
        })
        .collect()
}

// "2.5" -> 0.025. Text that is not a number becomes NaN, as the upstream data is not validated.
fn parse_percentage(s: &str, fips: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(x) => x / 100.0,
        Err(_) => {
            warn!(
                "parse_percentage: county {}: purged_percentage {:?} is not a number",
                fips, s
            );
            f64::NAN
        }
    }
}

fn regional_stats(counties: &[County]) -> RegionalStats {
    let purged_percentage =
        SummaryStats::from_values(counties.iter().map(|c| c.purged_percentage));
    RegionalStats {
        average_total_voters: SummaryStats::from_values(
            counties.iter().map(|c| c.average_total_voters),
        ),
        dropped_voters: SummaryStats::from_values(counties.iter().map(|c| c.dropped_voters)),
        purged_percentage,
        purged_percentage_country_z: None,
        purged_percentage_z_legend: ZLegend::from_stats(&purged_percentage),
    }
}
