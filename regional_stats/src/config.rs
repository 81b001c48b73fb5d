// ********* Input data structures ***********

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::Display;

/// A county as delivered by the upstream dataset, before any enrichment.
///
/// The purge percentage is kept as the raw string of the upstream API
/// (e.g. `"2.5"` for 2.5%). A missing value means that no data is available
/// for this county.
#[derive(PartialEq, Debug, Clone)]
pub struct RawCounty {
    /// The name of the county.
    pub county: String,
    pub average_total_voters: Option<f64>,
    pub dropped_voters: Option<f64>,
    pub new_voters: Option<f64>,
    pub purged_percentage: Option<String>,
}

/// A state as delivered by the upstream dataset.
#[derive(PartialEq, Debug, Clone)]
pub struct RawState {
    /// The FIPS code of the state (`"29"` for Missouri).
    pub fips: String,
    /// The postal abbreviation (`"MO"`).
    pub code: String,
    pub name: String,
    /// The counties, keyed by their FIPS code.
    pub counties: BTreeMap<String, RawCounty>,
}

/// An externally sourced rating attached to a state.
///
/// The content is opaque to this crate: only the code of the state
/// is used to join it with the dataset.
pub trait Scorecard: Clone {
    fn state_code(&self) -> &str;
}

// ******** Output data structures *********

/// Count, sum, mean and population standard deviation of one numeric field.
///
/// Missing values are not part of the population.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct SummaryStats {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub std: f64,
}

/// Maps the standard deviation offsets -2..=2 to absolute purge percentages.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ZLegend {
    pub entries: [(i32, f64); 5],
}

#[derive(PartialEq, Debug, Clone)]
pub struct RegionalStats {
    pub average_total_voters: SummaryStats,
    pub dropped_voters: SummaryStats,
    pub purged_percentage: SummaryStats,
    /// Z-score of the mean purge percentage of this region against the country.
    /// Not defined for the country itself.
    pub purged_percentage_country_z: Option<f64>,
    pub purged_percentage_z_legend: ZLegend,
}

#[derive(PartialEq, Debug, Clone)]
pub struct County {
    pub name: String,
    pub fips: String,
    pub state_fips: String,
    pub state_code: String,
    pub average_total_voters: Option<f64>,
    pub dropped_voters: Option<f64>,
    pub new_voters: Option<f64>,
    /// Fraction of purged voters (0.025 for 2.5%).
    pub purged_percentage: Option<f64>,
    pub purged_percentage_state_z: Option<f64>,
    pub purged_percentage_country_z: Option<f64>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct State<S> {
    pub code: String,
    pub fips: String,
    pub name: String,
    pub counties: Vec<County>,
    pub stats: RegionalStats,
    /// `None` when no scorecard was published for this state.
    pub scorecard: Option<S>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct EnrichedData<S> {
    pub country: RegionalStats,
    pub states: Vec<State<S>>,
    /// All the counties of all the states, in state order.
    pub counties: Vec<County>,
}

/// Errors returned by the lookups and the builder.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum StatsErrors {
    /// The record type does not have a field with this name.
    UnknownField(String),
    UnknownState(String),
    DuplicateState(String),
}

impl Error for StatsErrors {}

impl Display for StatsErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsErrors::UnknownField(name) => write!(f, "unknown field {:?}", name),
            StatsErrors::UnknownState(code) => write!(f, "unknown state {:?}", code),
            StatsErrors::DuplicateState(code) => write!(f, "state {:?} declared twice", code),
        }
    }
}
