pub use crate::config::*;
use std::collections::BTreeMap;

/// A builder for assembling the raw states and counties of a dataset.
///
/// States keep the order in which they are declared. Counties are ordered by
/// their FIPS code within each state.
///
/// ```
/// pub use regional_stats::builder::Builder;
/// # use regional_stats::{Scorecard, StatsErrors};
/// # #[derive(Clone)]
/// # struct NoCard;
/// # impl Scorecard for NoCard { fn state_code(&self) -> &str { "" } }
///
/// let mut builder = Builder::new();
/// builder.add_state("29", "MO", "Missouri")?;
/// builder.add_county_simple("MO", "29001", "Adair", Some("2.5"))?;
/// builder.add_county_simple("MO", "29003", "Andrew", Some("1.5"))?;
///
/// let data = builder.enrich::<NoCard>(&[]);
/// assert_eq!(data.states[0].stats.purged_percentage.count, 2);
/// assert!(data.states[0].scorecard.is_none());
///
/// # Ok::<(), StatsErrors>(())
/// ```
#[derive(Default)]
pub struct Builder {
    pub(crate) _states: Vec<RawState>,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            _states: Vec::new(),
        }
    }

    /// Declares a state. The code must be unique.
    pub fn add_state(&mut self, fips: &str, code: &str, name: &str) -> Result<(), StatsErrors> {
        if self._states.iter().any(|s| s.code == code) {
            return Err(StatsErrors::DuplicateState(code.to_string()));
        }
        self._states.push(RawState {
            fips: fips.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            counties: BTreeMap::new(),
        });
        Ok(())
    }

    /// Adds a county with only a name and a purge percentage.
    pub fn add_county_simple(
        &mut self,
        state_code: &str,
        fips: &str,
        name: &str,
        purged_percentage: Option<&str>,
    ) -> Result<(), StatsErrors> {
        self.add_county(
            state_code,
            fips,
            &RawCounty {
                county: name.to_string(),
                average_total_voters: None,
                dropped_voters: None,
                new_voters: None,
                purged_percentage: purged_percentage.map(|s| s.to_string()),
            },
        )
    }

    /// Adds a county to a state that was already declared.
    ///
    /// A county with the same FIPS code replaces the previous one.
    pub fn add_county(
        &mut self,
        state_code: &str,
        fips: &str,
        county: &RawCounty,
    ) -> Result<(), StatsErrors> {
        let state = self
            ._states
            .iter_mut()
            .find(|s| s.code == state_code)
            .ok_or_else(|| StatsErrors::UnknownState(state_code.to_string()))?;
        state.counties.insert(fips.to_string(), county.clone());
        Ok(())
    }

    pub fn states(&self) -> &[RawState] {
        &self._states
    }

    pub fn enrich<S: Scorecard>(&self, scorecards: &[S]) -> EnrichedData<S> {
        crate::enrich(&self._states, scorecards)
    }
}
