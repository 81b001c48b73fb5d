//! Read-only lookup views over an enriched dataset.

use std::rc::Rc;

use crate::config::*;
use crate::indexed::IndexedCollection;

/// The enriched states and counties wrapped in indexed collections.
pub struct IndexedDataset<S> {
    pub country: RegionalStats,
    pub states: IndexedCollection<State<S>>,
    pub counties: IndexedCollection<County>,
}

impl<S: Clone> IndexedDataset<S> {
    pub fn new(data: EnrichedData<S>) -> IndexedDataset<S> {
        IndexedDataset {
            country: data.country,
            states: IndexedCollection::new(data.states),
            counties: IndexedCollection::new(data.counties),
        }
    }

    /// The state with the given postal code.
    pub fn state(&self, code: &str) -> Result<Option<&State<S>>, StatsErrors> {
        self.states.find_one("code", code)
    }

    /// All the counties of a state, in dataset order.
    pub fn counties_of(
        &self,
        state_code: &str,
    ) -> Result<Rc<IndexedCollection<County>>, StatsErrors> {
        self.counties.find_many("state_code", state_code)
    }

    /// The county with the given name within a state.
    pub fn county(&self, state_code: &str, name: &str) -> Result<Option<County>, StatsErrors> {
        let counties = self.counties_of(state_code)?;
        let found = counties.find_one("name", name)?.cloned();
        Ok(found)
    }
}

impl<S: Clone> From<EnrichedData<S>> for IndexedDataset<S> {
    fn from(data: EnrichedData<S>) -> Self {
        IndexedDataset::new(data)
    }
}
