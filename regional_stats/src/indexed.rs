use log::debug;

use std::{
    cell::RefCell,
    collections::HashMap,
    ops::Deref,
    rc::Rc,
};

use crate::config::*;

/// A record with named fields that can be looked up by their textual value.
pub trait Record {
    /// All the field names accepted by `field_value`.
    const FIELDS: &'static [&'static str];

    /// The value of a field rendered as text, or `None` if the field does not exist.
    /// Missing values are rendered as `"null"`.
    fn field_value(&self, field: &str) -> Option<String>;
}

fn render(x: Option<f64>) -> String {
    match x {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

impl Record for County {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "fips",
        "state_fips",
        "state_code",
        "average_total_voters",
        "dropped_voters",
        "new_voters",
        "purged_percentage",
        "purged_percentage_state_z",
        "purged_percentage_country_z",
    ];

    fn field_value(&self, field: &str) -> Option<String> {
        let v = match field {
            "name" => self.name.clone(),
            "fips" => self.fips.clone(),
            "state_fips" => self.state_fips.clone(),
            "state_code" => self.state_code.clone(),
            "average_total_voters" => render(self.average_total_voters),
            "dropped_voters" => render(self.dropped_voters),
            "new_voters" => render(self.new_voters),
            "purged_percentage" => render(self.purged_percentage),
            "purged_percentage_state_z" => render(self.purged_percentage_state_z),
            "purged_percentage_country_z" => render(self.purged_percentage_country_z),
            _ => return None,
        };
        Some(v)
    }
}

impl<S> Record for State<S> {
    const FIELDS: &'static [&'static str] = &["code", "fips", "name"];

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "code" => Some(self.code.clone()),
            "fips" => Some(self.fips.clone()),
            "name" => Some(self.name.clone()),
            _ => None,
        }
    }
}

// Rendered value -> positions in the collection, in increasing order.
type FieldIndex = HashMap<String, Vec<usize>>;

/// An immutable sequence of records with lazily built lookup indexes.
///
/// The first lookup on a field scans the whole sequence once and caches an
/// index for that field. There is no way to add or remove records after
/// construction, so the cached indexes never go stale.
///
/// The caches use interior mutability: a collection is meant to be used by a
/// single thread.
///
/// ```
/// use regional_stats::IndexedCollection;
/// # use regional_stats::StatsErrors;
/// # use regional_stats::County;
/// # let county = |name: &str, state: &str| County {
/// #     name: name.to_string(), fips: String::new(), state_fips: String::new(),
/// #     state_code: state.to_string(), average_total_voters: None, dropped_voters: None,
/// #     new_voters: None, purged_percentage: None, purged_percentage_state_z: None,
/// #     purged_percentage_country_z: None,
/// # };
///
/// let coll = IndexedCollection::new(vec![county("Adair", "MO"), county("Allen", "KS")]);
/// assert_eq!(coll.find_one("state_code", "KS")?.map(|c| c.name.as_str()), Some("Allen"));
/// assert_eq!(coll.find_many("state_code", "MO")?.len(), 1);
/// assert!(coll.find_one("population", "1").is_err());
/// # Ok::<(), StatsErrors>(())
/// ```
#[derive(Debug)]
pub struct IndexedCollection<T> {
    records: Vec<T>,
    indexes: RefCell<HashMap<String, Rc<FieldIndex>>>,
    views: RefCell<HashMap<(String, String), Rc<IndexedCollection<T>>>>,
}

impl<T: Record> IndexedCollection<T> {
    pub fn new(records: Vec<T>) -> IndexedCollection<T> {
        IndexedCollection {
            records,
            indexes: RefCell::new(HashMap::new()),
            views: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the first record (in the original order) for which `field` renders as `value`.
    pub fn find_one<V: ToString>(&self, field: &str, value: V) -> Result<Option<&T>, StatsErrors> {
        let index = self.index(field)?;
        let pos = index
            .get(value.to_string().as_str())
            .and_then(|positions| positions.first());
        Ok(pos.map(|p| &self.records[*p]))
    }

    /// Returns all the records for which `field` renders as `value`, in the original order.
    ///
    /// The result is memoized: asking twice for the same field and value returns the
    /// same collection, with its own indexes.
    pub fn find_many<V: ToString>(
        &self,
        field: &str,
        value: V,
    ) -> Result<Rc<IndexedCollection<T>>, StatsErrors>
    where
        T: Clone,
    {
        let index = self.index(field)?;
        let key = (field.to_string(), value.to_string());
        if let Some(view) = self.views.borrow().get(&key) {
            return Ok(view.clone());
        }
        let matching: Vec<T> = index
            .get(key.1.as_str())
            .map(|positions| positions.iter().map(|p| self.records[*p].clone()).collect())
            .unwrap_or_default();
        let view = Rc::new(IndexedCollection::new(matching));
        self.views.borrow_mut().insert(key, view.clone());
        Ok(view)
    }

    /// The fields for which an index has been built so far.
    pub fn indexed_fields(&self) -> Vec<String> {
        let mut fields: Vec<String> = self.indexes.borrow().keys().cloned().collect();
        fields.sort();
        fields
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    fn index(&self, field: &str) -> Result<Rc<FieldIndex>, StatsErrors> {
        if let Some(index) = self.indexes.borrow().get(field) {
            return Ok(index.clone());
        }
        if !T::FIELDS.contains(&field) {
            return Err(StatsErrors::UnknownField(field.to_string()));
        }
        let mut index: FieldIndex = HashMap::new();
        for (pos, record) in self.records.iter().enumerate() {
            let key = record
                .field_value(field)
                .ok_or_else(|| StatsErrors::UnknownField(field.to_string()))?;
            index.entry(key).or_default().push(pos);
        }
        debug!(
            "index: built index on {:?}: {} records, {} distinct values",
            field,
            self.records.len(),
            index.len()
        );
        let index = Rc::new(index);
        self.indexes
            .borrow_mut()
            .insert(field.to_string(), index.clone());
        Ok(index)
    }
}

impl<T: Record> From<Vec<T>> for IndexedCollection<T> {
    fn from(records: Vec<T>) -> Self {
        IndexedCollection::new(records)
    }
}

impl<T: Record> FromIterator<T> for IndexedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IndexedCollection::new(iter.into_iter().collect())
    }
}

impl<T> Deref for IndexedCollection<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

impl<'a, T> IntoIterator for &'a IndexedCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(PartialEq, Debug, Clone)]
    struct Row {
        id: u32,
        tag: Option<String>,
    }

    impl Record for Row {
        const FIELDS: &'static [&'static str] = &["id", "tag"];

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "id" => Some(self.id.to_string()),
                "tag" => Some(self.tag.clone().unwrap_or_else(|| "null".to_string())),
                _ => None,
            }
        }
    }

    fn row(id: u32, tag: Option<&str>) -> Row {
        Row {
            id,
            tag: tag.map(|s| s.to_string()),
        }
    }

    fn rows() -> IndexedCollection<Row> {
        IndexedCollection::new(vec![
            row(1, Some("a")),
            row(2, Some("b")),
            row(3, Some("a")),
            row(4, None),
            row(5, Some("a")),
        ])
    }

    #[test]
    fn find_one_returns_the_first_match() {
        let coll = rows();
        assert_eq!(coll.find_one("tag", "a").unwrap(), Some(&row(1, Some("a"))));
        assert_eq!(coll.find_one("id", 4).unwrap(), Some(&row(4, None)));
        assert_eq!(coll.find_one("tag", "z").unwrap(), None);
    }

    #[test]
    fn find_one_matches_a_linear_scan() {
        let coll = rows();
        for needle in ["a", "b", "null", "c"] {
            let expected = coll
                .iter()
                .find(|r| r.field_value("tag").unwrap() == needle);
            assert_eq!(coll.find_one("tag", needle).unwrap(), expected);
        }
    }

    #[test]
    fn missing_values_render_as_null() {
        let coll = rows();
        assert_eq!(coll.find_one("tag", "null").unwrap().map(|r| r.id), Some(4));
    }

    #[test]
    fn indexes_are_built_lazily() {
        let coll = rows();
        assert!(coll.indexed_fields().is_empty());
        coll.find_one("id", 2).unwrap();
        assert_eq!(coll.indexed_fields(), vec!["id".to_string()]);
        coll.find_one("id", 3).unwrap();
        coll.find_many("tag", "b").unwrap();
        assert_eq!(
            coll.indexed_fields(),
            vec!["id".to_string(), "tag".to_string()]
        );
    }

    #[test]
    fn find_many_keeps_the_original_order() {
        let coll = rows();
        let view = coll.find_many("tag", "a").unwrap();
        let ids: Vec<u32> = view.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert!(coll.find_many("tag", "c").unwrap().is_empty());
    }

    #[test]
    fn find_many_is_memoized() {
        let coll = rows();
        let first = coll.find_many("tag", "a").unwrap();
        let second = coll.find_many("tag", "a").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn views_have_their_own_indexes() {
        let coll = rows();
        let view = coll.find_many("tag", "a").unwrap();
        assert!(view.indexed_fields().is_empty());
        assert_eq!(view.find_one("id", 5).unwrap().map(|r| r.id), Some(5));
        assert_eq!(view.find_one("id", 2).unwrap(), None);
        assert_eq!(view.indexed_fields(), vec!["id".to_string()]);
        assert_eq!(coll.indexed_fields(), vec!["tag".to_string()]);
    }

    #[test]
    fn unknown_field_is_an_error() {
        let coll = rows();
        assert_eq!(
            coll.find_one("size", "a"),
            Err(StatsErrors::UnknownField("size".to_string()))
        );
        assert!(coll.find_many("size", "a").is_err());
        let empty: IndexedCollection<Row> = IndexedCollection::new(vec![]);
        assert!(empty.find_one("size", "a").is_err());
        assert_eq!(empty.find_one("id", 1).unwrap(), None);
    }

    #[test]
    fn positional_access() {
        let coll: IndexedCollection<Row> = (1..4).map(|i| row(i, None)).collect();
        assert_eq!(coll.len(), 3);
        assert_eq!(coll[1].id, 2);
        assert_eq!(coll.get(3), None);
        let ids: Vec<u32> = (&coll).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn county_fields_render_like_numbers() {
        let county = County {
            name: "Adair".to_string(),
            fips: "29001".to_string(),
            state_fips: "29".to_string(),
            state_code: "MO".to_string(),
            average_total_voters: Some(15000.0),
            dropped_voters: None,
            new_voters: Some(12.5),
            purged_percentage: Some(0.025),
            purged_percentage_state_z: Some(f64::NAN),
            purged_percentage_country_z: None,
        };
        assert_eq!(county.field_value("average_total_voters").unwrap(), "15000");
        assert_eq!(county.field_value("dropped_voters").unwrap(), "null");
        assert_eq!(county.field_value("new_voters").unwrap(), "12.5");
        assert_eq!(county.field_value("purged_percentage").unwrap(), "0.025");
        assert_eq!(county.field_value("purged_percentage_state_z").unwrap(), "NaN");
        assert_eq!(county.field_value("county"), None);
        for f in County::FIELDS {
            assert!(county.field_value(f).is_some());
        }
    }
}
