//! Observation.
use crate::error::SarError;
use anyhow::Result;
use ndarray::ArrayD;
use std::collections::{btree_map, BTreeMap};

/// Sensor readings of an environment step, keyed by field name (e.g. `depth`, `grayscale`).
///
/// Fields are kept in key order, which is also the order used by [`Observation::flatten`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation(BTreeMap<String, ArrayD<f32>>);

impl Observation {
    /// Creates an empty observation.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a field, replacing an existing field with the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: ArrayD<f32>) {
        self.0.insert(key.into(), value);
    }

    /// Returns the array of a field.
    pub fn get(&self, key: &str) -> Option<&ArrayD<f32>> {
        self.0.get(key)
    }

    /// Field names in key order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, ArrayD<f32>> {
        self.0.keys()
    }

    /// Iterates over fields in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ArrayD<f32>> {
        self.0.iter()
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there is no field.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenates fields into a flat vector.
    ///
    /// If `fields` is `None`, all fields are used in key order. Otherwise the given
    /// fields are used in key order and a missing field is an error.
    pub fn flatten(&self, fields: Option<&[String]>) -> Result<Vec<f32>> {
        let mut v = vec![];
        match fields {
            None => self.0.values().for_each(|a| v.extend(a.iter())),
            Some(fields) => {
                let mut fields = fields.to_vec();
                fields.sort();
                for key in fields.iter() {
                    let a = self.0.get(key).ok_or_else(|| {
                        SarError::Observation(format!("missing field {:?}", key))
                    })?;
                    v.extend(a.iter());
                }
            }
        }
        Ok(v)
    }
}

impl From<Vec<(String, ArrayD<f32>)>> for Observation {
    fn from(fields: Vec<(String, ArrayD<f32>)>) -> Self {
        Self(fields.into_iter().collect())
    }
}

impl IntoIterator for Observation {
    type Item = (String, ArrayD<f32>);
    type IntoIter = btree_map::IntoIter<String, ArrayD<f32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
