//! Weighted collections.
//!
//! [`WeightedCollection`] is an ordered list of [`WeightedElement`]s with the
//! usual list operations (bounds-checked, returning [`WeightedError`] instead of
//! panicking) and two factories for draw sequences:
//! - [`WeightedCollection::draw_with_replacement`]: endless independent draws.
//! - [`WeightedCollection::draw_with_removal`]: draws that can remove what they drew.
//!
//! Insertion order only matters as a deterministic tie-break for the cumulative
//! scan; it never biases the distribution.

use std::ops::Index;

use rand::rngs::ThreadRng;

use crate::draw::{RemovalDraws, ReplacementDraws};
use crate::element::WeightedElement;
use crate::error::{check_index, check_position, check_range, WeightedError};
use crate::seq::WeightedSeq;
use crate::source::{RngSource, UniformSource};

/// An ordered, mutable list of weighted elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(transparent, bound(deserialize = "V: serde::Deserialize<'de>"))
)]
pub struct WeightedCollection<V> {
    elements: Vec<WeightedElement<V>>,
}

impl<V> Default for WeightedCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedCollection<V> {
    /// An empty collection.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Copy `source` in iteration order. An absent source yields an empty collection.
    pub fn from_source<I>(source: Option<I>) -> Self
    where
        I: IntoIterator<Item = WeightedElement<V>>,
    {
        source.map(Self::from_iter).unwrap_or_default()
    }

    /// Zip parallel `weights` and `values` index by index.
    ///
    /// Fails if either input is absent, if the lengths differ, or if any weight
    /// is invalid.
    pub fn from_parts(
        weights: Option<Vec<f64>>,
        values: Option<Vec<V>>,
    ) -> Result<Self, WeightedError> {
        let weights = weights.ok_or(WeightedError::MissingSource("weights"))?;
        let values = values.ok_or(WeightedError::MissingSource("values"))?;
        Self::zip(weights, values)
    }

    /// Zip parallel `weights` and `values`; both must have the same length.
    pub fn zip(weights: Vec<f64>, values: Vec<V>) -> Result<Self, WeightedError> {
        if weights.len() != values.len() {
            return Err(WeightedError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let elements = weights
            .into_iter()
            .zip(values)
            .map(|(w, v)| WeightedElement::new(w, v))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { elements })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&WeightedElement<V>, WeightedError> {
        check_index(index, self.len())?;
        Ok(&self.elements[index])
    }

    /// Replace the element at `index`, returning the previous one.
    pub fn set(
        &mut self,
        index: usize,
        element: WeightedElement<V>,
    ) -> Result<WeightedElement<V>, WeightedError> {
        check_index(index, self.len())?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    /// Insert at `index` (`index == len` appends).
    pub fn insert(
        &mut self,
        index: usize,
        element: WeightedElement<V>,
    ) -> Result<(), WeightedError> {
        check_position(index, self.len())?;
        self.elements.insert(index, element);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<WeightedElement<V>, WeightedError> {
        check_index(index, self.len())?;
        Ok(self.elements.remove(index))
    }

    pub fn push(&mut self, element: WeightedElement<V>) {
        self.elements.push(element);
    }

    /// Append everything from `source`. An absent source is an error.
    pub fn extend_from<I>(&mut self, source: Option<I>) -> Result<(), WeightedError>
    where
        I: IntoIterator<Item = WeightedElement<V>>,
    {
        let source = source.ok_or(WeightedError::MissingSource("source"))?;
        self.elements.extend(source);
        Ok(())
    }

    /// Insert everything from `source` at `index`, keeping its order.
    pub fn insert_all<I>(&mut self, index: usize, source: Option<I>) -> Result<(), WeightedError>
    where
        I: IntoIterator<Item = WeightedElement<V>>,
    {
        let source = source.ok_or(WeightedError::MissingSource("source"))?;
        check_position(index, self.len())?;
        self.elements.splice(index..index, source);
        Ok(())
    }

    /// Elements in `from..to`.
    pub fn slice(&self, from: usize, to: usize) -> Result<&[WeightedElement<V>], WeightedError> {
        check_range(from, to, self.len())?;
        Ok(&self.elements[from..to])
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[WeightedElement<V>] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedElement<V>> {
        self.elements.iter()
    }

    pub fn into_vec(self) -> Vec<WeightedElement<V>> {
        self.elements
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.elements.total_weight()
    }

    /// Endless draws with replacement, using the thread-local RNG.
    ///
    /// The collection is borrowed for as long as the draws live, so its weights
    /// are fixed for the lifetime of the sequence.
    pub fn draw_with_replacement(&self) -> ReplacementDraws<'_, V, RngSource<ThreadRng>> {
        ReplacementDraws::new(&self.elements)
    }

    /// Endless draws with replacement, using a caller-supplied source.
    pub fn draw_with_replacement_using<S: UniformSource>(
        &self,
        source: S,
    ) -> ReplacementDraws<'_, V, S> {
        ReplacementDraws::with_source(&self.elements, source)
    }

    /// Draws that may remove elements from this collection, using the thread-local RNG.
    pub fn draw_with_removal(&mut self) -> RemovalDraws<'_, Self, RngSource<ThreadRng>> {
        RemovalDraws::new(self)
    }

    /// Draws that may remove elements from this collection, using a caller-supplied source.
    pub fn draw_with_removal_using<S: UniformSource>(
        &mut self,
        source: S,
    ) -> RemovalDraws<'_, Self, S> {
        RemovalDraws::with_source(self, source)
    }
}

impl<V: PartialEq> WeightedCollection<V> {
    pub fn contains(&self, element: &WeightedElement<V>) -> bool {
        self.elements.contains(element)
    }

    pub fn contains_all<'e, I>(&self, elements: I) -> bool
    where
        I: IntoIterator<Item = &'e WeightedElement<V>>,
        V: 'e,
    {
        elements.into_iter().all(|e| self.contains(e))
    }

    pub fn index_of(&self, element: &WeightedElement<V>) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    pub fn last_index_of(&self, element: &WeightedElement<V>) -> Option<usize> {
        self.elements.iter().rposition(|e| e == element)
    }

    /// Remove the first element equal to `element`. Returns whether one was found.
    pub fn remove_item(&mut self, element: &WeightedElement<V>) -> bool {
        match self.index_of(element) {
            Some(i) => {
                self.elements.remove(i);
                true
            }
            None => false,
        }
    }
}

impl<V> WeightedSeq for WeightedCollection<V> {
    type Value = V;

    fn elements(&self) -> &[WeightedElement<V>] {
        &self.elements
    }

    fn insert_at(
        &mut self,
        index: usize,
        element: WeightedElement<V>,
    ) -> Result<(), WeightedError> {
        self.insert(index, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<WeightedElement<V>, WeightedError> {
        self.remove(index)
    }

    fn push_element(&mut self, element: WeightedElement<V>) {
        self.push(element);
    }
}

impl<V> From<Vec<WeightedElement<V>>> for WeightedCollection<V> {
    fn from(elements: Vec<WeightedElement<V>>) -> Self {
        Self { elements }
    }
}

impl<V> FromIterator<WeightedElement<V>> for WeightedCollection<V> {
    fn from_iter<I: IntoIterator<Item = WeightedElement<V>>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<V> Extend<WeightedElement<V>> for WeightedCollection<V> {
    fn extend<I: IntoIterator<Item = WeightedElement<V>>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<V> Index<usize> for WeightedCollection<V> {
    type Output = WeightedElement<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<V> IntoIterator for WeightedCollection<V> {
    type Item = WeightedElement<V>;
    type IntoIter = std::vec::IntoIter<WeightedElement<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a WeightedCollection<V> {
    type Item = &'a WeightedElement<V>;
    type IntoIter = std::slice::Iter<'a, WeightedElement<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_a_plain_array() {
        let c = WeightedCollection::zip(vec![1.0, 2.0], vec![7u8, 9]).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"[{"weight":1.0,"value":7},{"weight":2.0,"value":9}]"#);
        let back: WeightedCollection<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn rejects_an_invalid_element() {
        let json = r#"[{"weight":1.0,"value":7},{"weight":-3.0,"value":9}]"#;
        assert!(serde_json::from_str::<WeightedCollection<u8>>(json).is_err());
    }
}
