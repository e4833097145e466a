//! Weighted elements.
//!
//! A [`WeightedElement`] pairs a non-negative, finite weight with an optional
//! payload. Elements are immutable once built; equality and hashing compare the
//! weight bit-for-bit, so both stay stable for the lifetime of the element.

use std::hash::{Hash, Hasher};

use crate::error::WeightedError;

/// A value paired with the relative likelihood of drawing it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawElement<V>", bound(deserialize = "V: serde::Deserialize<'de>"))
)]
pub struct WeightedElement<V> {
    weight: f64,
    value: Option<V>,
}

impl<V> WeightedElement<V> {
    /// Create an element carrying `value`.
    ///
    /// Fails with [`WeightedError::InvalidWeight`] if `weight` is negative, NaN or infinite.
    pub fn new(weight: f64, value: V) -> Result<Self, WeightedError> {
        Self::with_value(weight, Some(value))
    }

    /// Create an element with no payload.
    pub fn absent(weight: f64) -> Result<Self, WeightedError> {
        Self::with_value(weight, None)
    }

    /// Create an element from an optional payload.
    pub fn with_value(weight: f64, value: Option<V>) -> Result<Self, WeightedError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(WeightedError::InvalidWeight(weight));
        }
        // -0.0 passes the check above; fold it into +0.0 so bitwise equality holds.
        let weight = if weight == 0.0 { 0.0 } else { weight };
        Ok(Self { weight, value })
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// The payload, or `None` for an absent value.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<V> {
        self.value
    }

    pub fn into_parts(self) -> (f64, Option<V>) {
        (self.weight, self.value)
    }
}

impl<V: PartialEq> PartialEq for WeightedElement<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.to_bits() == other.weight.to_bits() && self.value == other.value
    }
}

impl<V: Eq> Eq for WeightedElement<V> {}

impl<V: Hash> Hash for WeightedElement<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.weight.to_bits().hash(state);
        self.value.hash(state);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawElement<V> {
    weight: f64,
    value: Option<V>,
}

#[cfg(feature = "serde")]
impl<V> TryFrom<RawElement<V>> for WeightedElement<V> {
    type Error = WeightedError;

    fn try_from(raw: RawElement<V>) -> Result<Self, Self::Error> {
        Self::with_value(raw.weight, raw.value)
    }
}
