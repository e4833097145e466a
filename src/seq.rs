//! The sequence capability a removal-mode draw needs.
//!
//! Draw sequences do not require a full list interface. They scan a slice of
//! elements and remove by index; [`WeightedSeq`] names exactly that subset
//! (plus the insertion/append/slice operations callers use to populate one).
//! It is implemented for `Vec<WeightedElement<V>>` and for
//! [`WeightedCollection`](crate::WeightedCollection).

use crate::element::WeightedElement;
use crate::error::{check_index, check_position, check_range, WeightedError};

/// An ordered, indexable, mutable sequence of weighted elements.
pub trait WeightedSeq {
    /// Payload type of the contained elements.
    type Value;

    /// The elements in order.
    fn elements(&self) -> &[WeightedElement<Self::Value>];

    /// Insert at `index`, shifting later elements right. `index == len` appends.
    fn insert_at(
        &mut self,
        index: usize,
        element: WeightedElement<Self::Value>,
    ) -> Result<(), WeightedError>;

    /// Remove and return the element at `index`.
    fn remove_at(&mut self, index: usize) -> Result<WeightedElement<Self::Value>, WeightedError>;

    fn push_element(&mut self, element: WeightedElement<Self::Value>);

    fn element_count(&self) -> usize {
        self.elements().len()
    }

    fn element_at(&self, index: usize) -> Result<&WeightedElement<Self::Value>, WeightedError> {
        let elements = self.elements();
        check_index(index, elements.len())?;
        Ok(&elements[index])
    }

    fn slice(
        &self,
        from: usize,
        to: usize,
    ) -> Result<&[WeightedElement<Self::Value>], WeightedError> {
        let elements = self.elements();
        check_range(from, to, elements.len())?;
        Ok(&elements[from..to])
    }

    /// Sum of all weights, accumulated in order.
    fn total_weight(&self) -> f64 {
        self.elements().iter().map(WeightedElement::weight).sum()
    }
}

impl<V> WeightedSeq for Vec<WeightedElement<V>> {
    type Value = V;

    fn elements(&self) -> &[WeightedElement<V>] {
        self
    }

    fn insert_at(
        &mut self,
        index: usize,
        element: WeightedElement<V>,
    ) -> Result<(), WeightedError> {
        check_position(index, self.len())?;
        self.insert(index, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<WeightedElement<V>, WeightedError> {
        check_index(index, self.len())?;
        Ok(self.remove(index))
    }

    fn push_element(&mut self, element: WeightedElement<V>) {
        self.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(w: f64, v: &'static str) -> WeightedElement<&'static str> {
        WeightedElement::new(w, v).unwrap()
    }

    #[test]
    fn vec_bounds_are_checked() {
        let mut v = vec![e(1.0, "a"), e(2.0, "b")];
        assert_eq!(
            v.remove_at(2).unwrap_err(),
            WeightedError::OutOfRange { index: 2, len: 2 }
        );
        assert!(v.insert_at(3, e(1.0, "x")).is_err());
        assert!(v.element_at(2).is_err());
        assert!(v.slice(1, 3).is_err());
        assert_eq!(v.element_count(), 2);
    }

    #[test]
    fn vec_mutations_preserve_order() {
        let mut v: Vec<WeightedElement<&str>> = Vec::new();
        v.push_element(e(1.0, "a"));
        v.push_element(e(3.0, "c"));
        v.insert_at(1, e(2.0, "b")).unwrap();
        v.insert_at(3, e(4.0, "d")).unwrap();

        let values: Vec<_> = v.elements().iter().filter_map(|x| x.value().copied()).collect();
        assert_eq!(values, ["a", "b", "c", "d"]);
        assert_eq!(v.total_weight(), 10.0);

        let removed = v.remove_at(0).unwrap();
        assert_eq!(removed, e(1.0, "a"));
        assert_eq!(v.slice(0, 2).unwrap(), &[e(2.0, "b"), e(3.0, "c")]);
        assert_eq!(v.element_at(2).unwrap(), &e(4.0, "d"));
    }
}
