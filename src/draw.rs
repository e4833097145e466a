//! Weighted draws.
//!
//! Both draw modes share one algorithm: take a uniform `u` in `[0, 1)`, scale it
//! by the total weight `S`, and walk the elements in order accumulating weight
//! until the running sum strictly exceeds `u * S`. Element `i` is therefore
//! chosen with probability `w_i / S`.
//!
//! - [`ReplacementDraws`]: endless, independent draws; never touches the elements.
//! - [`RemovalDraws`]: draws from a mutable sequence; the most recent draw can be
//!   removed with [`RemovalDraws::remove_last`], renormalizing later draws.
//!
//! The scan is O(n) per draw. No prefix-sum index is kept, so removal stays O(n)
//! as well and nothing has to be rebuilt when the backing sequence changes.

use std::iter::FusedIterator;

use log::{debug, trace};
use rand::rngs::ThreadRng;

use crate::element::WeightedElement;
use crate::error::WeightedError;
use crate::seq::WeightedSeq;
use crate::source::{RngSource, UniformSource};

/// Locate the element selected by uniform sample `u` against `total` weight.
///
/// Returns the first index whose cumulative weight strictly exceeds `u * total`.
/// If rounding leaves the target unreached (e.g. `u` just below 1, or every
/// weight is zero) the last index is returned. Returns `None` only when
/// `elements` is empty.
pub fn locate<V>(elements: &[WeightedElement<V>], total: f64, u: f64) -> Option<usize> {
    let last = elements.len().checked_sub(1)?;
    let target = u * total;
    let mut acc = 0.0;
    for (i, element) in elements.iter().enumerate() {
        acc += element.weight();
        if acc > target {
            trace!("draw: target {target} -> index {i}");
            return Some(i);
        }
    }
    debug!("draw: target {target} not reached (cumulative {acc}), falling back to index {last}");
    Some(last)
}

/// Endless draws with replacement over a borrowed slice of elements.
///
/// The total weight is captured once at construction; the borrow keeps the
/// elements from changing underneath it.
#[derive(Debug, Clone)]
pub struct ReplacementDraws<'a, V, S = RngSource<ThreadRng>> {
    elements: &'a [WeightedElement<V>],
    total: f64,
    source: S,
}

impl<'a, V> ReplacementDraws<'a, V> {
    /// Draw from `elements` using the thread-local RNG.
    pub fn new(elements: &'a [WeightedElement<V>]) -> Self {
        Self::with_source(elements, RngSource::thread())
    }
}

impl<'a, V, S: UniformSource> ReplacementDraws<'a, V, S> {
    /// Draw from `elements` using a caller-supplied source.
    pub fn with_source(elements: &'a [WeightedElement<V>], source: S) -> Self {
        let total = elements.iter().map(WeightedElement::weight).sum();
        Self {
            elements,
            total,
            source,
        }
    }

    /// True iff there is anything to draw from. Constant for the sequence's lifetime.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Draw one element. Fails with [`WeightedError::Exhausted`] if there are no elements.
    pub fn next_draw(&mut self) -> Result<&'a WeightedElement<V>, WeightedError> {
        if self.elements.is_empty() {
            return Err(WeightedError::Exhausted);
        }
        let u = self.source.next_uniform();
        let i = locate(self.elements, self.total, u).ok_or(WeightedError::Exhausted)?;
        Ok(&self.elements[i])
    }

    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn elements(&self) -> &'a [WeightedElement<V>] {
        self.elements
    }
}

impl<'a, V, S: UniformSource> Iterator for ReplacementDraws<'a, V, S> {
    type Item = &'a WeightedElement<V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_draw().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.has_next() {
            (usize::MAX, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<V, S: UniformSource> FusedIterator for ReplacementDraws<'_, V, S> {}

/// Draws that can remove what they drew from a mutable backing sequence.
///
/// Only the most recent draw can be removed, and only once. Drawing again
/// without removing simply gives up that opportunity.
#[derive(Debug)]
pub struct RemovalDraws<'a, Q: ?Sized, S = RngSource<ThreadRng>> {
    seq: &'a mut Q,
    total: f64,
    pending: Option<usize>,
    source: S,
}

impl<'a, Q: WeightedSeq + ?Sized> RemovalDraws<'a, Q> {
    /// Draw from `seq` using the thread-local RNG.
    pub fn new(seq: &'a mut Q) -> Self {
        Self::with_source(seq, RngSource::thread())
    }
}

impl<'a, Q: WeightedSeq + ?Sized, S: UniformSource> RemovalDraws<'a, Q, S> {
    /// Draw from `seq` using a caller-supplied source.
    pub fn with_source(seq: &'a mut Q, source: S) -> Self {
        let total = seq.total_weight();
        Self {
            seq,
            total,
            pending: None,
            source,
        }
    }

    /// True iff the backing sequence is currently non-empty.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.seq.element_count() > 0
    }

    /// True iff the most recent draw can still be removed.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Draw one element from what is currently left.
    ///
    /// Fails with [`WeightedError::Exhausted`] if the backing sequence is empty.
    pub fn next_draw(&mut self) -> Result<&WeightedElement<Q::Value>, WeightedError> {
        if !self.has_next() {
            return Err(WeightedError::Exhausted);
        }
        let u = self.source.next_uniform();
        let elements = self.seq.elements();
        let i = locate(elements, self.total, u).ok_or(WeightedError::Exhausted)?;
        self.pending = Some(i);
        Ok(&elements[i])
    }

    /// Remove the element returned by the most recent draw and return it.
    ///
    /// Fails with [`WeightedError::NoPendingDraw`] before any draw, or when the
    /// most recent draw was already removed.
    pub fn remove_last(&mut self) -> Result<WeightedElement<Q::Value>, WeightedError> {
        let i = self.pending.ok_or(WeightedError::NoPendingDraw)?;
        let removed = self.seq.remove_at(i)?;
        self.pending = None;
        self.total = if self.seq.element_count() == 0 {
            0.0
        } else {
            let reduced = self.total - removed.weight();
            // A dominant removed weight leaves the small ones lost to rounding in `reduced`.
            if reduced <= 0.0 || removed.weight() > reduced {
                self.seq.total_weight()
            } else {
                reduced
            }
        };
        debug!("removed index {i}, remaining total weight {}", self.total);
        Ok(removed)
    }

    /// Running total of the weights still in the backing sequence.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.seq.element_count()
    }

    /// Draw and remove until the backing sequence is empty, yielding owned elements.
    ///
    /// The yielded order is a weighted random permutation of the sequence.
    pub fn drain(self) -> Drain<'a, Q, S> {
        Drain { draws: self }
    }
}

/// Iterator returned by [`RemovalDraws::drain`].
#[derive(Debug)]
pub struct Drain<'a, Q: ?Sized, S> {
    draws: RemovalDraws<'a, Q, S>,
}

impl<Q: WeightedSeq + ?Sized, S: UniformSource> Iterator for Drain<'_, Q, S> {
    type Item = WeightedElement<Q::Value>;

    fn next(&mut self) -> Option<Self::Item> {
        self.draws.next_draw().ok()?;
        self.draws.remove_last().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.draws.remaining();
        (n, Some(n))
    }
}

impl<Q: WeightedSeq + ?Sized, S: UniformSource> ExactSizeIterator for Drain<'_, Q, S> {}

impl<Q: WeightedSeq + ?Sized, S: UniformSource> FusedIterator for Drain<'_, Q, S> {}
