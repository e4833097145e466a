//! `fukubiki`: weighted collections and weighted draws.
//!
//! Populate a [`WeightedCollection`], then draw from it with probability
//! proportional to each element's weight, either endlessly with replacement or
//! with the option to remove each drawn element (draws without replacement).
//!
//! Exposed modules:
//! - `element`: [`WeightedElement`], an immutable (weight, optional value) pair.
//! - `collection`: [`WeightedCollection`], an ordered list with bounds-checked operations.
//! - `draw`: the cumulative weight scan plus [`ReplacementDraws`] and [`RemovalDraws`].
//! - `seq`: [`WeightedSeq`], the sequence capability removal draws operate on.
//! - `source`: [`UniformSource`] and its implementations, for injecting randomness.
//! - `error`: [`WeightedError`].
//!
//! ```
//! use fukubiki::{ScriptedSource, WeightedCollection};
//!
//! let mut loot = WeightedCollection::zip(vec![1.0, 2.0, 3.0], vec!["rare", "uncommon", "common"])?;
//!
//! // u = 0.5 scales to 3.0; cumulative weights are 1, 3, 6, so the third element wins.
//! let mut draws = loot.draw_with_removal_using(ScriptedSource::constant(0.5)?);
//! assert_eq!(draws.next_draw()?.value(), Some(&"common"));
//! draws.remove_last()?;
//! assert_eq!(draws.total_weight(), 3.0);
//! # Ok::<(), fukubiki::WeightedError>(())
//! ```

#![forbid(unsafe_code)]

pub mod collection;
pub mod draw;
pub mod element;
pub mod error;
pub mod seq;
pub mod source;

pub use collection::WeightedCollection;
pub use draw::{locate, Drain, RemovalDraws, ReplacementDraws};
pub use element::WeightedElement;
pub use error::{ErrorKind, WeightedError};
pub use seq::WeightedSeq;
pub use source::{RngSource, ScriptedSource, UniformSource};
