//! Bounded top-K selection over streams of totally ordered values.
//!
//! ```
//! use bounded_select::select::BoundedSelector;
//!
//! let mut selector = BoundedSelector::largest(3)?;
//! selector.offer_all([5, 1, 9, 2, 7]);
//! assert_eq!(selector.peek(), Some(&5));
//! assert_eq!(selector.into_sorted_vec(), vec![9, 7, 5]);
//! # Ok::<(), bounded_select::Error>(())
//! ```

pub mod base;
pub mod error;
pub mod finder;
pub mod heap;
pub mod options;
pub mod order;
pub mod scored;
pub mod select;
pub mod store;

#[cfg(feature = "python")]
mod py;

pub use error::{Error, Result};
pub use options::SelectorOptions;
pub use order::{Less, Order};
pub use select::BoundedSelector;
