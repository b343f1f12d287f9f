use derivative::Derivative;
use serde::{Deserialize, Serialize};

use crate::{error::Result, order::Order, select::BoundedSelector};

#[derive(Derivative, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[derivative(Default)]
#[serde(default)]
pub struct SelectorOptions {
    /// Number of values to retain (must be at least 1)
    #[derivative(Default(value = "10"))]
    pub capacity: usize,

    /// Whether to keep the largest or the smallest values
    pub order: Order,
}

impl SelectorOptions {
    pub fn new(capacity: usize, order: Order) -> Self {
        Self { capacity, order }
    }

    /// Builds an empty selector with these options
    pub fn build<T: Ord>(&self) -> Result<BoundedSelector<T, Order>> {
        BoundedSelector::with_order(self.capacity, self.order)
    }
}
