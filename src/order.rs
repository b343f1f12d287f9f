//! Orderings used by the selectors.
//!
//! A selector only needs to know whether one value is smaller than another;
//! it then keeps the values that are the largest under that relation.

use serde::{Deserialize, Serialize};

/// "a is smaller than b"
pub trait Less<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Natural orders for totally ordered types
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Keep the largest values
    #[default]
    Largest,
    /// Keep the smallest values (the natural comparison is inverted)
    Smallest,
}

impl<T: Ord> Less<T> for Order {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        match self {
            Order::Largest => a < b,
            Order::Smallest => b < a,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_orders() {
        assert!(Order::Largest.less(&1, &2));
        assert!(!Order::Largest.less(&2, &2));
        assert!(Order::Smallest.less(&2, &1));
        assert!(!Order::Smallest.less(&1, &2));
    }

    #[test]
    fn test_closure() {
        let by_abs = |a: &i32, b: &i32| a.abs() < b.abs();
        assert!(by_abs.less(&1, &-3));
        assert!(!by_abs.less(&-3, &2));
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Order::Smallest).unwrap(), "\"smallest\"");
        let order: Order = serde_json::from_str("\"largest\"").unwrap();
        assert_eq!(order, Order::Largest);
    }
}
