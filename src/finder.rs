//! One-pass helpers built on [`BoundedSelector`]: finding the k-th largest
//! value of a sequence, and reading integer inputs.

use std::{fs, path::Path};

use log::debug;

use crate::{
    error::{Error, Result},
    options::SelectorOptions,
    select::BoundedSelector,
};

/// Returns the k-th largest value of `values`
///
/// With fewer than `k` values, returns the smallest one; returns `None` when
/// `values` is empty.
pub fn find_kth_largest<T, I>(values: I, k: usize) -> Result<Option<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selector = BoundedSelector::largest(k)?;
    selector.offer_all(values);

    // The root is the minimum of the retained values
    Ok(selector.into_vec().into_iter().next())
}

/// Returns the selected values, best first
pub fn top_k<T, I>(values: I, options: &SelectorOptions) -> Result<Vec<T>>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut selector = options.build()?;
    selector.offer_all(values);
    Ok(selector.into_sorted_vec())
}

/// Parses integers separated by white spaces or commas
pub fn parse_values(text: &str) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    for (ix, line) in text.lines().enumerate() {
        for token in line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
        {
            let value = token.parse::<i64>().map_err(|_| Error::Parse {
                line: ix + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Reads integers from a file: a JSON array if the file has a `.json`
/// extension, separated integers otherwise
pub fn read_values(path: &Path) -> Result<Vec<i64>> {
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));

    let values: Vec<i64> = if is_json {
        serde_json::from_str(&text)?
    } else {
        parse_values(&text)?
    };

    debug!("Read {} values from {}", values.len(), path.display());
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Order;

    #[test]
    fn test_find_kth_largest() {
        assert_eq!(find_kth_largest([5, 1, 9, 2, 7], 3).unwrap(), Some(5));
        assert_eq!(find_kth_largest([5, 1, 9, 2, 7], 1).unwrap(), Some(9));
        assert_eq!(find_kth_largest([4], 2).unwrap(), Some(4));
        assert_eq!(find_kth_largest(Vec::<i32>::new(), 2).unwrap(), None);
        assert!(matches!(
            find_kth_largest([1, 2], 0),
            Err(Error::InvalidCapacity(0))
        ));
    }

    #[test]
    fn test_top_k() {
        let options = SelectorOptions::new(3, Order::Smallest);
        assert_eq!(top_k([5, 1, 9, 2, 7], &options).unwrap(), vec![1, 2, 5]);
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(
            parse_values("3 -1,4\n\n  10\t2\n").unwrap(),
            vec![3, -1, 4, 10, 2]
        );

        match parse_values("1 2\n3 x4") {
            Err(Error::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            r => panic!("Expected a parse error, got {:?}", r),
        }
    }
}
