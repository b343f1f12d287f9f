use bounded_select::{heap::is_heap, select::BoundedSelector, Order};
use log::debug;

/// The k largest values of `values`, largest first, computed by sorting
pub fn reference_top_k(values: &[i64], k: usize) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted.truncate(k);
    sorted
}

/// Checks a selector that kept the largest values against the reference
/// top-k: same retained values, heap order, and the k-th largest at the root
pub fn check_top_k(selector: &BoundedSelector<i64, Order>, values: &[i64], k: usize) {
    let mut observed = selector.result().to_vec();
    observed.sort_by(|a, b| b.cmp(a));
    let expected = reference_top_k(values, k);

    debug!("Retained {:?}, expected {:?}", observed, expected);
    assert!(
        observed.len() == expected.len(),
        "Size differ {} vs {}",
        observed.len(),
        expected.len()
    );
    assert_eq!(observed, expected);
    assert!(
        is_heap(selector.result(), &selector.order()),
        "Heap order broken: {:?}",
        selector.result()
    );
    assert_eq!(selector.peek(), expected.last());
}
