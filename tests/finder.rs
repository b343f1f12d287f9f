use std::fs;

use bounded_select::{
    finder::{find_kth_largest, read_values, top_k},
    Error, Order, SelectorOptions,
};
use rstest::rstest;
use temp_dir::TempDir;

#[rstest]
#[case("values.txt", "5 1 9\n2 7\n")]
#[case("values.csv", "5,1,9,2,7")]
#[case("values.json", "[5, 1, 9, 2, 7]")]
fn test_read_values(#[case] name: &str, #[case] content: &str) {
    let dir = TempDir::new().expect("Could not create temporary directory");
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();

    let values = read_values(&path).expect("Error while reading values");
    assert_eq!(values, vec![5, 1, 9, 2, 7]);
    assert_eq!(find_kth_largest(values, 3).unwrap(), Some(5));
}

#[test]
fn test_read_invalid() {
    let dir = TempDir::new().expect("Could not create temporary directory");

    let path = dir.path().join("values.json");
    fs::write(&path, "[1, \"two\"]").unwrap();
    assert!(matches!(read_values(&path), Err(Error::Json(_))));

    let path = dir.path().join("values.txt");
    fs::write(&path, "1\n2.5\n").unwrap();
    assert!(matches!(
        read_values(&path),
        Err(Error::Parse { line: 2, .. })
    ));

    assert!(matches!(
        read_values(&dir.path().join("missing.txt")),
        Err(Error::Io(_))
    ));
}

#[test]
fn test_top_k_options() {
    let values = vec![12, -4, 7, 7, 30, 0];

    let largest = top_k(values.clone(), &SelectorOptions::new(3, Order::Largest)).unwrap();
    assert_eq!(largest, vec![30, 12, 7]);

    let smallest = top_k(values.clone(), &SelectorOptions::new(2, Order::Smallest)).unwrap();
    assert_eq!(smallest, vec![-4, 0]);

    let all = top_k(values, &SelectorOptions::default()).unwrap();
    assert_eq!(all.len(), 6);
}
