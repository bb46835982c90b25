//! Property tests for scalar-or-list path normalization.

use proptest::prelude::*;
use rigger_config::PathArg;
use std::path::PathBuf;

proptest! {
    #[test]
    fn scalar_normalizes_to_exactly_itself(raw in "[a-zA-Z0-9/._-]{1,40}") {
        let arg = PathArg::One(PathBuf::from(&raw));
        prop_assert_eq!(arg.to_vec(), vec![PathBuf::from(&raw)]);
    }

    #[test]
    fn list_normalizes_to_equal_list_in_order(
        raw in proptest::collection::vec("[a-zA-Z0-9/._-]{1,20}", 0..8)
    ) {
        let expected: Vec<PathBuf> = raw.iter().map(PathBuf::from).collect();
        let arg = PathArg::Many(expected.clone());
        prop_assert_eq!(arg.to_vec(), expected);
    }

    #[test]
    fn normalization_is_idempotent(
        raw in proptest::collection::vec("[a-zA-Z0-9/._-]{1,20}", 0..8)
    ) {
        let arg = PathArg::Many(raw.iter().map(PathBuf::from).collect());
        let once = arg.to_vec();
        let again = PathArg::Many(once.clone()).to_vec();
        prop_assert_eq!(once, again);
    }
}

#[test]
fn absent_normalizes_to_empty() {
    assert!(PathArg::None.to_vec().is_empty());
}
