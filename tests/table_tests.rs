//! Tests for the aligned table value type.

mod common;

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::common::{labels, table, thirteen};
    use lockstep::{Permutation, ReorderError, Table};
    use test_case::test_case;

    // ================================================================
    // Construction
    // ================================================================

    #[test_case(&[("a", &["1", "2"]), ("b", &["1"])] ; "second column shorter")]
    #[test_case(&[("a", &[]), ("b", &["1"])] ; "first column empty")]
    #[test_case(&[("a", &["1"]), ("b", &["1"]), ("c", &["1", "2", "3"])] ; "third column longer")]
    fn test_create_rejects_ragged(columns: &[(&str, &[&str])]) {
        let result = Table::create(columns.iter().map(|(n, l)| (*n, l.to_vec())));
        assert!(matches!(result, Err(ReorderError::Shape(_))));
    }

    #[test]
    fn test_create_sets_height() {
        let t = thirteen();
        assert_eq!(t.height(), 13);
        assert_eq!(t.width(), 3);
        assert_eq!(
            t.column_names().collect::<Vec<_>>(),
            ["colors", "realms", "months"]
        );
    }

    // ================================================================
    // with_column
    // ================================================================

    #[test]
    fn test_with_column_replaces_one() {
        let t = table(&[("a", &["1", "2"]), ("b", &["3", "4"])]);
        let next = t.with_column("b", vec!["x", "y"]).unwrap();
        assert_eq!(labels(&next, "a"), ["1", "2"]);
        assert_eq!(labels(&next, "b"), ["x", "y"]);
        assert_eq!(labels(&t, "b"), ["3", "4"]);
    }

    #[test]
    fn test_with_column_wrong_length() {
        let t = table(&[("a", &["1", "2"])]);
        assert!(matches!(
            t.with_column("a", vec!["1"]),
            Err(ReorderError::Shape(_))
        ));
    }

    // ================================================================
    // apply_permutation
    // ================================================================

    #[test]
    fn test_identity_permutation_is_noop() {
        let t = thirteen();
        let next = t.apply_permutation(&Permutation::identity(13)).unwrap();
        assert_eq!(next, t);
    }

    #[test]
    fn test_permutation_moves_whole_rows() {
        let t = table(&[("a", &["x", "y", "z"]), ("b", &["1", "2", "3"])]);
        let p = Permutation::try_from_indices(vec![2, 0, 1]).unwrap();
        let next = t.apply_permutation(&p).unwrap();
        assert_eq!(labels(&next, "a"), ["z", "x", "y"]);
        assert_eq!(labels(&next, "b"), ["3", "1", "2"]);
    }

    #[test]
    fn test_permutation_wrong_length() {
        let t = table(&[("a", &["x", "y", "z"])]);
        let p = Permutation::identity(2);
        assert!(matches!(
            t.apply_permutation(&p),
            Err(ReorderError::Shape(_))
        ));
    }

    #[test]
    fn test_indices_that_are_not_a_permutation() {
        assert!(matches!(
            Permutation::try_from_indices(vec![1, 1, 0]),
            Err(ReorderError::Shape(_))
        ));
    }

    // ================================================================
    // swap_rows
    // ================================================================

    #[test]
    fn test_swap_rows_touches_one_column() {
        let t = thirteen();
        let next = t.swap_rows(0, 12, "realms").unwrap();

        assert_eq!(labels(&next, "colors"), labels(&t, "colors"));
        assert_eq!(labels(&next, "months"), labels(&t, "months"));

        let before = labels(&t, "realms");
        let after = labels(&next, "realms");
        assert_eq!(after[0], before[12]);
        assert_eq!(after[12], before[0]);
        assert_eq!(after[1..12], before[1..12]);
    }

    #[test_case(3, 0 ; "first row out of range")]
    #[test_case(0, 3 ; "second row out of range")]
    #[test_case(usize::MAX, 1 ; "huge index")]
    fn test_swap_rows_out_of_range(a: usize, b: usize) {
        let t = table(&[("a", &["x", "y", "z"])]);
        assert!(matches!(t.swap_rows(a, b, "a"), Err(ReorderError::Range(_))));
    }
}
