//! Tests for export shapes and re-import.

mod common;

#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::common::{table, thirteen};
    use lockstep::export::{export_table, to_records, ExportShape};
    use lockstep::import::parse_table;
    use lockstep::{Coordinate, ReorderEngine};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test]
    fn test_row_major_has_one_record_per_row() {
        // More rows than columns: every row must still be exported.
        let t = thirteen();
        let records = to_records(&t);
        assert_eq!(records.len(), 13);
        assert_eq!(records[0].get("colors"), Some("Red"));
        assert_eq!(records[12].get("realms"), Some("Valhalla"));
    }

    #[test]
    fn test_row_major_with_more_columns_than_rows() {
        let t = table(&[("a", &["1"]), ("b", &["2"]), ("c", &["3"])]);
        let json: Value =
            serde_json::from_str(&export_table(&t, ExportShape::RowMajor).unwrap()).unwrap();
        assert_eq!(json, json!([{ "a": "1", "b": "2", "c": "3" }]));
    }

    #[test]
    fn test_row_major_keeps_column_order_in_records() {
        let t = table(&[("zeta", &["1"]), ("alpha", &["2"])]);
        let text = export_table(&t, ExportShape::RowMajor).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_zero_rows_keep_names_only_column_major() {
        let t = lockstep::Table::create([("a", Vec::<String>::new()), ("b", Vec::new())]).unwrap();

        let rows = export_table(&t, ExportShape::RowMajor).unwrap();
        let back = parse_table(&rows).unwrap();
        assert_eq!(back.width(), 0);

        let columns = export_table(&t, ExportShape::ColumnMajor).unwrap();
        let back = parse_table(&columns).unwrap();
        assert_eq!(back.column_names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(back.height(), 0);
    }

    #[test]
    fn test_column_major_of_empty_table() {
        let t = lockstep::Table::default();
        let json: Value =
            serde_json::from_str(&export_table(&t, ExportShape::ColumnMajor).unwrap()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test_case(ExportShape::ColumnMajor ; "column major")]
    #[test_case(ExportShape::RowMajor ; "row major")]
    fn test_export_reimports_committed_table(shape: ExportShape) {
        let mut e = ReorderEngine::new(thirteen());
        e.sort_by("realms", false).unwrap();
        e.on_drag_start(Coordinate::new(2, 0)).unwrap();
        e.on_drag_hover(Coordinate::new(2, 5)).unwrap();
        e.on_drag_end().unwrap();

        let text = export_table(&e.snapshot(), shape).unwrap();
        let back = parse_table(&text).unwrap();
        assert_eq!(back, *e.snapshot());
    }

    #[test]
    fn test_export_ignores_drag_preview() {
        let mut e = ReorderEngine::new(table(&[("a", &["x", "y"])]));
        e.on_drag_start(Coordinate::new(0, 0)).unwrap();
        e.on_drag_hover(Coordinate::new(0, 1)).unwrap();
        let json: Value =
            serde_json::from_str(&export_table(&e.snapshot(), ExportShape::ColumnMajor).unwrap())
                .unwrap();
        assert_eq!(json, json!({ "a": ["x", "y"] }));
    }

    #[test_case("rows", ExportShape::RowMajor)]
    #[test_case("row-major", ExportShape::RowMajor)]
    #[test_case("columns", ExportShape::ColumnMajor)]
    #[test_case("column-major", ExportShape::ColumnMajor)]
    fn test_shape_names(name: &str, expected: ExportShape) {
        assert_eq!(name.parse::<ExportShape>().unwrap(), expected);
    }
}
