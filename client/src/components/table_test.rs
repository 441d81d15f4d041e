use super::*;
use crate::state::dataset::Dataset;

// =============================================================
// Rendering (SSR)
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use crate::test_helpers::{positions, render_html};

    fn render_dataset(data: Dataset) -> String {
        let (columns, rows) = data.into_parts();
        render_html(move || view! { <Table columns=columns rows=rows/> })
    }

    #[test]
    fn single_row_renders_header_then_cells_in_order() {
        let html = render_dataset(Dataset::new(["Sigla", "Nombre"]).with_row(["S.M.O.P", "Smooth Operator"]));

        assert_eq!(html.matches("<th ").count(), 2);
        assert_eq!(html.matches("<td").count(), 2);
        assert_eq!(html.matches("<tr").count(), 2);

        let at = positions(&html, &["Sigla", "Nombre", "S.M.O.P", "Smooth Operator"]);
        assert!(at.windows(2).all(|w| w[0] < w[1]), "out of order: {html}");
    }

    #[test]
    fn one_body_cell_per_row_and_column() {
        let data = Dataset::new(["a", "b", "c"])
            .with_row(["a1", "b1", "c1"])
            .with_row(["a2", "b2", "c2"])
            .with_row(["a3", "b3", "c3"])
            .with_row(["a4", "b4", "c4"]);
        let html = render_dataset(data);

        assert_eq!(html.matches("<th ").count(), 3);
        assert_eq!(html.matches("<td").count(), 12);

        let at = positions(&html, &["a1", "b1", "c1", "a2", "b2", "c2", "a3", "b3", "c3", "a4", "b4", "c4"]);
        assert!(at.windows(2).all(|w| w[0] < w[1]), "out of order: {html}");
    }

    #[test]
    fn empty_columns_render_empty_header_row() {
        let html = render_dataset(Dataset::new(Vec::<String>::new()));
        assert!(html.contains("<thead>"));
        assert_eq!(html.matches("<th ").count(), 0);
        assert_eq!(html.matches("<td").count(), 0);
    }

    #[test]
    fn header_without_rows_renders_no_body_rows() {
        let html = render_dataset(Dataset::new(["Sigla"]));
        assert_eq!(html.matches("<th ").count(), 1);
        assert_eq!(html.matches("<tr").count(), 1);
    }

    #[test]
    fn table_uses_striped_class() {
        let html = render_dataset(Dataset::new(["x"]).with_row(["1"]));
        assert!(html.contains("table table-striped"));
    }

    #[test]
    fn cell_text_is_escaped() {
        let html = render_dataset(Dataset::new(["x"]).with_row(["<b>bold</b>"]));
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold"));
    }
}

// =============================================================
// Row contract
// =============================================================

#[test]
fn rows_passed_to_table_keep_distinct_keys() {
    let (_, rows) = Dataset::new(["x"]).with_row(["1"]).with_row(["1"]).into_parts();
    assert_ne!(rows[0].key, rows[1].key);
    assert_eq!(rows[0].cells, rows[1].cells);
}
