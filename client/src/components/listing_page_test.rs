use super::*;

// =============================================================
// record_count_label
// =============================================================

#[test]
fn count_label_for_empty_dataset() {
    assert_eq!(record_count_label(&Dataset::new(["a"])), "Sin registros");
}

#[test]
fn count_label_is_singular_for_one_row() {
    assert_eq!(record_count_label(&Dataset::new(["a"]).with_row(["1"])), "1 registro");
}

#[test]
fn count_label_is_plural_for_many_rows() {
    let data = Dataset::new(["a"]).with_row(["1"]).with_row(["2"]).with_row(["3"]);
    assert_eq!(record_count_label(&data), "3 registros");
}

// =============================================================
// Rendering (SSR)
// =============================================================

#[cfg(feature = "ssr")]
mod render {
    use super::*;
    use crate::test_helpers::render_html;

    fn render_listing(dataset: Dataset) -> String {
        render_html(move || {
            let on_add = Callback::new(|()| {});
            view! { <ListingPage title="Grupos:" button_label="Agregar Grupo" on_add=on_add dataset=dataset/> }
        })
    }

    #[test]
    fn renders_title_button_table_and_count() {
        let html = render_listing(Dataset::new(["Sigla", "Nombre"]).with_row(["S.M.O.P", "Smooth Operator"]));
        assert!(html.contains("Grupos:"));
        assert!(html.contains("Agregar Grupo"));
        assert!(html.contains("table table-striped"));
        assert!(html.contains("1 registro"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "every row must have 2 cells")]
    fn ragged_dataset_is_rejected_in_debug_builds() {
        render_listing(Dataset::new(["Sigla", "Nombre"]).with_row(["S.M.O.P"]));
    }
}
