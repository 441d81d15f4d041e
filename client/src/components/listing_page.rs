//! Shared layout for the registry listing pages.

#[cfg(test)]
#[path = "listing_page_test.rs"]
mod listing_page_test;

use leptos::prelude::*;

use crate::components::button::Button;
use crate::components::table::Table;
use crate::state::dataset::Dataset;

/// Title row with one action button, followed by a centred table.
///
/// Group, inventory, planning and project pages all render through this
/// layout; they differ only in title, button and dataset.
#[component]
pub fn ListingPage(
    #[prop(into)] title: String,
    #[prop(into)] button_label: String,
    on_add: Callback<()>,
    dataset: Dataset,
) -> impl IntoView {
    debug_assert!(dataset.is_rectangular(), "every row must have {} cells", dataset.width());
    let count = record_count_label(&dataset);
    let (columns, rows) = dataset.into_parts();

    view! {
        <section class="listing-page">
            <div class="row container-fluid align-items-center">
                <h1 class="col-2 listing-page__title">{title}</h1>
                <div class="col-8"></div>
                <div class="col-2">
                    <Button label=button_label action=on_add/>
                </div>
            </div>
            <div class="row container-fluid">
                <div class="col-1"></div>
                <div class="col-10">
                    <Table columns=columns rows=rows/>
                    <p class="listing-page__count text-muted">{count}</p>
                </div>
                <div class="col-1"></div>
            </div>
        </section>
    }
}

/// Caption under the table: how many rows it holds.
fn record_count_label(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return "Sin registros".to_owned();
    }
    match dataset.len() {
        1 => "1 registro".to_owned(),
        n => format!("{n} registros"),
    }
}
