//! Striped data table: a header row followed by one body row per dataset row.
//!
//! Rows are keyed by their `RowKey`, not by position. Cells within a row are
//! positional and line up with the column labels; the caller is responsible
//! for matching widths.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use leptos::prelude::*;

use crate::components::table_header::TableHeader;
use crate::state::dataset::Row;

/// Full table markup for the given columns and rows.
#[component]
pub fn Table(columns: Vec<String>, rows: Vec<Row>) -> impl IntoView {
    view! {
        <table class="table table-striped">
            <TableHeader columns=columns/>
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row| row.key
                    children=|row: Row| view! { <TableRow cells=row.cells/> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn TableRow(cells: Vec<String>) -> impl IntoView {
    view! {
        <tr>
            {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
        </tr>
    }
}
