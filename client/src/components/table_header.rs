//! Header row for [`Table`](super::table::Table).

use leptos::prelude::*;

/// Renders one `<th>` per column label, in the given order.
///
/// An empty label list renders an empty header row.
#[component]
pub fn TableHeader(columns: Vec<String>) -> impl IntoView {
    view! {
        <thead>
            <tr>
                {columns
                    .into_iter()
                    .map(|label| view! { <th scope="col">{label}</th> })
                    .collect_view()}
            </tr>
        </thead>
    }
}
