//! Research group listing (`/grupo`).

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use leptos::prelude::*;

use crate::components::listing_page::ListingPage;
use crate::state::dataset::Dataset;

pub const COLUMNS: [&str; 6] =
    ["Sigla", "Nombre", "Unidad Academica", "Director/a", "Vicedirector/a", "Correo Electronico"];

/// Placeholder groups shown until the registry is backed by real data.
pub fn groups() -> Dataset {
    Dataset::new(COLUMNS)
        .with_row(["S.M.O.P", "Smooth Operator", "Ferrari", "Carlos Sainz JR.", "Charles Leclerc", "ferrari@gmail.com"])
        .with_row([
            "L.I.N.S.I",
            "Laboratorio de ingenieria en sistemas de informacion",
            "frlp",
            "Milagros Crespo",
            "Martina Garcia",
            "linsi@hotmail.com",
        ])
}

fn add_group() {
    leptos::logging::log!("agregar grupo");
}

#[component]
pub fn GroupPage() -> impl IntoView {
    let on_add = Callback::new(|()| add_group());

    view! { <ListingPage title="Grupos:" button_label="Agregar Grupo" on_add=on_add dataset=groups()/> }
}
