//! Group planning: members, their roles and committed hours
//! (`/grupo/planificacion`).

#[cfg(test)]
#[path = "planning_test.rs"]
mod planning_test;

use leptos::prelude::*;

use crate::components::listing_page::ListingPage;
use crate::state::dataset::Dataset;

pub const COLUMNS: [&str; 6] = ["Nombre", "Apellido", "Rol", "Grado Academico", "Horas", "Fecha de Inicio"];

pub fn members() -> Dataset {
    Dataset::new(COLUMNS)
        .with_row(["Milagros", "Crespo", "Director/a", "Doctorado", "20", "2021-03-01"])
        .with_row(["Martina", "Garcia", "Vicedirector/a", "Maestria", "20", "2021-03-01"])
        .with_row(["Carlos", "Sainz", "Investigador/a", "Ingenieria", "10", "2023-08-15"])
}

fn add_member() {
    leptos::logging::log!("agregar integrante");
}

#[component]
pub fn PlanningPage() -> impl IntoView {
    let on_add = Callback::new(|()| add_member());

    view! {
        <ListingPage
            title="Planificacion:"
            button_label="Agregar Integrante"
            on_add=on_add
            dataset=members()
        />
    }
}
