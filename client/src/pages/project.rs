//! Project listing (`/grupo/planificacion/proyecto`).

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use leptos::prelude::*;

use crate::components::listing_page::ListingPage;
use crate::state::dataset::Dataset;

pub const COLUMNS: [&str; 6] = ["Codigo", "Nombre", "Tipo", "Fecha de Inicio", "Fecha de Fin", "Grupo"];

pub fn projects() -> Dataset {
    Dataset::new(COLUMNS)
        .with_row(["PID-UTN 8123", "Plataforma de gestion de grupos", "PID", "2024-01-01", "2026-12-31", "L.I.N.S.I"])
        .with_row([
            "PID-UTN 7990",
            "Telemetria de vehiculos de competicion",
            "PID",
            "2023-01-01",
            "2025-12-31",
            "S.M.O.P",
        ])
}

fn add_project() {
    leptos::logging::log!("agregar proyecto");
}

/// Projects with their code, type and date range.
#[component]
pub fn ProjectPage() -> impl IntoView {
    let on_add = Callback::new(|()| add_project());

    view! {
        <ListingPage title="Proyectos:" button_label="Agregar Proyecto" on_add=on_add dataset=projects()/>
    }
}
