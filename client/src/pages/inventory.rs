//! Equipment inventory (`/grupo/planificacion/inventario`).

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::components::listing_page::ListingPage;
use crate::state::dataset::Dataset;

pub const COLUMNS: [&str; 5] = ["Denominacion", "Fecha de Ingreso", "Monto", "Descripcion", "Proyecto"];

pub fn equipment() -> Dataset {
    Dataset::new(COLUMNS)
        .with_row(["Notebook Lenovo ThinkPad", "2024-03-12", "$ 850.000", "Equipo de desarrollo", "PID-UTN 8123"])
        .with_row(["Impresora 3D Prusa MK4", "2023-11-02", "$ 1.200.000", "Prototipado de piezas", "PID-UTN 7990"])
        .with_row(["Servidor Dell PowerEdge", "2022-06-20", "$ 3.400.000", "Cluster de pruebas", "-"])
}

fn add_equipment() {
    leptos::logging::log!("agregar equipamiento");
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let on_add = Callback::new(|()| add_equipment());

    view! {
        <ListingPage
            title="Inventario:"
            button_label="Agregar Equipamiento"
            on_add=on_add
            dataset=equipment()
        />
    }
}
