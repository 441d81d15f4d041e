//! Static route table: URL path to page.
//!
//! The table is declared once and never changes. `NavMenu` renders one link
//! per entry, `App` registers one `leptos_router` route per entry and renders
//! it through [`Page::view`], and the document title is looked up here by
//! path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;

use crate::pages::{
    group::GroupPage, inventory::InventoryPage, login::LoginPage, planning::PlanningPage, project::ProjectPage,
};

pub const APP_TITLE: &str = "Gestor de Grupos";

/// Pages reachable from the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Group,
    Inventory,
    Login,
    Planning,
    Project,
}

/// One navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Navigation link text.
    pub label: &'static str,
    /// Document title prefix.
    pub title: &'static str,
    pub page: Page,
}

pub static ROUTES: [RouteEntry; 5] = [
    RouteEntry { path: "/grupo", label: "grupo", title: "Grupos", page: Page::Group },
    RouteEntry {
        path: "/grupo/planificacion/inventario",
        label: "inventario",
        title: "Inventario",
        page: Page::Inventory,
    },
    RouteEntry { path: "/login", label: "login", title: "Ingresar", page: Page::Login },
    RouteEntry { path: "/grupo/planificacion", label: "planificacion", title: "Planificacion", page: Page::Planning },
    RouteEntry {
        path: "/grupo/planificacion/proyecto",
        label: "proyecto",
        title: "Proyectos",
        page: Page::Project,
    },
];

/// Where `/` sends the browser.
pub const HOME: Page = Page::Group;

impl Page {
    /// Resolve a path against the route table.
    ///
    /// A single trailing slash is ignored. Anything else must match exactly.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        ROUTES.iter().find(|route| route.path == path).map(|route| route.page)
    }

    #[must_use]
    pub fn route(self) -> &'static RouteEntry {
        // Every variant has exactly one entry.
        match self {
            Self::Group => &ROUTES[0],
            Self::Inventory => &ROUTES[1],
            Self::Login => &ROUTES[2],
            Self::Planning => &ROUTES[3],
            Self::Project => &ROUTES[4],
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        self.route().path
    }

    /// The page component bound to this route.
    pub fn view(self) -> AnyView {
        match self {
            Self::Group => view! { <GroupPage/> }.into_any(),
            Self::Inventory => view! { <InventoryPage/> }.into_any(),
            Self::Login => view! { <LoginPage/> }.into_any(),
            Self::Planning => view! { <PlanningPage/> }.into_any(),
            Self::Project => view! { <ProjectPage/> }.into_any(),
        }
    }
}

/// Document title for a path: `"<page> | Gestor de Grupos"`, or the bare
/// application title for paths outside the table.
#[must_use]
pub fn document_title(path: &str) -> String {
    match Page::from_path(path) {
        Some(page) => format!("{} | {APP_TITLE}", page.route().title),
        None => APP_TITLE.to_owned(),
    }
}
