//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::nav_menu::NavMenu;
use crate::routes::{Page, document_title};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href=BOOTSTRAP_CSS/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Renders the navigation menu above the routed page. Segments here must
/// spell the paths in `crate::routes::ROUTES`; views come from `Page::view`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gestor.css"/>
        <Router>
            <PageTitle/>
            <NavMenu/>
            <main class="app-main">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=StaticSegment("grupo") view=|| Page::Group.view()/>
                    <Route
                        path=(StaticSegment("grupo"), StaticSegment("planificacion"), StaticSegment("inventario"))
                        view=|| Page::Inventory.view()
                    />
                    <Route path=StaticSegment("login") view=|| Page::Login.view()/>
                    <Route path=(StaticSegment("grupo"), StaticSegment("planificacion")) view=|| Page::Planning.view()/>
                    <Route
                        path=(StaticSegment("grupo"), StaticSegment("planificacion"), StaticSegment("proyecto"))
                        view=|| Page::Project.view()
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Keeps the document title in step with the current path.
#[component]
fn PageTitle() -> impl IntoView {
    let location = use_location();
    let text = move || location.pathname.with(|path| document_title(path));

    view! { <Title text=text/> }
}
