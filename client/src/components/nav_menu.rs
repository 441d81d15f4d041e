//! Static navigation list built from the route table.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::ROUTES;

/// One link per declared route, in route-table order.
///
/// Must be rendered inside a `<Router>`. The link for the current path gets
/// `aria-current="page"`.
#[component]
pub fn NavMenu() -> impl IntoView {
    view! {
        <nav class="nav-menu">
            <ul class="nav">
                {ROUTES
                    .iter()
                    .map(|route| {
                        view! {
                            <li class="nav-item">
                                <A href=route.path exact=true>
                                    {route.label}
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
