//! Helpers for rendering components to HTML in unit tests.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Byte offsets of each needle in `html`, in the order given.
///
/// Panics if a needle is missing.
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("`{needle}` not found in {html}")))
        .collect()
}
