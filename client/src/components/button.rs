//! Button wrapper binding a label to a zero-argument action.
//!
//! The action runs synchronously, once per click. There is no debouncing and
//! no disabled state while it runs; a panicking action propagates.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

/// Run the action bound to a button. Called once per activation.
pub fn activate(action: Callback<()>) {
    action.run(());
}

/// A `<button type="button">` that invokes `action` when clicked.
#[component]
pub fn Button(#[prop(into)] label: String, action: Callback<()>) -> impl IntoView {
    view! {
        <button class="btn btn-primary" type="button" on:click=move |_| activate(action)>
            {label}
        </button>
    }
}
