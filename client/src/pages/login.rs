//! Login page: a static email/password form.
//!
//! Nothing is validated or submitted. The button only logs.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::button::Button;

fn sign_in() {
    leptos::logging::log!("ingresar");
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let on_sign_in = Callback::new(|()| sign_in());

    view! {
        <section class="login-page row container-fluid justify-content-center">
            <div class="col-4">
                <h1>"Ingresar"</h1>
                <form class="login-page__form">
                    <div class="mb-3">
                        <label class="form-label" for="login-email">
                            "Correo Electronico"
                        </label>
                        <input class="form-control" id="login-email" name="email" type="email"/>
                    </div>
                    <div class="mb-3">
                        <label class="form-label" for="login-password">
                            "Contraseña"
                        </label>
                        <input class="form-control" id="login-password" name="password" type="password"/>
                    </div>
                    <Button label="Ingresar" action=on_sign_in/>
                </form>
            </div>
        </section>
    }
}
