use a2p_academy::behavior::form::registration_form;
use leptos::*;

use crate::components::{FormKind, FormView};

/// Student registration page
#[component]
pub fn Register() -> impl IntoView {
    view! {
        <section class="form-page">
            <h1>"Register"</h1>
            <p class="subtitle">"Tell us about yourself and the course you are interested in."</p>
            <FormView kind=FormKind::Registration layout=registration_form() submit_label="Submit Registration" />
        </section>
    }
}
