use a2p_academy::behavior::form::contact_form;
use leptos::*;

use crate::components::{FormKind, FormView};

/// Contact inquiry page
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="form-page">
            <h1>"Contact Us"</h1>
            <p class="subtitle">"Questions about programs, fees or schedules? Send us a message."</p>
            <FormView kind=FormKind::Contact layout=contact_form() submit_label="Send Message" />
        </section>
    }
}
