//! Form Component
//!
//! Renders a form layout, validates required fields on submit and sends the
//! data through the shared client. The client raises the outcome alert.

use a2p_academy::api::PageHost;
use a2p_academy::behavior::form::{
    collect, reset, validate_form, FieldKind, FormField, REQUIRED_FIELDS_MESSAGE,
};
use leptos::*;
use web_sys::SubmitEvent;

use crate::api::WindowHost;
use crate::state::GlobalState;

/// Which backend endpoint a form submits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Registration,
    Contact,
}

#[component]
pub fn FormView(
    kind: FormKind,
    layout: Vec<FormField>,
    #[prop(into)]
    submit_label: String,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let rendered = layout.clone();
    let fields = create_rw_signal(layout);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut valid = false;
        fields.update(|f| valid = validate_form(f));
        if !valid {
            WindowHost.alert(REQUIRED_FIELDS_MESSAGE);
            return;
        }

        let data = fields.with(|f| collect(f));
        let client = state.client.clone();
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = match kind {
                FormKind::Registration => client.submit_registration(&data).await,
                FormKind::Contact => client.submit_contact(&data).await,
            };
            if outcome.is_success() {
                fields.update(|f| reset(f));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="form-3d" on:submit=on_submit novalidate=true>
            {rendered
                .into_iter()
                .enumerate()
                .map(|(idx, field)| view! { <Field idx=idx field=field fields=fields /> })
                .collect_view()}

            <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}

/// One labelled input bound to its slot in the form's field list
#[component]
fn Field(idx: usize, field: FormField, fields: RwSignal<Vec<FormField>>) -> impl IntoView {
    let value = move || fields.with(|f| f.get(idx).map(|x| x.value.clone()).unwrap_or_default());
    let border = move || fields.with(|f| f.get(idx).map(FormField::border_color).unwrap_or_default());
    let invalid = move || fields.with(|f| f.get(idx).is_some_and(|x| x.invalid));
    let on_input = move |ev| {
        let v = event_target_value(&ev);
        fields.update(|f| {
            if let Some(x) = f.get_mut(idx) {
                x.value = v;
            }
        });
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=field.name.clone()
                name=field.name.clone()
                rows=5
                required=field.required
                aria-invalid=move || invalid().to_string()
                style:border-color=border
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
        kind => view! {
            <input
                id=field.name.clone()
                name=field.name.clone()
                type=kind.input_type()
                required=field.required
                aria-invalid=move || invalid().to_string()
                style:border-color=border
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div class="form-group">
            <label for=field.name.clone()>{label}</label>
            {input}
        </div>
    }
}
