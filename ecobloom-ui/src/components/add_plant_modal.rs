//! Add Plant Modal
//!
//! Form for adding a plant to the catalog. Validation failures are shown as
//! a blocking alert and nothing is sent.

use leptos::*;

use ecobloom::form::AddPlantForm;
use ecobloom::model::WateringTime;
use ecobloom::view::ModalState;

use crate::components::Backdrop;
use crate::state::global::GlobalState;

type FieldAccess = fn(&mut AddPlantForm) -> &mut String;

#[component]
pub fn AddPlantModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || (state.modal.get() == ModalState::AddPlant).then(|| view! {
            <Backdrop>
                <AddPlantBody />
            </Backdrop>
        })}
    }
}

#[component]
fn AddPlantBody() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let form = create_rw_signal(AddPlantForm::new());
    let (submitting, set_submitting) = create_signal(false);

    let close = {
        let state = state.clone();
        move |_| {
            form.update(|f| f.reset());
            state.modal.update(|m| m.close());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let plant = match form.with_untracked(|f| f.validate()) {
            Ok(plant) => plant,
            Err(e) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&e.to_string());
                }
                return;
            }
        };

        set_submitting.set(true);
        let state = state.clone();
        spawn_local(async move {
            if state.add_plant(plant).await {
                form.update(|f| f.reset());
                state.modal.update(|m| m.close());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <button on:click=close class="absolute top-3 right-4 text-2xl text-gray-500">"×"</button>
        <form on:submit=on_submit class="p-6 space-y-4">
            <h2 class="text-2xl font-bold">"🌿 Add New Plant"</h2>

            <TextField label="Plant Name *" form=form field=|f| &mut f.name />
            <TextField label="Scientific Name" form=form field=|f| &mut f.scientific_name />
            <TextField label="Image URL" form=form field=|f| &mut f.image_url />
            <TextField label="Watering Frequency" form=form field=|f| &mut f.watering_frequency />

            <div>
                <span class="block text-sm text-gray-600 mb-2">"Best Watering Times *"</span>
                <div class="flex space-x-4">
                    {WateringTime::ALL
                        .into_iter()
                        .map(|time| view! { <TimeCheckbox form=form time=time /> })
                        .collect_view()}
                </div>
            </div>

            <TextField label="Sunlight" form=form field=|f| &mut f.sunlight />
            <TextField label="Soil Requirements" form=form field=|f| &mut f.soil />
            <TextField label="Fertilizer" form=form field=|f| &mut f.fertilizer />
            <TextField label="Growth Type" form=form field=|f| &mut f.growth_type />
            <TextField label="Care Tips" form=form field=|f| &mut f.care_tips />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-green-600 hover:bg-green-700 disabled:bg-gray-400
                       disabled:cursor-not-allowed text-white rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Adding..." } else { "Add Plant" }}
            </button>
        </form>
    }
}

#[component]
fn TextField(label: &'static str, form: RwSignal<AddPlantForm>, field: FieldAccess) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-600 mb-1">{label}</span>
            <input
                type="text"
                prop:value=move || {
                    let mut draft = form.get();
                    field(&mut draft).clone()
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *field(f) = value);
                }
                class="w-full rounded-lg px-4 py-2 border border-gray-300 focus:border-green-500 focus:outline-none"
            />
        </label>
    }
}

#[component]
fn TimeCheckbox(form: RwSignal<AddPlantForm>, time: WateringTime) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2">
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.watering_times.contains(&time))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|f| f.set_watering_time(time, checked));
                }
            />
            <span>{format!("{} {}", time.icon(), time.label())}</span>
        </label>
    }
}
