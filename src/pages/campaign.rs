//! Campaign page with the active/paused toggle.

#[cfg(test)]
#[path = "campaign_test.rs"]
mod campaign_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::action_button::ActionButton;
use crate::net::actions::{ActionRequest, campaign_is_active, parse_resource_id};
use crate::net::submit::SubmitOutcome;

fn status_label(active: Option<bool>) -> &'static str {
    match active {
        Some(true) => "Active",
        Some(false) => "Paused",
        None => "Unknown",
    }
}

#[component]
pub fn CampaignPage() -> impl IntoView {
    let params = use_params_map();
    let campaign_id = move || params.read().get("id").as_deref().and_then(parse_resource_id);
    // Only known after the first toggle reply.
    let active = RwSignal::new(None::<bool>);

    let on_toggled = Callback::new(move |outcome: SubmitOutcome| {
        if let Some(state) = campaign_is_active(&outcome) {
            active.set(Some(state));
        }
    });

    view! {
        <div class="campaign-page">
            {move || match campaign_id() {
                None => view! { <p class="campaign-page__missing">"Campaign not found."</p> }.into_any(),
                Some(id) => {
                    view! {
                        <h1>{format!("Campaign #{id}")}</h1>
                        <p class="campaign-page__status">"Status: " {move || status_label(active.get())}</p>
                        <ActionButton
                            label="Toggle active"
                            request=ActionRequest::ToggleCampaign(id)
                            on_done=on_toggled
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
