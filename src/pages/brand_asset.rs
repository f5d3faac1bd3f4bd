//! Brand asset page with a delete action.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::action_button::ActionButton;
use crate::net::actions::{ActionRequest, parse_resource_id};
use crate::net::submit::SubmitOutcome;

#[component]
pub fn BrandAssetPage() -> impl IntoView {
    let params = use_params_map();
    let asset_id = move || params.read().get("id").as_deref().and_then(parse_resource_id);
    let deleted = RwSignal::new(false);

    let on_deleted = Callback::new(move |outcome: SubmitOutcome| {
        if outcome.is_accepted() {
            deleted.set(true);
        }
    });

    view! {
        <div class="brand-asset-page">
            {move || match (asset_id(), deleted.get()) {
                (None, _) => view! { <p>"Asset not found."</p> }.into_any(),
                (Some(_), true) => view! { <p>"Asset deleted."</p> }.into_any(),
                (Some(id), false) => {
                    view! {
                        <h1>{format!("Brand asset #{id}")}</h1>
                        <ActionButton
                            label="Delete asset"
                            request=ActionRequest::DeleteBrandAsset(id)
                            on_done=on_deleted
                            class="btn btn--danger"
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
