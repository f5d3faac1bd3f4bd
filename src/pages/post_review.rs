//! Post approval page: approve outright, or reject with a note.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;

use crate::components::action_button::ActionButton;
use crate::net::actions::{ActionRequest, parse_resource_id};

#[component]
pub fn PostReviewPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.read().get("id").as_deref().and_then(parse_resource_id);
    let note = RwSignal::new(String::new());

    view! {
        <div class="review-page">
            {move || match post_id() {
                None => view! { <p class="review-page__missing">"Post not found."</p> }.into_any(),
                Some(id) => {
                    let reject = Signal::derive(move || ActionRequest::RejectPost { post_id: id, note: note.get() });
                    view! {
                        <h1>{format!("Review post #{id}")}</h1>
                        <textarea
                            class="form-control review-page__note"
                            placeholder="Feedback for the author"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                        <div class="review-page__actions">
                            <ActionButton label="Approve" request=ActionRequest::ApprovePost(id) class="btn btn--primary"/>
                            <ActionButton label="Reject" request=reject class="btn btn--danger"/>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
