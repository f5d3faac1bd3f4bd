//! Toggle-style action endpoints (approve, reject, toggle, delete).
//!
//! These share the submit envelope but are posted directly from buttons
//! rather than through a form, so they bypass the control guard.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use serde_json::{Map, Value, json};

use super::submit::SubmitOutcome;
use super::transport::Transport;
use super::types::SubmitResponse;

pub const REJECTION_NOTE_REQUIRED: &str = "Rejection note is required";

fn approve_post_endpoint(post_id: u64) -> String {
    format!("/api/posts/{post_id}/approve")
}

fn reject_post_endpoint(post_id: u64) -> String {
    format!("/api/posts/{post_id}/reject")
}

fn toggle_campaign_endpoint(campaign_id: u64) -> String {
    format!("/api/campaigns/{campaign_id}/toggle")
}

fn delete_brand_asset_endpoint(asset_id: u64) -> String {
    format!("/brand-assets/{asset_id}/delete")
}

/// POST `body` to an action endpoint and classify the reply.
pub async fn post_action<T: Transport + ?Sized>(transport: &T, url: &str, body: &Value) -> SubmitOutcome {
    SubmitOutcome::from_reply(transport.post_json(url, body).await)
}

/// Approve a pending post.
pub async fn approve_post<T: Transport + ?Sized>(transport: &T, post_id: u64) -> SubmitOutcome {
    post_action(transport, &approve_post_endpoint(post_id), &json!({})).await
}

/// Reject a pending post with feedback. A blank note is refused locally.
pub async fn reject_post<T: Transport + ?Sized>(transport: &T, post_id: u64, note: &str) -> SubmitOutcome {
    let note = note.trim();
    if note.is_empty() {
        return local_rejection(REJECTION_NOTE_REQUIRED);
    }
    post_action(transport, &reject_post_endpoint(post_id), &json!({ "note": note })).await
}

/// Flip a campaign's active flag.
pub async fn toggle_campaign<T: Transport + ?Sized>(transport: &T, campaign_id: u64) -> SubmitOutcome {
    post_action(transport, &toggle_campaign_endpoint(campaign_id), &json!({})).await
}

/// Retire a brand asset.
pub async fn delete_brand_asset<T: Transport + ?Sized>(transport: &T, asset_id: u64) -> SubmitOutcome {
    post_action(transport, &delete_brand_asset_endpoint(asset_id), &json!({})).await
}

/// One button-triggered action, as a value views can hold in a signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionRequest {
    ApprovePost(u64),
    RejectPost { post_id: u64, note: String },
    ToggleCampaign(u64),
    DeleteBrandAsset(u64),
}

/// Send `request` through the matching endpoint helper.
pub async fn perform<T: Transport + ?Sized>(transport: &T, request: &ActionRequest) -> SubmitOutcome {
    match request {
        ActionRequest::ApprovePost(id) => approve_post(transport, *id).await,
        ActionRequest::RejectPost { post_id, note } => reject_post(transport, *post_id, note).await,
        ActionRequest::ToggleCampaign(id) => toggle_campaign(transport, *id).await,
        ActionRequest::DeleteBrandAsset(id) => delete_brand_asset(transport, *id).await,
    }
}

/// Parse a numeric id from a route segment.
pub fn parse_resource_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// The campaign's new state from a toggle reply, if the server sent one.
pub fn campaign_is_active(outcome: &SubmitOutcome) -> Option<bool> {
    match outcome {
        SubmitOutcome::Accepted(resp) => resp.get("is_active").and_then(Value::as_bool),
        _ => None,
    }
}

fn local_rejection(error: &str) -> SubmitOutcome {
    let mut payload = Map::new();
    payload.insert("success".to_owned(), Value::Bool(false));
    payload.insert("error".to_owned(), Value::String(error.to_owned()));
    SubmitOutcome::Rejected(SubmitResponse::from_payload(payload))
}
