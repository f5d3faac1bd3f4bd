use super::*;
use crate::net::transport::TransportError;
use crate::state::banner::MessageKind;
use crate::test_helpers::{Recorded, ScriptedTransport};
use futures::executor::block_on;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(approve_post_endpoint(12), "/api/posts/12/approve");
    assert_eq!(reject_post_endpoint(12), "/api/posts/12/reject");
    assert_eq!(toggle_campaign_endpoint(3), "/api/campaigns/3/toggle");
    assert_eq!(delete_brand_asset_endpoint(9), "/brand-assets/9/delete");
}

#[test]
fn approve_post_posts_empty_json() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "success": true, "message": "Post approved successfully" }));
    let outcome = block_on(approve_post(&transport, 12));
    assert!(outcome.is_accepted());
    assert_eq!(transport.requests(), vec![Recorded::Json { url: "/api/posts/12/approve".into(), body: json!({}) }]);
}

#[test]
fn reject_post_sends_trimmed_note() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "success": true }));
    block_on(reject_post(&transport, 4, "  too salesy "));
    assert_eq!(transport.requests(), vec![Recorded::Json {
        url: "/api/posts/4/reject".into(),
        body: json!({ "note": "too salesy" }),
    }]);
}

#[test]
fn reject_post_refuses_blank_note_without_request() {
    let transport = ScriptedTransport::new();
    let outcome = block_on(reject_post(&transport, 4, "   "));
    assert_eq!(outcome.banner_text(), (MessageKind::Error, REJECTION_NOTE_REQUIRED.to_owned()));
    assert!(transport.requests().is_empty());
}

#[test]
fn toggle_campaign_exposes_new_state() {
    let transport = ScriptedTransport::new();
    transport.reply_json(200, json!({ "success": true, "is_active": false, "message": "Campaign deactivated" }));
    let outcome = block_on(toggle_campaign(&transport, 3));
    assert_eq!(campaign_is_active(&outcome), Some(false));
    assert_eq!(outcome.banner_text(), (MessageKind::Success, "Campaign deactivated".to_owned()));
}

#[test]
fn campaign_state_absent_on_failure() {
    let transport = ScriptedTransport::new();
    transport.reply_json(404, json!({ "error": "Campaign not found" }));
    let outcome = block_on(toggle_campaign(&transport, 3));
    assert_eq!(campaign_is_active(&outcome), None);
    assert_eq!(outcome.banner_text(), (MessageKind::Error, "Campaign not found".to_owned()));
}

#[test]
fn delete_brand_asset_reports_transport_failure() {
    let transport = ScriptedTransport::new();
    transport.reply(Err(TransportError::Network("reset".into())));
    let outcome = block_on(delete_brand_asset(&transport, 9));
    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
}

// =============================================================
// ActionRequest
// =============================================================

#[test]
fn perform_routes_each_request_to_its_endpoint() {
    let transport = ScriptedTransport::new();
    for _ in 0..4 {
        transport.reply_json(200, json!({ "success": true }));
    }
    let requests = [
        ActionRequest::ApprovePost(1),
        ActionRequest::RejectPost { post_id: 2, note: "off brand".into() },
        ActionRequest::ToggleCampaign(3),
        ActionRequest::DeleteBrandAsset(4),
    ];
    for request in &requests {
        assert!(block_on(perform(&transport, request)).is_accepted());
    }

    let urls: Vec<String> = transport
        .requests()
        .into_iter()
        .map(|r| match r {
            Recorded::Json { url, .. } => url,
            other => panic!("unexpected request {other:?}"),
        })
        .collect();
    assert_eq!(urls, vec![
        "/api/posts/1/approve",
        "/api/posts/2/reject",
        "/api/campaigns/3/toggle",
        "/brand-assets/4/delete",
    ]);
}

#[test]
fn perform_keeps_local_note_check() {
    let transport = ScriptedTransport::new();
    let outcome = block_on(perform(&transport, &ActionRequest::RejectPost { post_id: 2, note: String::new() }));
    assert!(!outcome.is_accepted());
    assert!(transport.requests().is_empty());
}

#[test]
fn resource_ids_parse_from_route_segments() {
    assert_eq!(parse_resource_id("42"), Some(42));
    assert_eq!(parse_resource_id(" 7 "), Some(7));
    assert_eq!(parse_resource_id("abc"), None);
    assert_eq!(parse_resource_id("-1"), None);
}
