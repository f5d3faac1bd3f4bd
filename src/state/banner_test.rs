use super::*;
use crate::test_helpers::ManualClock;
use futures::executor::{LocalPool, block_on};
use std::cell::RefCell;

type TestBanner = MessageBanner<Rc<RefCell<BannerState>>, ManualClock, futures::executor::LocalSpawner>;

const TIMING: DismissTiming = DismissTiming { display_ms: 5000, fade_ms: 300 };

fn banner(mode: SlotMode, pool: &LocalPool) -> (TestBanner, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(0.0));
    let store = Rc::new(RefCell::new(BannerState::new(mode)));
    (MessageBanner::new(store, clock.clone(), pool.spawner(), TIMING), clock)
}

fn texts(state: &BannerState) -> Vec<&str> {
    state.messages().iter().map(|m| m.text.as_str()).collect()
}

// =============================================================
// BannerState
// =============================================================

#[test]
fn single_slot_replaces_previous_message() {
    let mut state = BannerState::new(SlotMode::Single);
    state.push("first".into(), MessageKind::Info, 0.0);
    state.push("second".into(), MessageKind::Error, 1.0);
    assert_eq!(texts(&state), vec!["second"]);
    assert_eq!(state.messages()[0].kind, MessageKind::Error);
}

#[test]
fn stacked_mode_prepends_newest() {
    let mut state = BannerState::new(SlotMode::Stacked);
    state.push("older".into(), MessageKind::Info, 0.0);
    state.push("newer".into(), MessageKind::Success, 1.0);
    assert_eq!(texts(&state), vec!["newer", "older"]);
}

#[test]
fn push_assigns_distinct_ids_and_timestamp() {
    let mut state = BannerState::new(SlotMode::Stacked);
    let a = state.push("a".into(), MessageKind::Info, 10.0);
    let b = state.push("b".into(), MessageKind::Info, 20.0);
    assert_ne!(a, b);
    assert_eq!(state.messages()[0].created_at_ms, 20.0);
    assert!(!state.messages()[0].fading);
}

#[test]
fn begin_fade_marks_only_target() {
    let mut state = BannerState::new(SlotMode::Stacked);
    let a = state.push("a".into(), MessageKind::Info, 0.0);
    state.push("b".into(), MessageKind::Info, 0.0);
    assert!(state.begin_fade(a));
    assert!(state.messages()[1].fading);
    assert!(!state.messages()[0].fading);
}

#[test]
fn removing_twice_is_a_noop() {
    let mut state = BannerState::new(SlotMode::Single);
    let id = state.push("bye".into(), MessageKind::Info, 0.0);
    assert!(state.remove(id));
    assert!(!state.remove(id));
    assert!(!state.begin_fade(id));
    assert!(state.is_empty());
}

#[test]
fn kind_from_flash_category() {
    assert_eq!(MessageKind::from_category("success"), MessageKind::Success);
    assert_eq!(MessageKind::from_category("error"), MessageKind::Error);
    assert_eq!(MessageKind::from_category("danger"), MessageKind::Error);
    assert_eq!(MessageKind::from_category("warning"), MessageKind::Info);
    assert_eq!(MessageKind::from_category("message"), MessageKind::Info);
}

// =============================================================
// MessageBanner
// =============================================================

#[test]
fn show_then_dismiss_empties_single_slot() {
    let mut pool = LocalPool::new();
    let (banner, clock) = banner(SlotMode::Single, &pool);
    banner.show("old", MessageKind::Info);
    banner.show("Saved", MessageKind::Success);

    let only = banner.store().observe(|b| texts(b).join(",")).unwrap();
    assert_eq!(only, "Saved");

    pool.run_until_stalled();
    assert!(banner.store().observe(BannerState::is_empty).unwrap());
    // "old" was replaced before its timer fired, so it never faded.
    let mut sleeps = clock.sleeps();
    sleeps.sort_unstable();
    assert_eq!(sleeps, vec![300, 5000, 5000]);
}

#[test]
fn stacked_messages_each_expire() {
    let mut pool = LocalPool::new();
    let (banner, clock) = banner(SlotMode::Stacked, &pool);
    banner.show("one", MessageKind::Info);
    banner.show("two", MessageKind::Error);
    assert_eq!(banner.store().observe(|b| b.messages().len()).unwrap(), 2);

    pool.run_until_stalled();
    assert!(banner.store().observe(BannerState::is_empty).unwrap());
    assert_eq!(clock.sleeps().iter().filter(|ms| **ms == 300).count(), 2);
}

#[test]
fn dismiss_after_skips_fade_when_already_removed() {
    let clock = Rc::new(ManualClock::new(0.0));
    let store = Rc::new(RefCell::new(BannerState::new(SlotMode::Single)));
    let id = store.borrow_mut().push("gone".into(), MessageKind::Info, 0.0);
    store.borrow_mut().remove(id);

    block_on(dismiss_after(store.clone(), clock.clone(), id, TIMING));
    assert_eq!(clock.sleeps(), vec![5000]);
    assert!(store.borrow().is_empty());
}

#[test]
fn show_records_clock_time() {
    let pool = LocalPool::new();
    let clock = Rc::new(ManualClock::new(42.0));
    let store = Rc::new(RefCell::new(BannerState::new(SlotMode::Single)));
    let banner = MessageBanner::new(store.clone(), clock, pool.spawner(), TIMING);
    banner.show("hi", MessageKind::Info);
    assert_eq!(store.borrow().messages()[0].created_at_ms, 42.0);
}

#[test]
fn timing_comes_from_config() {
    let config = UiConfig { message_dismiss_ms: 100, message_fade_ms: 10, ..UiConfig::default() };
    assert_eq!(DismissTiming::from(&config), DismissTiming { display_ms: 100, fade_ms: 10 });
}

// =============================================================
// Flashed messages
// =============================================================

#[test]
fn parse_flashed_maps_categories_in_order() {
    let parsed = parse_flashed(r#"[["success","Campaign created"],["danger","Upload failed"]]"#).unwrap();
    assert_eq!(parsed, vec![
        (MessageKind::Success, "Campaign created".to_owned()),
        (MessageKind::Error, "Upload failed".to_owned()),
    ]);
}

#[test]
fn seed_flashed_shows_each_message() {
    let mut pool = LocalPool::new();
    let (banner, _clock) = banner(SlotMode::Stacked, &pool);
    let count = banner.seed_flashed(r#"[["info","a"],["error","b"]]"#);
    assert_eq!(count, 2);
    assert_eq!(banner.store().observe(|b| texts(b).join(",")).unwrap(), "b,a");
    pool.run_until_stalled();
    assert!(banner.store().observe(BannerState::is_empty).unwrap());
}

#[test]
fn seed_flashed_ignores_malformed_blob() {
    let pool = LocalPool::new();
    let (banner, _clock) = banner(SlotMode::Stacked, &pool);
    assert_eq!(banner.seed_flashed(r#"{"success":"nope"}"#), 0);
    assert!(banner.store().observe(BannerState::is_empty).unwrap());
}
