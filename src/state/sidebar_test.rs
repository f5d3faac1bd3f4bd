use super::*;

fn outside(width: f64) -> ClickContext {
    ClickContext { viewport_width: width, inside_sidebar: false, on_toggle: false }
}

fn open_sidebar() -> SidebarState {
    let mut state = SidebarState::default();
    state.toggle();
    state
}

#[test]
fn starts_closed() {
    assert!(!SidebarState::default().is_open());
}

#[test]
fn toggle_flips_state() {
    let mut state = SidebarState::default();
    state.toggle();
    assert!(state.is_open());
    state.toggle();
    assert!(!state.is_open());
}

#[test]
fn outside_click_on_narrow_viewport_closes() {
    let mut state = open_sidebar();
    assert!(state.handle_click(outside(500.0)));
    assert!(!state.is_open());
}

#[test]
fn outside_click_at_breakpoint_closes() {
    let mut state = open_sidebar();
    assert!(state.handle_click(outside(768.0)));
}

#[test]
fn outside_click_on_wide_viewport_keeps_open() {
    let mut state = open_sidebar();
    assert!(!state.handle_click(outside(1024.0)));
    assert!(state.is_open());
}

#[test]
fn clicks_inside_sidebar_or_on_toggle_are_ignored() {
    let mut state = open_sidebar();
    assert!(!state.handle_click(ClickContext { inside_sidebar: true, ..outside(500.0) }));
    assert!(!state.handle_click(ClickContext { on_toggle: true, ..outside(500.0) }));
    assert!(state.is_open());
}

#[test]
fn click_while_closed_is_noop() {
    let mut state = SidebarState::default();
    assert!(!state.handle_click(outside(320.0)));
    assert!(!state.is_open());
}

#[test]
fn custom_breakpoint_is_respected() {
    let mut state = SidebarState::new(1200.0);
    state.toggle();
    assert!(state.handle_click(outside(1024.0)));
}
