use super::*;
use crate::state::banner::{MessageKind, SlotMode};

#[test]
fn message_style_hides_fading_messages() {
    let mut state = BannerState::new(SlotMode::Single);
    let id = state.push("Saved".into(), MessageKind::Success, 0.0);
    assert_eq!(message_style(&state.messages()[0], 300), "opacity: 1; transition: opacity 300ms;");

    state.begin_fade(id);
    assert_eq!(message_style(&state.messages()[0], 300), "opacity: 0; transition: opacity 300ms;");
}
