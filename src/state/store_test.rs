use super::*;

#[test]
fn rc_store_mutates_and_observes() {
    let store = Rc::new(RefCell::new(1_u32));
    assert_eq!(store.mutate(|v| {
        *v += 1;
        *v * 10
    }), Some(20));
    assert_eq!(store.observe(|v| *v), Some(2));
}

#[test]
fn rc_store_clones_share_state() {
    let store = Rc::new(RefCell::new(Vec::<u8>::new()));
    let other = store.clone();
    other.mutate(|v| v.push(7));
    assert_eq!(store.observe(Vec::len), Some(1));
}
