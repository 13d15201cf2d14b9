use candle_chart_wasm::application::ListenerGuard;
use std::cell::Cell;

#[test]
fn second_attach_is_a_no_op() {
    let attached = Cell::new(0);
    let mut guard = ListenerGuard::new();

    assert!(guard.attach_with(|| {
        attached.set(attached.get() + 1);
        vec!["pointermove", "pointerdown", "pointerup", "wheel", "keydown", "keyup"]
    }));
    assert!(!guard.attach_with(|| {
        attached.set(attached.get() + 1);
        vec!["pointermove"]
    }));

    assert_eq!(attached.get(), 1);
    assert_eq!(guard.attach_count(), 1);
    assert!(guard.is_attached());
}

#[test]
fn detach_hands_back_the_handles_and_allows_reattach() {
    let mut guard = ListenerGuard::new();
    guard.attach_with(|| 7u32);

    assert_eq!(guard.detach(), Some(7));
    assert!(!guard.is_attached());
    assert_eq!(guard.detach(), None);

    assert!(guard.attach_with(|| 8u32));
    assert_eq!(guard.attach_count(), 2);
}
