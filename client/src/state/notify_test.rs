use super::*;

#[test]
fn show_replaces_current_notice_and_bumps_seq() {
    let mut state = NotifyState::default();
    state.show(Severity::Info, "primeiro");
    state.show(Severity::Error, "segundo");
    assert_eq!(state.seq, 2);
    let notice = state.current.unwrap();
    assert_eq!(notice.message, "segundo");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn clear_keeps_seq() {
    let mut state = NotifyState::default();
    state.show(Severity::Success, "ok");
    state.clear();
    assert_eq!(state.current, None);
    assert_eq!(state.seq, 1);
}

#[test]
fn severity_maps_to_class_suffixes() {
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Error.as_str(), "error");
}
