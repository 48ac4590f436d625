use super::*;

fn event(line: &str) -> ScriptEvent {
    parse_line(line).unwrap().unwrap().event
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_line("").unwrap(), None);
    assert_eq!(parse_line("   ").unwrap(), None);
    assert_eq!(parse_line("# warm-up").unwrap(), None);
}

#[test]
fn layout_with_clock() {
    let line = parse_line(r#"{"event":"layout","width":1920,"height":1080,"at_ms":16.5}"#).unwrap().unwrap();
    assert_eq!(line.at_ms, Some(16.5));
    assert_eq!(line.event, ScriptEvent::Layout { width: 1920, height: 1080 });
}

#[test]
fn clock_is_optional() {
    let line = parse_line(r#"{"event":"back"}"#).unwrap().unwrap();
    assert_eq!(line.at_ms, None);
    assert_eq!(line.event, ScriptEvent::Back);
}

#[test]
fn key_by_name_defaults_to_first_down() {
    assert_eq!(
        event(r#"{"event":"key","code":"dpad_down"}"#),
        ScriptEvent::Key { code: KeyInput::Named(KeyCode::DpadDown), action: KeyAction::Down, repeat: 0 }
    );
}

#[test]
fn key_by_android_code_with_repeat_and_up() {
    let ScriptEvent::Key { code, action, repeat } = event(r#"{"event":"key","code":20,"action":"up","repeat":3}"#)
    else {
        panic!("expected key event");
    };
    assert_eq!(KeyCode::from(code), KeyCode::DpadDown);
    assert_eq!(action, KeyAction::Up);
    assert_eq!(repeat, 3);
}

#[test]
fn unknown_android_code_passes_through() {
    let ScriptEvent::Key { code, .. } = event(r#"{"event":"key","code":4}"#) else {
        panic!("expected key event");
    };
    assert_eq!(KeyCode::from(code), KeyCode::Other(4));
}

#[test]
fn bridge_result_keeps_raw_text() {
    assert_eq!(
        event(r#"{"event":"bridge_result","op":"toggle_fullscreen","raw":"\"entered\""}"#),
        ScriptEvent::BridgeResult { op: BridgeOp::ToggleFullscreen, document: None, raw: "\"entered\"".to_owned() }
    );
}

#[test]
fn bridge_result_may_name_its_document() {
    assert_eq!(
        event(r#"{"event":"bridge_result","op":"click","document":2,"raw":"true"}"#),
        ScriptEvent::BridgeResult { op: BridgeOp::Click, document: Some(DocumentId(2)), raw: "true".to_owned() }
    );
}

#[test]
fn remaining_events_parse() {
    assert_eq!(event(r#"{"event":"dpr","value":2.0}"#), ScriptEvent::Dpr { value: 2.0 });
    assert_eq!(event(r#"{"event":"tick","now_ms":110}"#), ScriptEvent::Tick { now_ms: 110.0 });
    assert_eq!(event(r#"{"event":"page_finished"}"#), ScriptEvent::PageFinished);
    assert_eq!(event(r#"{"event":"show_custom_view","view":7}"#), ScriptEvent::ShowCustomView { view: 7 });
    assert_eq!(event(r#"{"event":"hide_custom_view"}"#), ScriptEvent::HideCustomView);
    assert_eq!(event(r#"{"event":"can_go_back","value":true}"#), ScriptEvent::CanGoBack { value: true });
}

#[test]
fn unknown_event_is_an_error() {
    assert!(parse_line(r#"{"event":"swipe"}"#).is_err());
    assert!(parse_line("not json").is_err());
}
