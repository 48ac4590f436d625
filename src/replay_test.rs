use serde_json::{Value, json};

use super::*;

fn replay(script: &str) -> Vec<Value> {
    let out = run(script.as_bytes(), Vec::new(), PointerConfig::default(), false).unwrap();
    String::from_utf8(out).unwrap().lines().map(|l| serde_json::from_str(l).unwrap()).collect()
}

fn calls(records: &[Value]) -> Vec<&str> {
    records.iter().map(|r| r["call"].as_str().unwrap()).collect()
}

#[test]
fn session_starts_with_load_url() {
    let out = replay("");
    assert_eq!(out, vec![json!({ "call": "load_url", "url": pointer::consts::DEFAULT_START_URL })]);
}

#[test]
fn layout_then_move_down() {
    let out = replay(
        r#"{"event":"layout","width":1920,"height":1080}
{"event":"key","code":"dpad_down","at_ms":100}
{"event":"tick","now_ms":210}"#,
    );
    assert_eq!(out[1], json!({ "call": "cursor_moved", "x": 960.0, "y": 540.0 }));
    assert_eq!(out[2], json!({ "call": "cursor_moved", "x": 960.0, "y": 600.0 }));
    assert_eq!(out[3], json!({ "call": "evaluate_script", "op": "move", "document": 0 }));
    assert_eq!(out[4], json!({ "call": "key", "code": "dpad_down", "handled": true }));
    assert_eq!(out[5], json!({ "call": "frame", "x": 960.0, "y": 600.0, "animating": false }));
    assert_eq!(out.len(), 6);
}

#[test]
fn frame_mid_glide_reports_animating() {
    let out = replay(
        r#"{"event":"layout","width":1920,"height":1080}
{"event":"key","code":20,"at_ms":100}
{"event":"tick","now_ms":150}"#,
    );
    let frame = out.last().unwrap();
    assert_eq!(frame["animating"], json!(true));
    let y = frame["y"].as_f64().unwrap();
    assert!(y > 540.0 && y < 600.0);
}

#[test]
fn activate_miss_and_reply() {
    let out = replay(
        r#"{"event":"layout","width":1920,"height":1080}
{"event":"key","code":"enter"}
{"event":"bridge_result","op":"click","raw":"false"}"#,
    );
    assert_eq!(calls(&out), vec!["load_url", "cursor_moved", "evaluate_script", "key", "reply"]);
    assert_eq!(out[2]["op"], json!("click"));
    assert_eq!(out[3]["handled"], json!(true));
    assert_eq!(out[4], json!({ "call": "reply", "op": "click", "reply": "failure" }));
}

#[test]
fn back_key_is_not_handled() {
    let out = replay(r#"{"event":"key","code":4}"#);
    assert_eq!(out[1], json!({ "call": "key", "code": { "other": 4 }, "handled": false }));
}

#[test]
fn native_fullscreen_reentry_and_back() {
    let out = replay(
        r#"{"event":"show_custom_view","view":1}
{"event":"show_custom_view","view":2}
{"event":"can_go_back","value":true}
{"event":"back"}
{"event":"back"}"#,
    );
    assert_eq!(
        &out[1..],
        &[
            json!({ "call": "present_custom_view", "view": 1 }),
            json!({ "call": "dismissed", "view": 2 }),
            json!({ "call": "remove_custom_view", "view": 1 }),
            json!({ "call": "dismissed", "view": 1 }),
            json!({ "call": "go_back" }),
        ]
    );
}

#[test]
fn evaluations_carry_document_generation() {
    let out = replay(
        r#"{"event":"key","code":"media_next"}
{"event":"page_finished"}
{"event":"bridge_result","op":"toggle_fullscreen","document":0,"raw":"\"entered\""}
{"event":"key","code":"media_next"}"#,
    );
    let evals: Vec<(&Value, &Value)> =
        out.iter().filter(|r| r["call"] == "evaluate_script").map(|r| (&r["op"], &r["document"])).collect();
    assert_eq!(
        evals,
        vec![
            (&json!("toggle_fullscreen"), &json!(0)),
            (&json!("hide_cursor"), &json!(1)),
            (&json!("toggle_fullscreen"), &json!(1)),
        ]
    );
    assert_eq!(out[4], json!({ "call": "reply", "op": "toggle_fullscreen", "reply": "entered" }));
}

#[test]
fn back_without_history_finishes() {
    let out = replay(r#"{"event":"back"}"#);
    assert_eq!(out[1], json!({ "call": "finish" }));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let out = replay("# nothing yet\n\n{\"event\":\"page_finished\"}\n");
    assert_eq!(out[1], json!({ "call": "evaluate_script", "op": "hide_cursor", "document": 1 }));
}

#[test]
fn malformed_line_reports_its_number() {
    let err = run("# header\n{\"event\":\"nope\"}\n".as_bytes(), Vec::new(), PointerConfig::default(), false)
        .unwrap_err();
    assert!(matches!(err, ReplayError::Parse { line: 2, .. }), "{err}");
}

#[test]
fn full_scripts_flag_carries_source() {
    let out = run(
        "{\"event\":\"layout\",\"width\":100,\"height\":100}\n{\"event\":\"key\",\"code\":\"dpad_up\"}".as_bytes(),
        Vec::new(),
        PointerConfig::default(),
        true,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("b.move(50, 0)"));
}
