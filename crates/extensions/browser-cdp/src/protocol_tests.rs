use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 1,
        method: "Page.navigate".to_string(),
        params: Some(serde_json::json!({"url": "https://example.com"})),
        session_id: Some("S1".to_string()),
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("Page.navigate"));
    assert!(json.contains("example.com"));
    assert!(json.contains(r#""sessionId":"S1""#));
}

#[test]
fn test_cdp_request_omits_empty_fields() {
    let req = CdpRequest {
        id: 7,
        method: "Target.getTargets".to_string(),
        params: None,
        session_id: None,
    };
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"id":7,"method":"Target.getTargets"}"#
    );
}

#[test]
fn test_cdp_response_deserialize() {
    let json = r#"{"id": 1, "result": {"frameId": "abc"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(1));
    assert!(resp.result.is_some());
    assert!(resp.error.is_none());
}

#[test]
fn test_cdp_error_response_deserialize() {
    let json = r#"{"id": 3, "error": {"code": -32000, "message": "Browser window not found"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, -32000);
    assert_eq!(error.message, "Browser window not found");
}

#[test]
fn test_page_info_deserialize() {
    let json = r#"{
        "id": "page123",
        "type": "page",
        "title": "Test",
        "url": "https://example.com",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/page123"
    }"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.id, "page123");
    assert!(info.is_page());
}

#[test]
fn test_service_worker_is_not_page() {
    let json = r#"{"id": "sw1", "type": "service_worker", "title": "", "url": "chrome-extension://x/bg.js"}"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert!(!info.is_page());
}

#[test]
fn test_window_for_target_deserialize() {
    let json = r#"{
        "windowId": 12,
        "bounds": {"left": 100, "top": 40, "width": 1200, "height": 900, "windowState": "normal"}
    }"#;
    let window: WindowForTarget = serde_json::from_str(json).unwrap();
    assert_eq!(window.window_id, 12);
    assert_eq!(window.bounds.left, Some(100));
    assert_eq!(window.bounds.window_state, Some(WindowState::Normal));
}

#[test]
fn test_window_bounds_serialize_state_only() {
    let bounds = WindowBounds {
        window_state: Some(WindowState::Maximized),
        ..Default::default()
    };
    assert_eq!(
        serde_json::to_string(&bounds).unwrap(),
        r#"{"windowState":"maximized"}"#
    );
}

#[test]
fn test_evaluate_result_value() {
    let json = r#"{"result": {"type": "object", "value": {"availWidth": 2560, "availHeight": 1400}}}"#;
    let result: EvaluateResult = serde_json::from_str(json).unwrap();
    assert!(result.exception_details.is_none());
    assert_eq!(result.result.value.unwrap()["availWidth"], 2560);
}

#[test]
fn test_exception_message_prefers_description() {
    let json = r#"{
        "result": {"type": "object"},
        "exceptionDetails": {
            "text": "Uncaught",
            "exception": {"type": "object", "description": "ReferenceError: screen is not defined"}
        }
    }"#;
    let result: EvaluateResult = serde_json::from_str(json).unwrap();
    assert_eq!(
        result.exception_details.unwrap().message(),
        "ReferenceError: screen is not defined"
    );
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "Chrome/131.0.6778.86",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": "ws://127.0.0.1:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.protocol_version, "1.3");
    assert!(version.web_socket_debugger_url.starts_with("ws://"));
}
