//! End-to-end selectionRange tests against the mdexpand binary.
//!
//! Run with: `cargo test --test e2e_selection_range --features e2e`

#![cfg(feature = "e2e")]

mod helpers;

use helpers::lsp_client::LspClient;
use serde_json::json;

const URI: &str = "file:///tmp/mdexpand-e2e/notes.md";

const NOTES: &str = "# Title

Intro paragraph.

## Section

- first
- second

Closing.
";

fn client_with_notes() -> LspClient {
    let mut client = LspClient::new();
    client.initialize();
    client.open_markdown(URI, NOTES);
    client
}

#[test]
fn test_initialize_reports_selection_range_provider() {
    let mut client = LspClient::new();

    let result = client.initialize();

    assert_eq!(result["capabilities"]["selectionRangeProvider"], json!(true));
    assert_eq!(result["serverInfo"]["name"], json!("mdexpand"));
}

#[test]
fn test_heading_line_returns_section_range() {
    let mut client = client_with_notes();

    let response = client.selection_range(URI, 4, 2);

    let ranges = response["result"]
        .as_array()
        .unwrap_or_else(|| panic!("expected an array: {:?}", response));
    assert!(!ranges.is_empty());
    assert_eq!(ranges[0]["range"]["start"], json!({ "line": 4, "character": 0 }));
    assert_eq!(ranges[0]["range"]["end"]["line"], json!(9));
    assert!(ranges[0].get("parent").is_none());
}

#[test]
fn test_list_line_returns_list_range() {
    let mut client = client_with_notes();

    let response = client.selection_range(URI, 7, 0);

    let ranges = response["result"].as_array().expect("array result");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0]["range"]["start"], json!({ "line": 6, "character": 0 }));
}

#[test]
fn test_plain_paragraph_returns_empty_array() {
    let mut client = client_with_notes();

    let response = client.selection_range(URI, 2, 3);

    assert_eq!(response["result"], json!([]));
}

#[test]
fn test_unopened_document_returns_null() {
    let mut client = LspClient::new();
    client.initialize();

    let response = client.selection_range("file:///tmp/mdexpand-e2e/absent.md", 0, 0);

    assert!(response.get("error").is_none(), "{:?}", response);
    assert!(response["result"].is_null());
}

#[test]
fn test_edit_then_select_uses_new_text() {
    let mut client = client_with_notes();

    // "Intro paragraph." becomes a level 3 heading
    client.insert_text(URI, 2, 2, 0, "### ");
    let response = client.selection_range(URI, 2, 0);

    let ranges = response["result"].as_array().expect("array result");
    assert_eq!(ranges.len(), 1);
    assert_eq!(ranges[0]["range"]["start"]["line"], json!(2));
    assert_eq!(ranges[0]["range"]["end"]["line"], json!(2));
}

#[test]
fn test_shutdown_after_requests() {
    let mut client = client_with_notes();
    let _ = client.selection_range(URI, 0, 0);

    let response = client.shutdown();

    assert!(response.get("error").is_none(), "{:?}", response);
}
