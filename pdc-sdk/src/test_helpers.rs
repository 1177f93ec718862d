// ABOUTME: Test helper utilities for mocking PDC API responses and server
// ABOUTME: Provides mockito-based helpers for unit testing REST interactions

use mockito::{Server, ServerGuard};
use serde_json::{Value, json};

pub async fn mock_pdc_server() -> ServerGuard {
    Server::new_async().await
}

pub fn mock_image(file_name: &str, sha256: &str) -> Value {
    json!({
        "file_name": file_name,
        "image_format": "iso",
        "image_type": "dvd",
        "disc_number": 1,
        "disc_count": 1,
        "arch": "x86_64",
        "mtime": 1446197395,
        "size": 2149580800u64,
        "bootable": true,
        "implant_md5": "0ca4d5e3f0c6ff3b54ac0d0d5d2d4b6f",
        "volume_id": "Fedora-S-dvd-x86_64-23",
        "md5": "2d1b6f4a7a8b1e6f2d6c4b0c2b9f7e11",
        "sha1": "e3b4a5c4f1dcd5b2dca7b8e1f3c2a4b6d8e0f1a2",
        "sha256": sha256,
        "subvariant": "Server",
        "composes": ["Fedora-23-20151030.0"]
    })
}

pub fn mock_page_response(results: &[Value], next: Option<&str>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results
    })
}

pub fn mock_error_response(detail: &str) -> Value {
    json!({ "detail": detail })
}
