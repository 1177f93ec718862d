// ABOUTME: Response envelope types returned by the PDC REST API
// ABOUTME: Image records themselves stay opaque JSON values

use serde::Deserialize;

/// An image record exactly as the service returned it.
pub type ImageRecord = serde_json::Value;

/// One page of a PDC list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_pdc_envelope() {
        let page: Page<ImageRecord> = serde_json::from_value(json!({
            "count": 3,
            "next": "https://pdc.example.com/rest_api/v1/images/?page=2",
            "previous": null,
            "results": [{"file_name": "a.iso"}, {"file_name": "b.iso"}]
        }))
        .unwrap();

        assert_eq!(page.count, 3);
        assert!(page.has_next());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1]["file_name"], "b.iso");
    }

    #[test]
    fn test_page_without_links() {
        let page: Page<ImageRecord> =
            serde_json::from_value(json!({"count": 0, "results": []})).unwrap();

        assert_eq!(page.count, 0);
        assert!(!page.has_next());
        assert!(page.results.is_empty());
    }
}
