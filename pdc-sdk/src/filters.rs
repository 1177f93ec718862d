// ABOUTME: Typed query filters for the PDC images endpoint
// ABOUTME: Encodes the recognized filter keys as verbatim query parameters

/// Filters accepted by the `images/` endpoint. Every present field is sent
/// verbatim as a query parameter named after the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilters {
    pub arch: Option<String>,
    pub compose: Option<String>,
    pub file_name: Option<String>,
    pub image_format: Option<String>,
    pub image_type: Option<String>,
    pub implant_md5: Option<String>,
    pub md5: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub volume_id: Option<String>,
    pub subvariant: Option<String>,
}

impl ImageFilters {
    /// Exact-match lookup by file name, optionally narrowed by checksum.
    pub fn by_file_name(file_name: impl Into<String>, sha256: Option<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            sha256,
            ..Default::default()
        }
    }

    /// Query parameters in a stable order.
    pub fn to_query(&self) -> Vec<(&'static str, &str)> {
        [
            ("arch", &self.arch),
            ("compose", &self.compose),
            ("file_name", &self.file_name),
            ("image_format", &self.image_format),
            ("image_type", &self.image_type),
            ("implant_md5", &self.implant_md5),
            ("md5", &self.md5),
            ("sha1", &self.sha1),
            ("sha256", &self.sha256),
            ("volume_id", &self.volume_id),
            ("subvariant", &self.subvariant),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}
