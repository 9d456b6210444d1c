use std::fmt;

/// OpenAPI revision targeted by generated documents.
///
/// The revisions differ in how nullability is spelled: 3.0 uses the
/// `nullable: true` keyword, 3.1 adds `"null"` to the `type` list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OpenApiVersion {
    V3_0,
    #[default]
    V3_1,
}

impl OpenApiVersion {
    /// Full version string written to the `openapi` field.
    pub fn as_str(self) -> &'static str {
        match self {
            OpenApiVersion::V3_0 => "3.0.3",
            OpenApiVersion::V3_1 => "3.1.0",
        }
    }

    /// Parse `"3.0"`, `"3.1"` or any patch release of either.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name == "3.0" || name.starts_with("3.0.") {
            Some(OpenApiVersion::V3_0)
        } else if name == "3.1" || name.starts_with("3.1.") {
            Some(OpenApiVersion::V3_1)
        } else {
            None
        }
    }
}

impl fmt::Display for OpenApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`to_api_document`](crate::to_api_document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    pub version: OpenApiVersion,
    /// Emit column defaults as `default` keywords.
    pub include_defaults: bool,
}

impl DocumentOptions {
    pub fn new() -> Self {
        Self {
            version: OpenApiVersion::default(),
            include_defaults: true,
        }
    }

    pub fn with_version(mut self, version: OpenApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_defaults(mut self, enabled: bool) -> Self {
        self.include_defaults = enabled;
        self
    }
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self::new()
    }
}
