//! Settings for the exporter that do not come from the profile itself.

/// Default references URL written to the global `references` attribute.
pub const DEFAULT_REFERENCES: &str = "https://www.hydroffice.org/soundspeed/";

/// Default minimum length of the character buffer of the `profile` variable.
pub const DEFAULT_PROFILE_ID_LENGTH: usize = 64;

/// Name and version of the application producing the files, used in the provenance comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
}

impl AppIdentity {
    /// Create a new identity.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Text of the global `comment` attribute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ssp_ncei::AppIdentity;
    ///
    /// let app = AppIdentity::new("Sound Speed Manager", "2.1.0");
    /// assert_eq!(app.provenance(), "Created using Sound Speed Manager v.2.1.0");
    /// ```
    pub fn provenance(&self) -> String {
        format!("Created using {} v.{}", self.name, self.version)
    }
}

impl Default for AppIdentity {
    /// This crate's own name and version.
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// Configuration for the NCEI exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    /// Identity of the application, for the `comment` attribute.
    pub app: AppIdentity,
    /// Value of the `references` attribute.
    pub references: String,
    /// Minimum length of the `profile` identifier buffer. Longer identifiers grow the buffer.
    pub profile_id_length: usize,
}

impl ExporterConfig {
    /// Create a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application identity.
    pub fn with_app(mut self, app: AppIdentity) -> Self {
        self.app = app;
        self
    }

    /// Set the references attribute.
    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = references.into();
        self
    }

    /// Set the minimum length of the profile identifier buffer.
    pub fn with_profile_id_length(mut self, length: usize) -> Self {
        self.profile_id_length = length;
        self
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            app: AppIdentity::default(),
            references: DEFAULT_REFERENCES.to_owned(),
            profile_id_length: DEFAULT_PROFILE_ID_LENGTH,
        }
    }
}
