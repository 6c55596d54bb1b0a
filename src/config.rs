/// Connection details for the target Appwrite instance, entered in the form.
///
/// Nothing is validated while typing; completeness is only checked when a
/// batch is submitted. Fields are kept verbatim; whitespace is not trimmed.
#[derive(Debug, Clone, Default)]
pub struct ConnectionConfig {
    pub endpoint: String,
    pub project_id: String,
    pub bucket_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Endpoint,
    ProjectId,
    BucketId,
}

impl ConnectionConfig {
    /// Updates a single field, leaving the other two untouched.
    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ConfigField::Endpoint => self.endpoint = value,
            ConfigField::ProjectId => self.project_id = value,
            ConfigField::BucketId => self.bucket_id = value,
        }
    }

    /// True once all three fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.endpoint.is_empty() && !self.project_id.is_empty() && !self.bucket_id.is_empty()
    }
}
