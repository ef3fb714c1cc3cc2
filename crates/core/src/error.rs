#[derive(Debug, thiserror::Error)]
pub enum TherabotError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("duplicate disease identifier: {0}")]
    DuplicateDisease(String),
    #[error("disease '{disease}' has an empty {field}")]
    EmptyField {
        disease: String,
        field: &'static str,
    },
    #[error("disease identifier '{found}' is not normalised (expected '{expected}')")]
    UnnormalisedIdentifier { found: String, expected: String },

    #[error("No recommendation found for {0}")]
    NotFoundRecommendation(String),
    #[error("No treatment found for {0}")]
    NotFoundTreatment(String),

    #[error("failed to render document: {0}")]
    Rendering(String),

    #[error("failed to read file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

impl TherabotError {
    /// True for errors a caller can fix by asking for a different disease.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TherabotError::NotFoundRecommendation(_) | TherabotError::NotFoundTreatment(_)
        )
    }
}

pub type TherabotResult<T> = std::result::Result<T, TherabotError>;
