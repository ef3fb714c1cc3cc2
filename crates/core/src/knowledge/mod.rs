//! Disease knowledge base.
//!
//! A write-once table mapping normalised disease identifiers to the recommendation and
//! treatment texts printed on a prescription. The table is validated in full when it is
//! loaded, so a request can never discover a partial or duplicated record.

mod builtin;

use crate::compose;
use crate::disease::normalise;
use crate::{TherabotError, TherabotResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// One row of the knowledge table, as supplied to [`KnowledgeBase::load`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DiseaseRecord {
    #[serde(rename = "disease")]
    pub identifier: String,
    pub recommendation: String,
    pub treatment: String,
}

/// The two texts stored for a disease.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiseaseFacts {
    pub recommendation: String,
    pub treatment: String,
}

/// Immutable disease table.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    records: HashMap<String, DiseaseFacts>,
}

impl KnowledgeBase {
    /// Build the table from `records`.
    ///
    /// # Errors
    /// Fails on the first record that
    /// - has an identifier that is not already normalised (`UnnormalisedIdentifier`),
    /// - repeats an identifier seen earlier (`DuplicateDisease`),
    /// - has an empty recommendation or treatment (`EmptyField`), or
    /// - cannot be printed on a single page (`Rendering`).
    pub fn load(records: impl IntoIterator<Item = DiseaseRecord>) -> TherabotResult<Self> {
        let mut table = HashMap::new();

        for record in records {
            let expected = normalise(&record.identifier)?;
            if expected != record.identifier {
                return Err(TherabotError::UnnormalisedIdentifier {
                    found: record.identifier,
                    expected,
                });
            }
            if record.recommendation.trim().is_empty() {
                return Err(TherabotError::EmptyField {
                    disease: record.identifier,
                    field: "recommendation",
                });
            }
            if record.treatment.trim().is_empty() {
                return Err(TherabotError::EmptyField {
                    disease: record.identifier,
                    field: "treatment",
                });
            }
            compose::check_fits(&record.identifier, &record.recommendation, &record.treatment)?;
            if table.contains_key(&record.identifier) {
                return Err(TherabotError::DuplicateDisease(record.identifier));
            }

            table.insert(
                record.identifier,
                DiseaseFacts {
                    recommendation: record.recommendation,
                    treatment: record.treatment,
                },
            );
        }

        tracing::debug!("knowledge base loaded with {} diseases", table.len());
        Ok(Self { records: table })
    }

    /// The table shipped with the service.
    pub fn builtin() -> TherabotResult<Self> {
        Self::load(builtin::records())
    }

    /// Parse a YAML sequence of `{disease, recommendation, treatment}` mappings.
    pub fn from_yaml_str(yaml: &str) -> TherabotResult<Self> {
        let records: Vec<DiseaseRecord> =
            serde_yaml::from_str(yaml).map_err(TherabotError::YamlDeserialization)?;
        Self::load(records)
    }

    /// Read and parse a YAML knowledge file.
    pub fn from_path(path: &Path) -> TherabotResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(TherabotError::FileRead)?;
        Self::from_yaml_str(&yaml)
    }

    /// Look up both texts for a free-text disease name.
    ///
    /// The name is normalised first; only an exact match on the normalised key is accepted.
    ///
    /// # Errors
    /// - `InvalidInput` if the name is blank.
    /// - `NotFoundRecommendation` if no record matches.
    pub fn lookup(&self, raw_name: &str) -> TherabotResult<&DiseaseFacts> {
        let key = normalise(raw_name)?;
        self.records
            .get(&key)
            .ok_or(TherabotError::NotFoundRecommendation(key))
    }

    /// Recommendation text for a free-text disease name.
    pub fn recommendation(&self, raw_name: &str) -> TherabotResult<&str> {
        self.lookup(raw_name)
            .map(|facts| facts.recommendation.as_str())
    }

    /// Treatment text for a free-text disease name.
    pub fn treatment(&self, raw_name: &str) -> TherabotResult<&str> {
        let key = normalise(raw_name)?;
        self.records
            .get(&key)
            .map(|facts| facts.treatment.as_str())
            .ok_or(TherabotError::NotFoundTreatment(key))
    }

    /// Known identifiers in alphabetical order.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
