//! Dataset Index: the static member/experience catalog, loaded once at startup.
//!
//! The index is read-only after construction and is shared across requests
//! behind an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::dataset::{DatasetDocument, Experience, Member};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate member_id '{0}' in dataset")]
    DuplicateMember(String),

    #[error("duplicate experience_id '{0}' in dataset")]
    DuplicateExperience(String),
}

pub struct DatasetIndex {
    members: HashMap<String, Member>,
    /// Experiences in the order they appear in the input.
    experiences: Vec<Experience>,
    experience_positions: HashMap<String, usize>,
}

impl DatasetIndex {
    /// Reads and indexes the dataset at `path`. Any failure is fatal to startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        info!("Loading dataset from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let index = Self::from_json_str(&raw)?;

        info!(
            "Dataset loaded: {} members, {} experiences",
            index.member_count(),
            index.experience_count()
        );
        Ok(index)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let document: DatasetDocument = serde_json::from_str(raw)?;
        Self::from_document(document)
    }

    pub fn from_document(document: DatasetDocument) -> Result<Self, DatasetError> {
        let mut members = HashMap::with_capacity(document.members.len());
        for member in document.members {
            if members.contains_key(&member.member_id) {
                return Err(DatasetError::DuplicateMember(member.member_id));
            }
            members.insert(member.member_id.clone(), member);
        }

        let mut experience_positions = HashMap::with_capacity(document.experiences.len());
        for (position, experience) in document.experiences.iter().enumerate() {
            if experience_positions
                .insert(experience.experience_id.clone(), position)
                .is_some()
            {
                return Err(DatasetError::DuplicateExperience(
                    experience.experience_id.clone(),
                ));
            }
        }

        Ok(Self {
            members,
            experiences: document.experiences,
            experience_positions,
        })
    }

    pub fn find_member(&self, member_id: &str) -> Option<&Member> {
        self.members.get(member_id)
    }

    pub fn find_experience(&self, experience_id: &str) -> Option<&Experience> {
        self.experience_positions
            .get(experience_id)
            .map(|&position| &self.experiences[position])
    }

    /// All experiences, in input order.
    pub fn experiences(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn experience_count(&self) -> usize {
        self.experiences.len()
    }
}
