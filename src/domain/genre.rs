//! Genre records

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;
use crate::validation::{self, FieldRule};

/// Stored genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

/// Body accepted by `POST /genres`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenreDraft {
    #[schema(example = "Drama")]
    pub name: String,
}

/// Body accepted by `PUT /genres/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenrePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Genre {
    type Draft = GenreDraft;
    type Patch = GenrePatch;

    const NAME: &'static str = "genre";
    const COLLECTION: &'static str = "genres";
    const RULES: &'static [FieldRule] = validation::GENRE_RULES;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: GenreDraft) -> Self {
        Genre { id, name: draft.name }
    }

    fn matches(&self, draft: &GenreDraft) -> bool {
        self.name == draft.name
    }

    fn apply(&mut self, patch: GenrePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}
