//! Movie records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{release_date, Entity};
use crate::validation::{self, FieldRule};

/// Stored movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(value_type = String, format = Date, example = "2023-10-10")]
    pub release_date: NaiveDate,
    /// Free-text genre labels, not references to genre records
    pub genre: Vec<String>,
}

/// Body accepted by `POST /movies`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDraft {
    #[schema(example = "Paddington")]
    pub title: String,
    #[schema(example = "A bear arrives in London")]
    pub description: String,
    #[serde(deserialize_with = "release_date::deserialize")]
    #[schema(value_type = String, example = "2014-11-28")]
    pub release_date: NaiveDate,
    #[schema(example = json!(["comedy", "family"]))]
    pub genre: Vec<String>,
}

/// Body accepted by `PUT /movies/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoviePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "release_date::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
}

impl Movie {
    pub fn has_genre(&self, label: &str) -> bool {
        self.genre.iter().any(|g| g == label)
    }
}

impl Entity for Movie {
    type Draft = MovieDraft;
    type Patch = MoviePatch;

    const NAME: &'static str = "movie";
    const COLLECTION: &'static str = "movies";
    const RULES: &'static [FieldRule] = validation::MOVIE_RULES;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: MovieDraft) -> Self {
        Movie {
            id,
            title: draft.title,
            description: draft.description,
            release_date: draft.release_date,
            genre: draft.genre,
        }
    }

    fn matches(&self, draft: &MovieDraft) -> bool {
        self.title == draft.title
            && self.description == draft.description
            && self.release_date == draft.release_date
            && self.genre == draft.genre
    }

    fn apply(&mut self, patch: MoviePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(release_date) = patch.release_date {
            self.release_date = release_date;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}
