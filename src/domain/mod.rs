//! Domain records for the catalog
//!
//! Each persisted record type comes in three shapes: the stored record
//! (carrying the store-assigned `_id`), a draft accepted on create, and a
//! patch accepted on update.

mod genre;
mod movie;
pub mod release_date;

use serde::{de::DeserializeOwned, Serialize};

use crate::validation::FieldRule;

pub use genre::{Genre, GenreDraft, GenrePatch};
pub use movie::{Movie, MovieDraft, MoviePatch};

/// A record type persisted in its own document collection
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Fields accepted when creating a record
    type Draft: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;
    /// Fields accepted when updating a record in place
    type Patch: Serialize + DeserializeOwned + Default + Send + Sync + 'static;

    /// Lowercase singular name used in response messages ("movie")
    const NAME: &'static str;
    /// Document collection holding the records ("movies")
    const COLLECTION: &'static str;
    /// Field rules checked before a draft is accepted
    const RULES: &'static [FieldRule];

    fn id(&self) -> &str;

    /// Build the stored record once the store has assigned an id
    fn from_draft(id: String, draft: Self::Draft) -> Self;

    /// True when every field of the draft equals the record's field
    fn matches(&self, draft: &Self::Draft) -> bool;

    /// Overwrite the fields present in the patch
    fn apply(&mut self, patch: Self::Patch);
}
