//! Persistence for movies and genres
//!
//! Provides the store adapter traits, a MongoDB implementation and an
//! in-process implementation.

pub mod connection;
pub mod memory;
pub mod mongo;
pub mod store;

pub use connection::MongoConnection;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, MovieStore, StoreError, StoreResult};
