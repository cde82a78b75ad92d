//! Service record persistence
//!
//! A thin read interface over the SQLite `services` table. The pipeline
//! only ever fetches records by id; population of the table belongs to the
//! data-loading scripts, not this crate (the `insert_record` helper exists
//! for those loaders and for tests).

pub mod store;

pub use store::ServiceStore;
