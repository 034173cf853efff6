// src/views/mod.rs
// =============================================================================
// Presentational consumers of a fetcher's state.
//
// Each view turns a FetchState into text:
// - a loading indicator while a request is outstanding
// - an error line when the last request failed
// - otherwise one list item per record
//
// Submodules:
// - list:  the shared rendering rules (ListView trait)
// - posts: records with a title
// - users: records with a name
// =============================================================================

mod list;
mod posts;
mod users;

pub use list::{ListView, RecordId, Rendered, LOADING, UNEXPECTED_SHAPE};
pub use posts::{Post, Posts};
pub use users::{User, Users};
