// src/views/users.rs
// =============================================================================
// The Users view: a list of user names.
//
// Same rules as Posts; only the display field differs. Extra fields such as
// username, email or address are ignored when the records are read.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::list::{ListView, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
}

pub struct Users;

impl ListView for Users {
    type Record = User;

    const TITLE: &'static str = "Users";
    const DEFAULT_ENDPOINT: &'static str = "https://jsonplaceholder.typicode.com/users";

    fn id(record: &User) -> &RecordId {
        &record.id
    }

    fn label(record: &User) -> &str {
        &record.name
    }
}
