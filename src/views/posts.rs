// src/views/posts.rs
// =============================================================================
// The Posts view: a list of post titles.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::list::{ListView, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
}

pub struct Posts;

impl ListView for Posts {
    type Record = Post;

    const TITLE: &'static str = "Posts";
    const DEFAULT_ENDPOINT: &'static str = "https://jsonplaceholder.typicode.com/posts";

    fn id(record: &Post) -> &RecordId {
        &record.id
    }

    fn label(record: &Post) -> &str {
        &record.title
    }
}
