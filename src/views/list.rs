// src/views/list.rs
// =============================================================================
// Rendering rules shared by every list view.
//
// A view only says three things: its heading, where its data lives by default,
// and which field of a record is shown. The trait's provided methods do the
// rest, so Posts and Users stay a few lines each.
// =============================================================================

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::fetcher::FetchState;

/// Text shown while a request is outstanding
pub const LOADING: &str = "Loading...";

/// Message used when the payload is JSON but not a list of our records
pub const UNEXPECTED_SHAPE: &str = "unexpected data shape";

/// A record's `id`: any JSON number or string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(number) => write!(f, "{}", number),
            RecordId::Text(text) => write!(f, "{}", text),
        }
    }
}

/// What a view decided to show for a given state
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<R> {
    Loading,
    Error(String),
    Empty,
    Records(Vec<R>),
}

impl<R> Rendered<R> {
    /// True when the view shows an error (used for the exit code)
    pub fn is_error(&self) -> bool {
        matches!(self, Rendered::Error(_))
    }
}

pub trait ListView {
    type Record: DeserializeOwned + Serialize;

    /// Heading printed above the list
    const TITLE: &'static str;

    /// Where the view fetches from when no endpoint is given
    const DEFAULT_ENDPOINT: &'static str;

    fn id(record: &Self::Record) -> &RecordId;

    fn label(record: &Self::Record) -> &str;

    /// Decides what to show: loading wins, then error, then data
    fn classify(state: &FetchState) -> Rendered<Self::Record> {
        if state.loading {
            return Rendered::Loading;
        }
        if let Some(message) = &state.error {
            return Rendered::Error(message.clone());
        }
        match &state.data {
            None => Rendered::Empty,
            Some(value) => match Self::records(value) {
                Some(records) if records.is_empty() => Rendered::Empty,
                Some(records) => Rendered::Records(records),
                None => Rendered::Error(UNEXPECTED_SHAPE.to_string()),
            },
        }
    }

    /// Reads the payload as an ordered list of records
    fn records(value: &Value) -> Option<Vec<Self::Record>> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Human-readable rendering
    fn render(state: &FetchState) -> String {
        match Self::classify(state) {
            Rendered::Loading => LOADING.to_string(),
            Rendered::Error(message) => format!("Error: {}", message),
            Rendered::Empty => format!("{}\n(no {})", Self::TITLE, Self::TITLE.to_lowercase()),
            Rendered::Records(records) => {
                let mut out = String::from(Self::TITLE);
                for record in &records {
                    out.push_str(&format!("\n- [{}] {}", Self::id(record), Self::label(record)));
                }
                out
            }
        }
    }

    /// The records as pretty JSON; loading and error states become an object
    fn render_json(state: &FetchState) -> serde_json::Result<String> {
        match Self::classify(state) {
            Rendered::Records(records) => serde_json::to_string_pretty(&records),
            Rendered::Empty => Ok("[]".to_string()),
            Rendered::Loading => serde_json::to_string_pretty(&serde_json::json!({ "loading": true })),
            Rendered::Error(message) => serde_json::to_string_pretty(&serde_json::json!({ "error": message })),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What are provided methods?
//    - A trait can ship method bodies, not just signatures
//    - classify, render and render_json are written once here
//    - Posts and Users only fill in the required items (id, label, ...)
//
// 2. What are associated types and consts?
//    - `type Record` lets each view pick its own record struct
//    - `const TITLE` is a value tied to the type, no instance needed
//
// 3. What does #[serde(untagged)] mean?
//    - serde tries each variant in order until one fits
//    - so an id can be 7, -3 or "a1b2"
// -----------------------------------------------------------------------------
