// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Each view gets its own subcommand, the way a web app would give each page a
// route:
//   json-fetcher posts      -> the Posts list
//   json-fetcher users      -> the Users list
//   json-fetcher dashboard  -> both lists, fetched at the same time
//   json-fetcher fetch URL  -> any endpoint, printed as raw JSON
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the whole argument parser
// - Enums with fields: each subcommand carries its own arguments
// - Option<T>: arguments the user may leave out
// =============================================================================

use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "json-fetcher",
    version = "0.1.0",
    about = "Fetch JSON from an endpoint and render it",
    long_about = "json-fetcher calls a JSON endpoint, waits for it to settle into data or an error, \
                  and prints the result as a list or as raw JSON."
)]
pub struct Cli {
    /// Log every fetch event (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts by title
    ///
    /// Example: json-fetcher posts --endpoint https://jsonplaceholder.typicode.com/posts
    Posts {
        /// Where to fetch posts from (defaults to jsonplaceholder)
        #[arg(long, value_parser = parse_endpoint)]
        endpoint: Option<String>,

        /// Print the records as JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Fetch this many extra times after the first load
        #[arg(long, default_value_t = 0)]
        refetch: usize,
    },

    /// List users by name
    ///
    /// Example: json-fetcher users --json
    Users {
        /// Where to fetch users from (defaults to jsonplaceholder)
        #[arg(long, value_parser = parse_endpoint)]
        endpoint: Option<String>,

        /// Print the records as JSON instead of a list
        #[arg(long)]
        json: bool,

        /// Fetch this many extra times after the first load
        #[arg(long, default_value_t = 0)]
        refetch: usize,
    },

    /// Fetch posts and users concurrently and show both lists
    Dashboard {
        /// Endpoint for the posts list
        #[arg(long, value_parser = parse_endpoint)]
        posts: Option<String>,

        /// Endpoint for the users list
        #[arg(long, value_parser = parse_endpoint)]
        users: Option<String>,
    },

    /// Fetch any endpoint and print the JSON payload
    ///
    /// Example: json-fetcher fetch https://api.example.com/items -X POST -H 'Content-Type: application/json' --data '{}'
    Fetch {
        /// Endpoint URL (http or https)
        #[arg(value_parser = parse_endpoint)]
        url: String,

        /// HTTP method (default: GET)
        #[arg(short = 'X', long)]
        method: Option<String>,

        /// Request header as 'Name: value' (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Request body, sent as is
        #[arg(long)]
        data: Option<String>,
    },
}

// Accepts only absolute http(s) URLs
fn parse_endpoint(raw: &str) -> Result<String, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL '{}': {}", raw, e))?;

    match url.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("unsupported scheme '{}', use http or https", other)),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does value_parser do?
//    - clap calls the given function on the raw argument text
//    - Ok(value) is stored in the field, Err(message) is shown to the user
//    - parse_endpoint rejects bad URLs before any request is made
//
// 2. Why Vec<String> for headers?
//    - A Vec field makes the flag repeatable: -H 'A: 1' -H 'B: 2'
//    - Order is kept, and the headers are sent in that order
//
// 3. What is #[arg(short = 'X')]?
//    - Sets the one-letter flag by hand, matching curl's -X and -H
// -----------------------------------------------------------------------------
