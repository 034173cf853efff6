// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, written to stderr)
// 3. Build a DataFetcher for the chosen endpoint and let it settle
// 4. Render the state and exit (0 = data, 1 = fetch error, 2 = internal error)
//
// Rust concepts used:
// - async/await: the fetch suspends until the round trip finishes
// - Generics: show_view::<Posts> and show_view::<Users> share one function
// - Result<T, E> with anyhow: errors bubble up with ? and become exit code 2
// =============================================================================

mod cli;

use clap::Parser;
use cli::{Cli, Commands};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use json_fetcher::fetcher::{parse_header, DataFetcher, FetchState, RequestDescriptor, RequestOptions};
use json_fetcher::views::{ListView, Posts, Users};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins when set; otherwise --verbose picks debug over info
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Posts {
            endpoint,
            json,
            refetch,
        } => show_view::<Posts>(endpoint, json, refetch).await,
        Commands::Users {
            endpoint,
            json,
            refetch,
        } => show_view::<Users>(endpoint, json, refetch).await,
        Commands::Dashboard { posts, users } => show_dashboard(posts, users).await,
        Commands::Fetch {
            url,
            method,
            headers,
            data,
        } => fetch_raw(url, method, headers, data).await,
    }
}

// Loads one view, optionally refetching, then prints it
async fn show_view<V: ListView>(endpoint: Option<String>, json: bool, refetch: usize) -> Result<i32> {
    let endpoint = endpoint.unwrap_or_else(|| V::DEFAULT_ENDPOINT.to_string());
    let fetcher = DataFetcher::new(RequestDescriptor::new(endpoint));

    let mut state = fetcher.load().await;
    for round in 1..=refetch {
        tracing::debug!(round, "refetching");
        state = fetcher.refetch().await;
    }

    if json {
        println!("{}", V::render_json(&state)?);
    } else {
        println!("{}", V::render(&state));
    }

    Ok(exit_code_for::<V>(&state))
}

// Both fetchers run at once; each list settles on its own
async fn show_dashboard(posts: Option<String>, users: Option<String>) -> Result<i32> {
    let posts = DataFetcher::new(RequestDescriptor::new(
        posts.unwrap_or_else(|| Posts::DEFAULT_ENDPOINT.to_string()),
    ));
    let users = DataFetcher::new(RequestDescriptor::new(
        users.unwrap_or_else(|| Users::DEFAULT_ENDPOINT.to_string()),
    ));

    let (posts_state, users_state) = futures::join!(posts.load(), users.load());

    println!("{}\n", Posts::render(&posts_state));
    println!("{}", Users::render(&users_state));

    Ok(exit_code_for::<Posts>(&posts_state).max(exit_code_for::<Users>(&users_state)))
}

async fn fetch_raw(url: String, method: Option<String>, headers: Vec<String>, data: Option<String>) -> Result<i32> {
    let mut options = RequestOptions {
        method,
        body: data,
        ..RequestOptions::default()
    };
    for raw in &headers {
        options.headers.push(parse_header(raw).context("invalid --header")?);
    }

    let fetcher = DataFetcher::new(RequestDescriptor::new(url).with_options(options));
    let state = fetcher.load().await;

    match (&state.data, &state.error) {
        (_, Some(message)) => {
            eprintln!("Error: {}", message);
            Ok(1)
        }
        (Some(payload), None) => {
            println!("{}", serde_json::to_string_pretty(payload)?);
            Ok(0)
        }
        (None, None) => Ok(0),
    }
}

fn exit_code_for<V: ListView>(state: &FetchState) -> i32 {
    if V::classify(state).is_error() {
        1
    } else {
        0
    }
}
