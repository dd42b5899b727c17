use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use tracing::info;

mod api;
mod render;

use api::{default_username, PanelClient, PanelError};
use render::render_results;

const DEFAULT_SERVER: &str = "http://localhost:7212";
const STARTER_TOPICS: [&str; 6] = [
    "fiction",
    "science",
    "history",
    "fantasy",
    "mystery",
    "technology",
];

#[derive(Parser)]
#[command(name = "booksearch-panel", about = "Search books from the terminal")]
struct Cli {
    /// Base URL of the book search service
    #[arg(long, env = "BOOKSEARCH_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Bearer token from `login`; unlocks full descriptions and page counts
    #[arg(long, env = "BOOKSEARCH_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search by title and/or author. With neither, browse a random topic.
    Search {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
    },
    /// Log in and print a bearer token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Defaults to the part of the email before '@'
        #[arg(long)]
        username: Option<String>,
    },
}

fn random_topic() -> &'static str {
    STARTER_TOPICS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("fiction")
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

async fn run(cli: Cli) -> Result<(), PanelError> {
    let client = PanelClient::new(cli.server, cli.token);

    match cli.command {
        Command::Search { title, author } => {
            let (title, author) = if is_blank(&title) && is_blank(&author) {
                let topic = random_topic();
                info!("No search terms given, browsing '{}'", topic);
                (Some(topic.to_string()), None)
            } else {
                (title, author)
            };

            let books = client.search(title.as_deref(), author.as_deref()).await?;
            print!("{}", render_results(&books));
        }
        Command::Login { email, password } => {
            let token = client.login(&email, &password).await?;
            info!("Logged in as {}", email);
            println!("{}", token);
        }
        Command::Signup {
            email,
            password,
            username,
        } => {
            let username = username.unwrap_or_else(|| default_username(&email).to_string());
            client.signup(&email, &username, &password).await?;
            println!("Signup successful! You can now login.");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("booksearch_panel=warn")
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
