use anyhow::Result;
use clap::{Parser, Subcommand};
use client_core::{PostFormInput, PostsController};
use tracing::info;

mod config;
mod surface;

use surface::ConsoleSurface;

#[derive(Parser, Debug)]
struct Cli {
    /// Overrides the configured API base URL.
    #[arg(long)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the first page of posts.
    List,
    /// Create a post from raw form field values.
    Create {
        user_id: String,
        title: String,
        body: String,
    },
    /// Delete a post by id (1-100).
    Delete { post_id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let cli = Cli::parse();
    let settings = config::load_settings(cli.base_url)?;
    info!(base_url = %settings.base_url, "console: client initialized");
    let controller = PostsController::with_base_url(settings.base_url);

    match cli.command {
        Command::List => {
            let surface = ConsoleSurface::new("GET");
            controller.fetch_posts(&surface).await;
        }
        Command::Create {
            user_id,
            title,
            body,
        } => {
            let surface = ConsoleSurface::with_form(PostFormInput {
                user_id,
                title,
                body,
            });
            controller.create_post(&surface).await;
        }
        Command::Delete { post_id } => {
            let surface = ConsoleSurface::with_post_id(post_id);
            controller.delete_post(&surface).await;
        }
    }

    Ok(())
}
