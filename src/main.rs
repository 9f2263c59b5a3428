//! CLI entry point for blogfront

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogfront::commands;
use blogfront::Blog;

#[derive(Parser)]
#[command(name = "blogfront")]
#[command(version)]
#[command(about = "Reader front end for a static markdown blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(short = 'g', long)]
        category: Option<String>,

        /// Short teaser shown in the post list
        #[arg(short, long)]
        excerpt: Option<String>,

        /// Comma separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only show posts matching this search
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Render a page as HTML
    Render {
        #[command(subcommand)]
        page: RenderPage,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum RenderPage {
    /// The post list
    Index {
        /// Pre-filter the list with this search
        #[arg(short, long)]
        query: Option<String>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// A single post
    Post {
        /// Post identifier
        id: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogfront=debug,info"
    } else {
        "blogfront=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New {
            title,
            author,
            category,
            excerpt,
            tags,
        } => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let post = commands::new::NewPost {
                title: &title,
                author: author.as_deref(),
                category: category.as_deref(),
                excerpt: excerpt.as_deref(),
                tags: tags
                    .into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
            };
            commands::new::create_post(&blog, &post)?;
        }

        Commands::List { query } => {
            let blog = Blog::new(&base_dir)?;
            commands::list::run(&blog, query.as_deref()).await?;
        }

        Commands::Render { page } => {
            let blog = Blog::new(&base_dir)?;
            let ok = match page {
                RenderPage::Index { query, output } => {
                    commands::render::index(&blog, query.as_deref(), output.as_deref()).await?
                }
                RenderPage::Post { id, output } => {
                    commands::render::post(&blog, &id, output.as_deref()).await?
                }
            };
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Server { port, ip } => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogfront::server::start(blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("blogfront version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(ExitCode::SUCCESS)
}
