//! CLI entry point for blogdex

use anyhow::{Context, Result};
use blogdex::content::ContentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blogdex")]
#[command(version)]
#[command(about = "Index blog articles and tips and write route props", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
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
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new article or tip
    New {
        /// Kind of content (article, tip)
        #[arg(short, long, default_value = "article")]
        kind: ContentKind,

        /// Title of the new item
        title: String,

        /// Slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Write the props of every route
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (article, tip, tag)
        #[arg(default_value = "article")]
        r#type: String,
    },

    /// Show one item and its neighbors
    Show {
        /// Kind of content (article, tip)
        kind: ContentKind,

        slug: String,

        /// Print the route props as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogdex=debug,info"
    } else {
        "blogdex=info"
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
            blogdex::commands::init::init_site(&target_dir)?;
            println!("Initialized empty blog in {:?}", target_dir);
        }

        Commands::New { kind, title, slug } => {
            let blog = blogdex::Blog::new(&base_dir)?;
            let path = blogdex::commands::new::create_item(&blog, kind, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Generate { watch } => {
            let blog = blogdex::Blog::new(&base_dir)?;
            tracing::info!("Generating route props...");

            blog.generate()?;
            println!("Generated successfully!");

            if watch {
                blogdex::commands::generate::watch(&blog).await?;
            }
        }

        Commands::Clean => {
            let blog = blogdex::Blog::new(&base_dir)?;
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = blogdex::Blog::new(&base_dir)?;
            blogdex::commands::list::run(&blog, &r#type)?;
        }

        Commands::Show { kind, slug, json } => {
            let blog = blogdex::Blog::new(&base_dir)?;
            blogdex::commands::show::run(&blog, kind, &slug, json)?;
        }
    }

    Ok(())
}
