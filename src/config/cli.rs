use crate::core::forms::ProjectCategory;
use crate::domain::login::Role;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "galerya")]
#[command(about = "GaleRya gallery, admin tables and login from the terminal")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a galerya.toml config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Backend base URL (overrides config file and GALERYA_API_URL)")]
    pub api_url: Option<String>,

    #[arg(long, global = true, help = "Log format: compact or json")]
    pub log_format: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sign in against the backend and print the redirect route
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "artist")]
        role: Role,
    },

    /// Admin user table
    Users {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        role: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, help = "Delete the user with this id before listing")]
        delete: Option<String>,
    },

    /// Admin artwork table
    Artworks {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long, help = "Delete the artwork with this id before listing")]
        delete: Option<String>,
    },

    /// Public gallery grid
    Gallery {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// Static dashboard numbers
    Stats,

    /// Build a project submission from the upload form
    Upload {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "Visual Art")]
        category: ProjectCategory,
        #[arg(long = "tag", help = "Tag to add; repeatable")]
        tags: Vec<String>,
        #[arg(long, help = "Comma separated tags")]
        tag_list: Option<String>,
    },

    /// Validate and save account settings
    Settings {
        #[arg(long, help = "JSON file with the current settings")]
        file: Option<PathBuf>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
}
