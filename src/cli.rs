use clap::{Args, Parser, Subcommand};

use scriptblox::api::{FetchParams, Mode, SortBy, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "scriptblox", version, about = "ScriptBlox script catalog CLI")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// API root, overrides the config file and SCRIPTBLOX_API_URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Also write logs to a timestamped file
    #[arg(long, global = true)]
    pub log_file: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch one page of scripts
    Fetch(FetchArgs),
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    #[arg(long)]
    pub page: Option<u32>,
    /// Scripts per page (at most 20)
    #[arg(long)]
    pub max: Option<u32>,
    /// Script id to leave out
    #[arg(long)]
    pub exclude: Option<String>,
    /// free or paid
    #[arg(long)]
    pub mode: Option<Mode>,
    #[arg(long)]
    pub patched: Option<bool>,
    /// Has a key system
    #[arg(long)]
    pub key: Option<bool>,
    #[arg(long)]
    pub universal: Option<bool>,
    #[arg(long)]
    pub verified: Option<bool>,
    /// views, likeCount, createdAt, updatedAt or dislikeCount
    #[arg(long)]
    pub sort_by: Option<SortBy>,
    /// asc or desc
    #[arg(long)]
    pub order: Option<SortOrder>,
    /// Print raw JSON instead of a table
    #[arg(long)]
    pub json: bool,
    /// Print the request URL without sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a commented default config file
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

impl FetchArgs {
    pub fn to_params(&self) -> FetchParams {
        FetchParams {
            page: self.page,
            max: self.max,
            exclude: self.exclude.clone(),
            mode: self.mode,
            patched: self.patched,
            key: self.key,
            universal: self.universal,
            verified: self.verified,
            sort_by: self.sort_by,
            order: self.order,
        }
    }
}
