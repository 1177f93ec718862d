// ABOUTME: CLI argument definitions for the PDC CLI application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Args, Parser, Subcommand};
use pdc_sdk::ImageFilters;

use crate::constants::{env_vars, messages};

#[derive(Parser, Debug)]
#[command(name = "pdc")]
#[command(about = "A CLI for the Product Definition Catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Server name from the config file, or a PDC API root URL
    #[arg(long, short, global = true, env = env_vars::SERVER)]
    pub server: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty print JSON output
    #[arg(long, global = true, requires = "json")]
    pub pretty: bool,

    /// Number of records requested per page
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Do not verify the server's TLS certificate
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query disk and ISO image records
    #[command(subcommand)]
    Image(ImageCommands),
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: crate::completions::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// List all images
    List {
        /// Display SHA256 checksums along with the file names
        #[arg(long)]
        show_sha256: bool,

        #[command(flatten)]
        filters: ImageFilterArgs,
    },
    /// Display details of an image
    #[command(long_about = messages::INFO_DESCRIPTION)]
    Info {
        /// Exact file name of the image
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// SHA256 checksum to pick one of several images with the same name
        #[arg(long)]
        sha256: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
#[command(next_help_heading = "Filtering")]
pub struct ImageFilterArgs {
    #[arg(long)]
    pub arch: Option<String>,
    #[arg(long)]
    pub compose: Option<String>,
    #[arg(long)]
    pub file_name: Option<String>,
    #[arg(long)]
    pub image_format: Option<String>,
    #[arg(long)]
    pub image_type: Option<String>,
    #[arg(long)]
    pub implant_md5: Option<String>,
    #[arg(long)]
    pub md5: Option<String>,
    #[arg(long)]
    pub sha1: Option<String>,
    #[arg(long)]
    pub sha256: Option<String>,
    #[arg(long)]
    pub volume_id: Option<String>,
    #[arg(long)]
    pub subvariant: Option<String>,
}

impl From<ImageFilterArgs> for ImageFilters {
    fn from(args: ImageFilterArgs) -> Self {
        ImageFilters {
            arch: args.arch,
            compose: args.compose,
            file_name: args.file_name,
            image_format: args.image_format,
            image_type: args.image_type,
            implant_md5: args.implant_md5,
            md5: args.md5,
            sha1: args.sha1,
            sha256: args.sha256,
            volume_id: args.volume_id,
            subvariant: args.subvariant,
        }
    }
}
