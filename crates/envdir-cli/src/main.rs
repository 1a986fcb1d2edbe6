//! `envdir` binary

use anyhow::Result;
use envdir_cli::{cli, commands, init_tracing};
use envdir_core::{LoaderConfig, ProjectStore};
use envdir_model::PlatformType;
use envdir_primitives::NonEmptyString;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli::command().get_matches();
    init_tracing(matches.get_flag("verbose"), matches.get_flag("json-logs"));

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => cli::load_config(path)?,
        None => LoaderConfig::default(),
    };
    let store = ProjectStore::with_config(config);
    let mut out = std::io::stdout().lock();

    match matches.subcommand() {
        Some(("check", args)) => {
            let Some(directory) = args.get_one::<PathBuf>("directory") else {
                unreachable!("directory is a required argument");
            };
            let valid = commands::check(&store, directory, args.get_flag("recursive"), &mut out).await?;
            if !valid {
                std::process::exit(1);
            }
        }
        Some(("show", args)) => {
            let Some(directory) = args.get_one::<PathBuf>("directory") else {
                unreachable!("directory is a required argument");
            };
            let platform = args.get_one::<PlatformType>("platform").copied();
            commands::show(&store, directory, platform, &mut out).await?;
        }
        Some(("select", args)) => {
            let Some(directory) = args.get_one::<PathBuf>("directory") else {
                unreachable!("directory is a required argument");
            };
            let name = args.get_one::<NonEmptyString>("name").cloned();
            commands::select(&store, directory, name, &mut out).await?;
        }
        _ => unreachable!("a subcommand is required"),
    }

    Ok(())
}
