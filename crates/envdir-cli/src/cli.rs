//! Argument definitions and configuration loading

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use envdir_core::LoaderConfig;
use envdir_model::PlatformType;
use envdir_primitives::NonEmptyString;
use std::path::{Path, PathBuf};

/// Build the `envdir` command
#[must_use]
pub fn command() -> Command {
    Command::new("envdir")
        .version(envdir_core::VERSION)
        .about("Validate and edit schema-checked environments directories")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file overriding file names and limits"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log at debug level (overrides RUST_LOG)"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("check")
                .about("Validate an environments directory")
                .arg(directory_arg())
                .arg(
                    Arg::new("recursive")
                        .long("recursive")
                        .short('r')
                        .action(ArgAction::SetTrue)
                        .help("Treat the path as a root and check every environments directory below it"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Describe a project, or resolve the selected environment for one platform")
                .arg(directory_arg())
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .short('p')
                        .value_parser(value_parser!(PlatformType))
                        .help("Platform type to resolve, e.g. JVM"),
                ),
        )
        .subcommand(
            Command::new("select")
                .about("Select an environment, or clear the selection when no name is given")
                .arg(directory_arg())
                .arg(
                    Arg::new("name")
                        .value_parser(value_parser!(NonEmptyString))
                        .help("Environment name"),
                ),
        )
}

fn directory_arg() -> Arg {
    Arg::new("directory")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Environments directory")
}

/// Load a [`LoaderConfig`] from TOML; missing keys keep their defaults
///
/// # Errors
/// If the file cannot be read or is not a valid configuration
pub fn load_config(path: &Path) -> Result<LoaderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parse_show_with_platform() {
        let matches = command()
            .try_get_matches_from(["envdir", "show", "environments", "--platform", "ANDROID"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "show");
        assert_eq!(args.get_one::<PlatformType>("platform"), Some(&PlatformType::Android));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        assert!(command()
            .try_get_matches_from(["envdir", "show", "environments", "--platform", "BEOS"])
            .is_err());
    }

    #[test]
    fn select_without_name_clears() {
        let matches = command()
            .try_get_matches_from(["envdir", "select", "environments"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert!(args.get_one::<NonEmptyString>("name").is_none());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("envdir.toml");
        std::fs::write(&path, "max_file_size = 2048\nproject_directory_name = \"config\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.max_file_size, 2048);
        assert_eq!(config.project_directory_name, "config");
        assert_eq!(config.schema_file_name, "schema.json");
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("envdir.toml");
        std::fs::write(&path, "max_file_size = \"big\"").unwrap();

        assert!(load_config(&path).is_err());
        assert!(load_config(&temp.path().join("missing.toml")).is_err());
    }
}
