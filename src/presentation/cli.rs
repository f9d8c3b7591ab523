// Command-line arguments
use crate::application::session::FilterDimension;
use crate::domain::selection::Role;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "enterprise-monitor")]
#[command(about = "Enterprise repair and deviation monitoring dashboard", long_about = None)]
pub struct Cli {
    /// Config file (without extension is fine), defaults to config/monitor
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Dataset file (.json or .toml), overrides the configured one
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive and render the dashboard for a selection
    View(ViewArgs),
    /// List the values each filter can take
    Options {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print map markers for the enterprises a selection shows
    Markers(ViewArgs),
}

#[derive(Debug, Args, Default)]
pub struct ViewArgs {
    #[arg(long)]
    pub role: Option<Role>,

    /// Active enterprise for the user role
    #[arg(long)]
    pub enterprise: Option<u32>,

    /// Selection snapshot (JSON) to start from
    #[arg(long)]
    pub selection: Option<PathBuf>,

    #[arg(long = "region")]
    pub regions: Vec<String>,

    #[arg(long = "enterprise-id")]
    pub enterprise_ids: Vec<u32>,

    #[arg(long = "type")]
    pub deviation_types: Vec<String>,

    #[arg(long = "responsible")]
    pub responsible_names: Vec<String>,

    /// Flip one region in or out of the selection
    #[arg(long = "toggle-region")]
    pub toggle_regions: Vec<String>,

    #[arg(long = "toggle-enterprise")]
    pub toggle_enterprises: Vec<u32>,

    #[arg(long = "toggle-type")]
    pub toggle_types: Vec<String>,

    #[arg(long = "toggle-responsible")]
    pub toggle_responsible: Vec<String>,

    /// Clear the snapshot's filters before applying flags
    #[arg(long)]
    pub reset: bool,

    /// Toggle "select all" on a filter dimension
    #[arg(long = "select-all", value_enum)]
    pub select_all: Vec<DimensionArg>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    Regions,
    Enterprises,
    Types,
    Responsible,
}

impl From<DimensionArg> for FilterDimension {
    fn from(dimension: DimensionArg) -> Self {
        match dimension {
            DimensionArg::Regions => FilterDimension::Regions,
            DimensionArg::Enterprises => FilterDimension::Enterprises,
            DimensionArg::Types => FilterDimension::DeviationTypes,
            DimensionArg::Responsible => FilterDimension::ResponsibleNames,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_flags() {
        let cli = Cli::parse_from([
            "enterprise-monitor",
            "view",
            "--role",
            "admin",
            "--region",
            "Москва",
            "--region",
            "Санкт-Петербург",
            "--type",
            "Превышение бюджета",
            "--select-all",
            "responsible",
            "--format",
            "json",
        ]);

        match cli.command {
            Some(Commands::View(args)) => {
                assert_eq!(args.role, Some(Role::Admin));
                assert_eq!(args.regions, vec!["Москва", "Санкт-Петербург"]);
                assert_eq!(args.deviation_types, vec!["Превышение бюджета"]);
                assert_eq!(args.select_all, vec![DimensionArg::Responsible]);
                assert!(!args.reset);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_toggle_flags() {
        let cli = Cli::parse_from([
            "enterprise-monitor",
            "markers",
            "--role",
            "user",
            "--toggle-region",
            "Москва",
            "--toggle-enterprise",
            "2",
            "--toggle-type",
            "Нарушение технологии",
            "--toggle-responsible",
            "Иванов И.И.",
        ]);

        match cli.command {
            Some(Commands::Markers(args)) => {
                assert_eq!(args.role, Some(Role::User));
                assert_eq!(args.toggle_regions, vec!["Москва"]);
                assert_eq!(args.toggle_enterprises, vec![2]);
                assert_eq!(args.toggle_types, vec!["Нарушение технологии"]);
                assert_eq!(args.toggle_responsible, vec!["Иванов И.И."]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(Cli::try_parse_from(["enterprise-monitor", "view", "--role", "root"]).is_err());
    }

    #[test]
    fn test_global_dataset_flag() {
        let cli = Cli::parse_from(["enterprise-monitor", "options", "--dataset", "data/enterprises.json"]);
        assert_eq!(cli.dataset, Some(PathBuf::from("data/enterprises.json")));
        assert!(matches!(cli.command, Some(Commands::Options { .. })));
    }
}
