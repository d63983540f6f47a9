//! CLI entry point for the `atlas` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use tech_atlas::cli::commands;
use tech_atlas::filter::{FilterCriterion, NumericOperator, StringOperator, TechObjectFilter};
use tech_atlas::{AtlasConfig, AtlasError, AtlasResult, FilterLogic};

#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Tech Atlas CLI: navigate a technology catalog by abstraction level"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON catalog file; overrides [catalog] path from the config
    #[arg(long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List relationship kinds, for one dimension or all of them
    Vocab {
        /// temporal, structural, paradigm, system, usecase or experience
        dimension: Option<String>,
    },
    /// Show one tech object
    Show {
        /// Tech object id
        id: String,
    },
    /// Abstract up: objects one level higher related to this one
    Up {
        /// Current tech object id
        id: String,
        /// Required relationship as dimension:KIND (repeatable)
        #[arg(long = "filter")]
        filters: Vec<String>,
        /// How filters combine: and, or
        #[arg(long)]
        logic: Option<String>,
    },
    /// Abstract down to a specific object one level lower
    Down {
        /// Current tech object id
        id: String,
        /// Target tech object id
        target: String,
    },
    /// View an object at another version
    Horizontal {
        /// Tech object id
        id: String,
        /// Target version, e.g. 3.12.0
        version: String,
    },
    /// Filter the catalog by name, level and relationships
    Filter {
        #[arg(long)]
        name_equals: Option<String>,
        #[arg(long)]
        name_contains: Option<String>,
        #[arg(long)]
        name_starts_with: Option<String>,
        #[arg(long)]
        level_eq: Option<u8>,
        #[arg(long)]
        level_gt: Option<u8>,
        #[arg(long)]
        level_lt: Option<u8>,
        /// Outgoing relationship as dimension:KIND:target (repeatable)
        #[arg(long = "rel")]
        relationships: Vec<String>,
        /// How criteria combine: and, or
        #[arg(long, default_value = "and")]
        logic: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = run(cli, json).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            AtlasError::Io(_) => 1,
            AtlasError::Json(_)
            | AtlasError::InvalidId(_)
            | AtlasError::InvalidLevel(_)
            | AtlasError::InvalidVersionString { .. }
            | AtlasError::InvalidVersionTree { .. }
            | AtlasError::InvalidRelationshipKind { .. }
            | AtlasError::InvalidCriterion(_) => 2,
            AtlasError::NotFound(_) | AtlasError::VersionNotFound { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

async fn run(cli: Cli, json: bool) -> AtlasResult<()> {
    let config = match &cli.config {
        Some(path) => AtlasConfig::load(path)?,
        None => AtlasConfig::load_or_default(),
    };
    let catalog = cli.catalog.or(config.catalog.path.clone());
    let catalog = || {
        catalog.clone().ok_or_else(|| {
            AtlasError::Config("no catalog given: pass --catalog or set [catalog] path".into())
        })
    };

    match cli.command {
        Commands::Vocab { dimension } => {
            let dimension = dimension
                .map(|d| commands::parse_dimension(&d))
                .transpose()?;
            commands::cmd_vocab(dimension, json)
        }
        Commands::Show { id } => commands::cmd_show(&catalog()?, &id, json).await,
        Commands::Up { id, filters, logic } => {
            let filters = filters
                .iter()
                .map(|f| commands::parse_relationship_filter(f))
                .collect::<AtlasResult<Vec<_>>>()?;
            let logic = logic.map(|l| commands::parse_logic(&l)).transpose()?;
            commands::cmd_up(&catalog()?, &config.navigation, &id, filters, logic, json).await
        }
        Commands::Down { id, target } => {
            commands::cmd_down(&catalog()?, &config.navigation, &id, &target, json).await
        }
        Commands::Horizontal { id, version } => {
            commands::cmd_horizontal(&catalog()?, &config.navigation, &id, &version, json).await
        }
        Commands::Filter {
            name_equals,
            name_contains,
            name_starts_with,
            level_eq,
            level_gt,
            level_lt,
            relationships,
            logic,
        } => {
            let mut criteria = Vec::new();
            if let Some(v) = name_equals {
                criteria.push(FilterCriterion::name(StringOperator::Equals, v));
            }
            if let Some(v) = name_contains {
                criteria.push(FilterCriterion::name(StringOperator::Contains, v));
            }
            if let Some(v) = name_starts_with {
                criteria.push(FilterCriterion::name(StringOperator::StartsWith, v));
            }
            if let Some(v) = level_eq {
                criteria.push(FilterCriterion::level(NumericOperator::Equals, v));
            }
            if let Some(v) = level_gt {
                criteria.push(FilterCriterion::level(NumericOperator::GreaterThan, v));
            }
            if let Some(v) = level_lt {
                criteria.push(FilterCriterion::level(NumericOperator::LessThan, v));
            }
            for rel in &relationships {
                criteria.push(commands::parse_relationship_criterion(rel)?);
            }
            let logic: FilterLogic = commands::parse_logic(&logic)?;
            let filter = TechObjectFilter::new(criteria, logic);
            commands::cmd_filter(&catalog()?, &filter, json).await
        }
    }
}
