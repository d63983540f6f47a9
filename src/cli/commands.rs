//! CLI command implementations.

use std::path::Path;
use std::sync::Arc;

use crate::config::NavigationConfig;
use crate::dto::{parse_catalog, TechObjectDto};
use crate::filter::{FilterCriterion, FilterLogic, TechObjectFilter};
use crate::graph::TechObject;
use crate::navigation::{NavigationEngine, RelationshipFilter};
use crate::repository::{InMemoryRepository, TechObjectRepository};
use crate::types::{AtlasError, AtlasResult, Dimension, TechObjectId};
use crate::vocab::{self, DimensionKind};

/// Read a JSON catalog file into an in-memory repository.
pub fn load_catalog(path: &Path) -> AtlasResult<InMemoryRepository> {
    let content = std::fs::read_to_string(path)?;
    let repository = InMemoryRepository::from_dtos(parse_catalog(&content)?)?;
    log::debug!("Loaded catalog {}", path.display());
    Ok(repository)
}

fn engine_for(path: &Path, config: &NavigationConfig) -> AtlasResult<NavigationEngine> {
    let repository: Arc<dyn TechObjectRepository> = Arc::new(load_catalog(path)?);
    NavigationEngine::with_config(repository, config)
}

/// Parse `dimension:KIND`, as given to `--filter`.
pub fn parse_relationship_filter(input: &str) -> AtlasResult<RelationshipFilter> {
    let (dimension, kind) = input.split_once(':').ok_or_else(|| {
        AtlasError::InvalidCriterion(format!("expected dimension:KIND, got '{}'", input))
    })?;
    Ok(RelationshipFilter::new(parse_kind(dimension, kind)?))
}

/// Parse `dimension:KIND:target`, as given to `--rel`.
pub fn parse_relationship_criterion(input: &str) -> AtlasResult<FilterCriterion> {
    let mut parts = input.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(dimension), Some(kind), Some(target)) => Ok(FilterCriterion::has_relationship(
            parse_kind(dimension, kind)?,
            TechObjectId::new(target)?,
        )),
        _ => Err(AtlasError::InvalidCriterion(format!(
            "expected dimension:KIND:target, got '{}'",
            input
        ))),
    }
}

fn parse_kind(dimension: &str, kind: &str) -> AtlasResult<DimensionKind> {
    let dimension = parse_dimension(dimension)?;
    DimensionKind::parse(dimension, kind)
}

/// Parse a dimension name.
pub fn parse_dimension(name: &str) -> AtlasResult<Dimension> {
    Dimension::from_name(name)
        .ok_or_else(|| AtlasError::InvalidCriterion(format!("unknown dimension '{}'", name)))
}

/// Parse `and` / `or`.
pub fn parse_logic(name: &str) -> AtlasResult<FilterLogic> {
    FilterLogic::from_name(name)
        .ok_or_else(|| AtlasError::InvalidCriterion(format!("unknown logic '{}'", name)))
}

/// List the relationship vocabulary of one or all dimensions.
pub fn cmd_vocab(dimension: Option<Dimension>, json: bool) -> AtlasResult<()> {
    let dimensions: Vec<Dimension> = match dimension {
        Some(d) => vec![d],
        None => Dimension::ALL.to_vec(),
    };

    if json {
        let mut out = serde_json::Map::new();
        for d in &dimensions {
            let kinds: Vec<serde_json::Value> = vocab::kind_names(*d)
                .into_iter()
                .filter_map(|name| DimensionKind::parse(*d, name).ok())
                .map(|kind| {
                    serde_json::json!({
                        "kind": kind.name(),
                        "reverse": kind.reverse().name(),
                        "directional": kind.is_directional(),
                    })
                })
                .collect();
            out.insert(d.name().to_string(), serde_json::Value::Array(kinds));
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        for d in &dimensions {
            println!("{}:", d);
            for name in vocab::kind_names(*d) {
                let kind = DimensionKind::parse(*d, name)?;
                if kind.is_directional() {
                    println!("  {:<24} <-> {}", kind.name(), kind.reverse().name());
                } else {
                    println!("  {:<24} (bidirectional)", kind.name());
                }
            }
        }
    }
    Ok(())
}

/// Show one object with its versions and active relationships.
pub async fn cmd_show(path: &Path, id: &str, json: bool) -> AtlasResult<()> {
    let repository = load_catalog(path)?;
    let id = TechObjectId::new(id)?;
    let object = repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AtlasError::NotFound(id.to_string()))?;

    if json {
        print_json(&TechObjectDto::from(&object));
    } else {
        print_object(&object);
        let versions: Vec<String> = object
            .versions()
            .iter()
            .flat_map(|root| root.walk())
            .map(|v| v.version.to_string())
            .collect();
        if !versions.is_empty() {
            println!("  Versions: {}", versions.join(", "));
        }
        for dimension in Dimension::ALL {
            for (kind, target) in object.viewer_data().active_edges(dimension) {
                println!("  {} --{}--> {}", dimension, kind.name(), target);
            }
        }
    }
    Ok(())
}

/// Abstract up from an object.
pub async fn cmd_up(
    path: &Path,
    config: &NavigationConfig,
    id: &str,
    filters: Vec<RelationshipFilter>,
    logic: Option<FilterLogic>,
    json: bool,
) -> AtlasResult<()> {
    let engine = engine_for(path, config)?;
    let current = engine.fetch(&TechObjectId::new(id)?).await?;
    let logic = logic.unwrap_or(engine.default_logic());
    let objects = engine.abstract_up(&current, &filters, logic).await?;

    if json {
        let dtos: Vec<TechObjectDto> = objects.iter().map(TechObjectDto::from).collect();
        print_json(&dtos);
    } else if objects.is_empty() {
        println!("No objects above '{}' match.", current.id());
    } else {
        for object in &objects {
            print_object(object);
        }
    }
    Ok(())
}

/// Abstract down from an object to a specific target.
pub async fn cmd_down(
    path: &Path,
    config: &NavigationConfig,
    id: &str,
    target: &str,
    json: bool,
) -> AtlasResult<()> {
    let engine = engine_for(path, config)?;
    let current = engine.fetch(&TechObjectId::new(id)?).await?;
    let object = engine
        .abstract_down(&current, &TechObjectId::new(target)?)
        .await?;

    if json {
        print_json(&TechObjectDto::from(&object));
    } else {
        print_object(&object);
    }
    Ok(())
}

/// View an object at a version.
pub async fn cmd_horizontal(
    path: &Path,
    config: &NavigationConfig,
    id: &str,
    version: &str,
    json: bool,
) -> AtlasResult<()> {
    let engine = engine_for(path, config)?;
    let view = engine
        .navigate_horizontal(&TechObjectId::new(id)?, version)
        .await?;

    if json {
        print_json(&serde_json::json!({
            "version": view.version.to_string(),
            "object": TechObjectDto::from(&view.object),
        }));
    } else {
        println!("{} @ {}", view.object.name(), view.version);
        for dimension in Dimension::ALL {
            for (kind, target) in view.object.viewer_data().active_edges(dimension) {
                println!("  {} --{}--> {}", dimension, kind.name(), target);
            }
        }
    }
    Ok(())
}

/// Filter the whole catalog.
pub async fn cmd_filter(path: &Path, filter: &TechObjectFilter, json: bool) -> AtlasResult<()> {
    let repository = load_catalog(path)?;
    let objects = filter.retain(repository.find_all().await?);

    if json {
        let dtos: Vec<TechObjectDto> = objects.iter().map(TechObjectDto::from).collect();
        print_json(&dtos);
    } else {
        println!("{} object(s) match {}:", objects.len(), filter.logic());
        for object in &objects {
            print_object(object);
        }
    }
    Ok(())
}

fn print_object(object: &TechObject) {
    println!(
        "{:<20} {:<24} {}",
        object.id().as_str(),
        object.name(),
        object.level()
    );
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}
