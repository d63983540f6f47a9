//! Phase 4 tests: DTO mapping, configuration, repository and CLI integration.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use tech_atlas::config::NavigationConfig;
use tech_atlas::dto::{parse_catalog, TechObjectDto};
use tech_atlas::graph::{TechVersion, ViewerDataBundle};
use tech_atlas::repository::{InMemoryRepository, TechObjectRepository};
use tech_atlas::types::{AbstractionLevel, AtlasError, Dimension, TechObjectId, VersionNumber};
use tech_atlas::vocab::{ExperienceKind, StructuralKind, TemporalKind};
use tech_atlas::{AtlasConfig, FilterLogic, TechObject, TechObjectBuilder};

fn id(s: &str) -> TechObjectId {
    TechObjectId::new(s).unwrap()
}

fn v(s: &str) -> VersionNumber {
    VersionNumber::parse(s).unwrap()
}

fn catalog() -> Vec<TechObject> {
    let mut v312 = ViewerDataBundle::new();
    v312.temporal.facts.first_released = Some("2023-10-02".into());
    v312.add_relationship(
        id("python"),
        TemporalKind::Supersedes.into(),
        id("python-3-11"),
        true,
    );
    let mut python_data = ViewerDataBundle::new();
    python_data.paradigm.facts.paradigms = vec!["object-oriented".into(), "functional".into()];
    python_data.experience.facts.satisfaction = Some(0.75);

    vec![
        TechObjectBuilder::new("python", "Python", AbstractionLevel::Language)
            .viewer_data(python_data)
            .relate(ExperienceKind::EasierThan, "cpp")
            .version(
                TechVersion::new(id("python-3-11"), v("3.11.0"))
                    .with_child(TechVersion::new(id("python-3-12"), v("3.12.0")).with_viewer_data(v312)),
            )
            .build()
            .unwrap(),
        TechObjectBuilder::new("numpy", "NumPy", AbstractionLevel::Library)
            .relate(StructuralKind::Uses, "python")
            .build()
            .unwrap(),
        TechObjectBuilder::new("requests", "Requests", AbstractionLevel::Library)
            .relate(StructuralKind::Uses, "python")
            .relate_inactive(StructuralKind::DependsOn, "urllib3")
            .build()
            .unwrap(),
        TechObjectBuilder::new("django", "Django", AbstractionLevel::Framework)
            .relate(StructuralKind::DependsOn, "requests")
            .build()
            .unwrap(),
    ]
}

fn catalog_json() -> String {
    let dtos: Vec<TechObjectDto> = catalog().iter().map(TechObjectDto::from).collect();
    serde_json::to_string_pretty(&dtos).unwrap()
}

fn catalog_file() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(catalog_json().as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

// ==================== DTO Tests ====================

#[test]
fn test_dto_roundtrip_preserves_everything() {
    for object in catalog() {
        let dto = TechObjectDto::from(&object);
        let json = serde_json::to_string(&dto).unwrap();
        let back: TechObjectDto = serde_json::from_str(&json).unwrap();
        assert_eq!(TechObject::try_from(back).unwrap(), object);
    }
}

#[test]
fn test_dto_uses_camel_case_keys() {
    let json = catalog_json();
    assert!(json.contains("\"viewersData\""));
    assert!(json.contains("\"sourceId\""));
    assert!(json.contains("\"targetId\""));
    assert!(json.contains("\"isActive\""));
    assert!(json.contains("\"firstReleased\""));
}

#[test]
fn test_dto_minimal_object() {
    let dtos = parse_catalog(r#"[{"id": "rust", "name": "Rust", "level": 1}]"#).unwrap();
    let rust = TechObject::try_from(dtos[0].clone()).unwrap();
    assert_eq!(rust.level(), AbstractionLevel::Language);
    assert!(rust.versions().is_empty());
    assert_eq!(rust.viewer_data().relationship_count(), 0);
}

#[test]
fn test_dto_rejects_foreign_kind() {
    let dtos = parse_catalog(
        r#"[{"id": "numpy", "name": "NumPy", "level": 2,
             "viewersData": {"structural": {"relationships": [
                 {"sourceId": "numpy", "targetId": "python", "kind": "RUNS_ON"}
             ]}}}]"#,
    )
    .unwrap();
    assert!(matches!(
        TechObject::try_from(dtos[0].clone()),
        Err(AtlasError::InvalidRelationshipKind {
            dimension: Dimension::Structural,
            ..
        })
    ));
}

#[test]
fn test_dto_rejects_bad_level_and_version() {
    let bad_level = parse_catalog(r#"[{"id": "x", "name": "X", "level": 9}]"#).unwrap();
    assert!(matches!(
        TechObject::try_from(bad_level[0].clone()),
        Err(AtlasError::InvalidLevel(9))
    ));

    let bad_version = parse_catalog(
        r#"[{"id": "x", "name": "X", "level": 1,
             "versions": [{"id": "x-1", "version": "1.0"}]}]"#,
    )
    .unwrap();
    assert!(matches!(
        TechObject::try_from(bad_version[0].clone()),
        Err(AtlasError::InvalidVersionString { .. })
    ));
}

#[test]
fn test_dto_relationship_defaults_active() {
    let dtos = parse_catalog(
        r#"[{"id": "numpy", "name": "NumPy", "level": 2,
             "viewersData": {"structural": {"architecture": "C extension", "relationships": [
                 {"sourceId": "numpy", "targetId": "python", "kind": "uses"}
             ]}}}]"#,
    )
    .unwrap();
    let numpy = TechObject::try_from(dtos[0].clone()).unwrap();
    assert_eq!(
        numpy.viewer_data().structural.facts.architecture.as_deref(),
        Some("C extension")
    );
    assert!(numpy
        .viewer_data()
        .has_active_relationship(&StructuralKind::Uses.into(), &id("python")));
}

// ==================== Repository Tests ====================

#[tokio::test]
async fn test_in_memory_repository_crud() {
    let repository = InMemoryRepository::from_objects(catalog());
    assert_eq!(repository.len().await, 4);

    let found = repository
        .find_by_ids(&[id("django"), id("missing"), id("python")])
        .await
        .unwrap();
    let names: Vec<&str> = found.iter().map(|o| o.name()).collect();
    // Repository order, not request order
    assert_eq!(names, vec!["Python", "Django"]);

    let renamed = TechObjectBuilder::new("numpy", "Numerical Python", AbstractionLevel::Library)
        .build()
        .unwrap();
    repository.save(renamed).await.unwrap();
    assert_eq!(repository.len().await, 4);
    let all = repository.find_all().await.unwrap();
    assert_eq!(all[1].name(), "Numerical Python");

    repository.delete(&id("numpy")).await.unwrap();
    repository.delete(&id("numpy")).await.unwrap();
    assert!(repository.find_by_id(&id("numpy")).await.unwrap().is_none());
    assert_eq!(repository.len().await, 3);
}

#[tokio::test]
async fn test_repository_lookup_after_duplicates_and_delete() {
    let library = |i: usize, name: &str| {
        TechObjectBuilder::new(format!("lib-{}", i), name, AbstractionLevel::Library)
            .build()
            .unwrap()
    };
    let mut objects: Vec<TechObject> = (0..5_000).map(|i| library(i, "first")).collect();
    objects.extend((0..5_000).step_by(2).map(|i| library(i, "second")));

    let repository = InMemoryRepository::from_objects(objects);
    assert_eq!(repository.len().await, 5_000);
    let all = repository.find_all().await.unwrap();
    assert_eq!(all[0].id().as_str(), "lib-0");
    assert_eq!(all[0].name(), "second");
    assert_eq!(all[1].name(), "first");

    repository.delete(&id("lib-10")).await.unwrap();
    let after = repository.find_by_id(&id("lib-4999")).await.unwrap().unwrap();
    assert_eq!(after.id().as_str(), "lib-4999");
    let shifted = repository.find_by_id(&id("lib-11")).await.unwrap().unwrap();
    assert_eq!(shifted.name(), "first");

    repository.save(library(10, "restored")).await.unwrap();
    let all = repository.find_all().await.unwrap();
    assert_eq!(all.last().unwrap().name(), "restored");
    repository.save(library(11, "renamed")).await.unwrap();
    let all = repository.find_all().await.unwrap();
    assert_eq!(all[10].id().as_str(), "lib-11");
    assert_eq!(all[10].name(), "renamed");
}

#[tokio::test]
async fn test_repository_from_dtos() {
    let repository = InMemoryRepository::from_dtos(parse_catalog(&catalog_json()).unwrap()).unwrap();
    let python = repository.find_by_id(&id("python")).await.unwrap().unwrap();
    assert_eq!(python.version_count(), 2);
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = AtlasConfig::default();
    assert_eq!(config.session.max_history, 100);
    assert_eq!(config.navigation.default_logic, FilterLogic::And);
    assert!(config.catalog.path.is_none());
}

#[test]
fn test_config_save_load() {
    let tmp = NamedTempFile::new().unwrap();
    let mut config = AtlasConfig::default();
    config.session.max_history = 5;
    config.navigation.default_logic = FilterLogic::Or;
    config.catalog.path = Some(PathBuf::from("/data/catalog.json"));

    config.save(tmp.path()).unwrap();
    let loaded = AtlasConfig::load(tmp.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_partial_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "[navigation]\ndefault_logic = \"or\"").unwrap();
    let loaded = AtlasConfig::load(tmp.path()).unwrap();
    assert_eq!(loaded.navigation.default_logic, FilterLogic::Or);
    assert_eq!(loaded.session.max_history, 100);
}

#[test]
fn test_config_cannot_disable_vocabulary_check() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "[navigation]\ndefault_logic = \"OR\"\nverify_vocabulary = false").unwrap();
    let loaded = AtlasConfig::load(tmp.path()).unwrap();
    assert_eq!(loaded.navigation, NavigationConfig { default_logic: FilterLogic::Or });

    let saved = NamedTempFile::new().unwrap();
    loaded.save(saved.path()).unwrap();
    let text = std::fs::read_to_string(saved.path()).unwrap();
    assert!(!text.contains("verify_vocabulary"));
    assert!(text.contains("default_logic = \"OR\""));
}

#[test]
fn test_config_invalid_file() {
    let mut tmp = NamedTempFile::new().unwrap();
    writeln!(tmp, "[session]\nmax_history = \"lots\"").unwrap();
    assert!(matches!(
        AtlasConfig::load(tmp.path()),
        Err(AtlasError::Config(_))
    ));
}

// ==================== CLI Helpers ====================

/// Locate the `atlas` binary built alongside test binaries.
fn atlas_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove "deps"
    path.push("atlas");
    path
}

/// Run the `atlas` CLI against a catalog file and return the output.
fn run_atlas(catalog: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(atlas_bin())
        .arg("--catalog")
        .arg(catalog.path())
        .args(args)
        .output()
        .expect("Failed to run atlas")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "atlas failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn json_ids(output: &Output) -> Vec<String> {
    let values: Vec<serde_json::Value> = serde_json::from_str(&stdout_str(output)).unwrap();
    values
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_vocab() {
    let catalog = catalog_file();
    let output = run_atlas(&catalog, &["vocab", "structural"]);
    assert_success(&output);
    let text = stdout_str(&output);
    assert!(text.contains("USES"));
    assert!(text.contains("USED_BY"));
    assert!(text.contains("COMPATIBLE_WITH"));
    assert!(!text.contains("RUNS_ON"));
}

#[test]
fn test_cli_show() {
    let catalog = catalog_file();
    let output = run_atlas(&catalog, &["show", "numpy"]);
    assert_success(&output);
    let text = stdout_str(&output);
    assert!(text.contains("NumPy"));
    assert!(text.contains("--USES--> python"));
}

#[test]
fn test_cli_up_json() {
    let catalog = catalog_file();
    let output = run_atlas(
        &catalog,
        &["--format", "json", "up", "python", "--filter", "structural:USES"],
    );
    assert_success(&output);
    assert_eq!(json_ids(&output), vec!["numpy", "requests"]);
}

#[test]
fn test_cli_up_no_match() {
    let catalog = catalog_file();
    let output = run_atlas(
        &catalog,
        &["--format", "json", "up", "python", "--filter", "structural:EXTENDS"],
    );
    assert_success(&output);
    assert!(json_ids(&output).is_empty());
}

#[test]
fn test_cli_down_and_horizontal() {
    let catalog = catalog_file();
    let output = run_atlas(&catalog, &["down", "django", "requests"]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Requests"));

    let output = run_atlas(&catalog, &["--format", "json", "horizontal", "python", "3.12.0"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["version"], "3.12.0");
    assert_eq!(value["object"]["id"], "python");
}

#[test]
fn test_cli_filter() {
    let catalog = catalog_file();
    let output = run_atlas(
        &catalog,
        &[
            "--format",
            "json",
            "filter",
            "--level-eq",
            "2",
            "--rel",
            "structural:USES:python",
        ],
    );
    assert_success(&output);
    assert_eq!(json_ids(&output), vec!["numpy", "requests"]);

    let output = run_atlas(
        &catalog,
        &["--format", "json", "filter", "--name-starts-with", "D", "--name-equals", "NumPy", "--logic", "or"],
    );
    assert_success(&output);
    assert_eq!(json_ids(&output), vec!["numpy", "django"]);
}

#[test]
fn test_cli_exit_codes() {
    let catalog = catalog_file();

    let missing = run_atlas(&catalog, &["show", "ruby"]);
    assert_eq!(missing.status.code(), Some(4));

    let bad_version = run_atlas(&catalog, &["horizontal", "python", "three"]);
    assert_eq!(bad_version.status.code(), Some(2));

    let bad_kind = run_atlas(&catalog, &["up", "python", "--filter", "structural:RUNS_ON"]);
    assert_eq!(bad_kind.status.code(), Some(2));

    let not_adjacent = run_atlas(&catalog, &["down", "django", "python"]);
    assert_eq!(not_adjacent.status.code(), Some(5));

    let output = Command::new(atlas_bin())
        .args(["--catalog", "/nonexistent/catalog.json", "show", "python"])
        .output()
        .expect("Failed to run atlas");
    assert_eq!(output.status.code(), Some(1));
}
