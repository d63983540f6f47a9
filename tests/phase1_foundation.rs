//! Phase 1 tests: vocabularies, ids, levels, versions and the graph model.

use tech_atlas::graph::{TechVersion, ViewerDataBundle};
use tech_atlas::types::{AbstractionLevel, AtlasError, Dimension, TechObjectId, VersionNumber};
use tech_atlas::vocab::{
    self, DimensionKind, ExperienceKind, ParadigmKind, RelationKind, StructuralKind, SystemKind,
    TemporalKind, UseCaseKind,
};
use tech_atlas::{RelationshipRecord, TechObjectBuilder};

fn id(s: &str) -> TechObjectId {
    TechObjectId::new(s).unwrap()
}

fn v(s: &str) -> VersionNumber {
    VersionNumber::parse(s).unwrap()
}

// ==================== Vocabulary Tests ====================

fn check_partition_and_involution<K: RelationKind>() {
    let all = K::all();
    assert!(!all.is_empty());
    for kind in all {
        assert_ne!(
            kind.is_directional(),
            kind.is_bidirectional(),
            "{} must be exactly one of directional/bidirectional",
            kind
        );
        assert_eq!(kind.reverse().reverse(), kind, "{} reverse is not an involution", kind);
        if kind.is_directional() {
            assert_ne!(kind.reverse(), kind);
        }
    }
}

#[test]
fn test_every_vocabulary_partitions_and_involutes() {
    check_partition_and_involution::<TemporalKind>();
    check_partition_and_involution::<StructuralKind>();
    check_partition_and_involution::<ParadigmKind>();
    check_partition_and_involution::<SystemKind>();
    check_partition_and_involution::<UseCaseKind>();
    check_partition_and_involution::<ExperienceKind>();
}

#[test]
fn test_verify_all_passes() {
    vocab::verify_all().unwrap();
}

#[test]
fn test_vocabulary_sizes() {
    assert_eq!(TemporalKind::all().len(), 9);
    assert_eq!(StructuralKind::all().len(), 16);
    assert_eq!(ParadigmKind::all().len(), 8);
    assert_eq!(SystemKind::all().len(), 9);
    assert_eq!(UseCaseKind::all().len(), 8);
    assert_eq!(ExperienceKind::all().len(), 7);
}

#[test]
fn test_from_u8_roundtrip() {
    for val in 0u8..16 {
        let kind = StructuralKind::from_u8(val).unwrap();
        assert_eq!(kind as u8, val);
    }
    assert!(StructuralKind::from_u8(16).is_none());
    assert!(StructuralKind::from_u8(255).is_none());
}

#[test]
fn test_known_pairs() {
    assert_eq!(StructuralKind::Uses.reverse(), StructuralKind::UsedBy);
    assert_eq!(StructuralKind::Influences.reverse(), StructuralKind::InfluencedBy);
    assert!(StructuralKind::CompatibleWith.is_bidirectional());
    assert_eq!(TemporalKind::Supersedes.reverse(), TemporalKind::SupersededBy);
    assert!(TemporalKind::ContemporaryWith.is_bidirectional());
    assert_eq!(SystemKind::RunsOn.reverse(), SystemKind::Hosts);
    assert_eq!(ExperienceKind::EasierThan.reverse(), ExperienceKind::HarderThan);
}

#[test]
fn test_kind_parse_case_insensitive() {
    assert_eq!(StructuralKind::parse("uses").unwrap(), StructuralKind::Uses);
    assert_eq!(StructuralKind::parse("Used_By").unwrap(), StructuralKind::UsedBy);
    assert_eq!(StructuralKind::parse("USES").unwrap(), StructuralKind::Uses);
}

#[test]
fn test_kind_parse_rejects_foreign_kind() {
    // RUNS_ON belongs to the system vocabulary
    let err = StructuralKind::parse("RUNS_ON").unwrap_err();
    assert!(matches!(
        err,
        AtlasError::InvalidRelationshipKind {
            dimension: Dimension::Structural,
            ..
        }
    ));
    assert!(DimensionKind::parse(Dimension::System, "RUNS_ON").is_ok());
}

#[test]
fn test_dimension_kind() {
    let kind = DimensionKind::parse(Dimension::Structural, "uses").unwrap();
    assert_eq!(kind, DimensionKind::Structural(StructuralKind::Uses));
    assert_eq!(kind.dimension(), Dimension::Structural);
    assert_eq!(kind.name(), "USES");
    assert_eq!(kind.reverse(), DimensionKind::from(StructuralKind::UsedBy));
    assert!(kind.is_directional());
    assert_eq!(kind.to_string(), "structural:USES");
}

#[test]
fn test_kind_names_listing() {
    for dimension in Dimension::ALL {
        let names = vocab::kind_names(dimension);
        assert!(!names.is_empty());
        for name in names {
            assert!(DimensionKind::parse(dimension, name).is_ok());
        }
    }
}

#[test]
fn test_dimension_names() {
    for dimension in Dimension::ALL {
        assert_eq!(Dimension::from_name(dimension.name()), Some(dimension));
    }
    assert_eq!(Dimension::from_name("use_case"), Some(Dimension::UseCase));
    assert_eq!(Dimension::from_name("unknown"), None);
}

// ==================== Id Tests ====================

#[test]
fn test_id_grammar() {
    assert!(TechObjectId::new("python").is_ok());
    assert!(TechObjectId::new("node.js_v-18").is_ok());
    assert!(TechObjectId::new("").is_err());
    assert!(TechObjectId::new("has space").is_err());
    assert!(TechObjectId::new("a/b").is_err());
    assert!(TechObjectId::new("x".repeat(128)).is_ok());
    assert!(matches!(
        TechObjectId::new("x".repeat(129)),
        Err(AtlasError::InvalidId(_))
    ));
}

#[test]
fn test_id_serde() {
    let parsed: TechObjectId = serde_json::from_str("\"django\"").unwrap();
    assert_eq!(parsed.as_str(), "django");
    assert!(serde_json::from_str::<TechObjectId>("\"bad id\"").is_err());
}

// ==================== Level Tests ====================

#[test]
fn test_level_ranks() {
    for rank in 1u8..=5 {
        let level = AbstractionLevel::from_rank(rank).unwrap();
        assert_eq!(level.rank(), rank);
    }
    assert!(AbstractionLevel::from_rank(0).is_none());
    assert!(AbstractionLevel::from_rank(6).is_none());
    assert!(matches!(
        AbstractionLevel::try_from_rank(-1),
        Err(AtlasError::InvalidLevel(-1))
    ));
}

#[test]
fn test_can_abstract_to_symmetric_and_adjacent() {
    for a in AbstractionLevel::ALL {
        for b in AbstractionLevel::ALL {
            assert_eq!(a.can_abstract_to(b), b.can_abstract_to(a));
            assert_eq!(a.can_abstract_to(b), a.rank().abs_diff(b.rank()) == 1);
        }
    }
}

#[test]
fn test_level_higher_lower() {
    assert_eq!(
        AbstractionLevel::Language.higher(),
        Some(AbstractionLevel::Library)
    );
    assert_eq!(AbstractionLevel::Platform.higher(), None);
    assert_eq!(AbstractionLevel::Language.lower(), None);
    assert_eq!(
        AbstractionLevel::Platform.lower(),
        Some(AbstractionLevel::Application)
    );
}

// ==================== Version Tests ====================

#[test]
fn test_version_roundtrip() {
    let versions = [
        VersionNumber::new(3, 12, 0),
        VersionNumber::new(1, 0, 0).with_prerelease("rc.1").unwrap(),
        VersionNumber::new(2, 1, 7).with_build("build.5").unwrap(),
        VersionNumber::new(0, 9, 1)
            .with_prerelease("beta")
            .and_then(|v| v.with_build("sha.abc"))
            .unwrap(),
    ];
    for version in versions {
        assert_eq!(VersionNumber::parse(&version.to_string()).unwrap(), version);
    }
}

#[test]
fn test_version_builder_rejects_malformed_tags() {
    let base = VersionNumber::new(1, 0, 0);
    for bad in ["", "rc+7", "a..b", "01", "rc.01", "béta"] {
        assert!(
            matches!(
                base.clone().with_prerelease(bad),
                Err(AtlasError::InvalidVersionString { .. })
            ),
            "prerelease {:?} should be rejected",
            bad
        );
    }
    for bad in ["", "sha+1", "x..y", "a_b"] {
        assert!(
            matches!(
                base.clone().with_build(bad),
                Err(AtlasError::InvalidVersionString { .. })
            ),
            "build {:?} should be rejected",
            bad
        );
    }
}

#[test]
fn test_version_built_by_hand_roundtrips() {
    for (pre, build) in [("rc.7", "7"), ("alpha-1", "001"), ("1", "sha.0ab")] {
        let version = VersionNumber::new(4, 0, 2)
            .with_prerelease(pre)
            .and_then(|v| v.with_build(build))
            .unwrap();
        assert_eq!(version.prerelease(), Some(pre));
        assert_eq!(version.build(), Some(build));
        assert_eq!(VersionNumber::parse(&version.to_string()).unwrap(), version);
    }
}

#[test]
fn test_version_order_agrees_with_equality() {
    let versions: Vec<VersionNumber> = ["1.0.0-1", "1.0.0-2", "1.0.0-rc", "1.0.0", "1.0.0+b", "1.0.1"]
        .iter()
        .map(|s| VersionNumber::parse(s).unwrap())
        .collect();
    for a in &versions {
        for b in &versions {
            assert_eq!(a.cmp(b) == std::cmp::Ordering::Equal, a == b, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_version_parse_errors() {
    for bad in ["", "1", "1.2", "1.2.3.4", "01.2.3", "1.2.x", "1.2.3-", "1.2.3+", "1.2.3-a..b"] {
        assert!(
            matches!(
                VersionNumber::parse(bad),
                Err(AtlasError::InvalidVersionString { .. })
            ),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn test_version_ordering() {
    assert!(v("1.0.0") < v("2.0.0"));
    assert!(v("1.2.0") < v("1.10.0"));
    assert!(v("1.0.0-alpha") < v("1.0.0"));
    assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    assert!(v("1.0.0-alpha.1") < v("1.0.0-beta"));
    assert!(v("1.0.0-2") < v("1.0.0-10"));
    assert!(v("1.0.0-10") < v("1.0.0-a"));
    assert!(v("1.0.0-rc.1") < v("1.0.0"));
    assert!(!v("1.0.0").is_prerelease());
    assert!(v("1.0.0-rc.1").is_prerelease());
}

// ==================== Graph Model Tests ====================

#[test]
fn test_relationship_record_parse() {
    let record =
        RelationshipRecord::<StructuralKind>::parse(id("django"), id("python"), "uses").unwrap();
    assert_eq!(record.kind, StructuralKind::Uses);
    assert!(record.is_active);

    let err = RelationshipRecord::<StructuralKind>::parse(id("django"), id("python"), "HOSTS")
        .unwrap_err();
    assert!(matches!(err, AtlasError::InvalidRelationshipKind { .. }));
}

#[test]
fn test_relationship_record_reversed_and_deactivated() {
    let record = RelationshipRecord::new(id("django"), id("python"), StructuralKind::Uses)
        .with_context("since", serde_json::json!("2005"));
    let back = record.reversed();
    assert_eq!(back.source_id, id("python"));
    assert_eq!(back.target_id, id("django"));
    assert_eq!(back.kind, StructuralKind::UsedBy);

    let retired = record.deactivate();
    assert!(!retired.is_active);
    assert!(!retired.matches(StructuralKind::Uses, &id("python")));
}

fn python_versions() -> Vec<TechVersion> {
    let mut v3_bundle = ViewerDataBundle::new();
    v3_bundle.add_relationship(
        id("python"),
        TemporalKind::Supersedes.into(),
        id("python2"),
        true,
    );
    vec![
        TechVersion::new(id("python-2"), v("2.0.0"))
            .with_child(TechVersion::new(id("python-2-7"), v("2.7.0"))),
        TechVersion::new(id("python-3"), v("3.0.0"))
            .with_viewer_data(v3_bundle)
            .with_child(
                TechVersion::new(id("python-3-11"), v("3.11.0"))
                    .with_child(TechVersion::new(id("python-3-12"), v("3.12.0"))),
            ),
    ]
}

#[test]
fn test_version_lookup_across_roots() {
    let python = TechObjectBuilder::new("python", "Python", AbstractionLevel::Language)
        .version(python_versions()[0].clone())
        .version(python_versions()[1].clone())
        .build()
        .unwrap();

    assert_eq!(python.version_count(), 5);
    let found = python.find_version("3.12.0").unwrap().unwrap();
    assert_eq!(found.id, id("python-3-12"));
    assert_eq!(
        python.find_version("2.7.0").unwrap().unwrap().id,
        id("python-2-7")
    );
    assert!(python.find_version("4.0.0").unwrap().is_none());
    assert!(python.find_version("three").is_err());
    assert_eq!(python.latest_version().unwrap().version, v("3.12.0"));
}

#[test]
fn test_version_walk_is_preorder() {
    let root = python_versions().remove(1);
    let order: Vec<String> = root.walk().iter().map(|v| v.version.to_string()).collect();
    assert_eq!(order, vec!["3.0.0", "3.11.0", "3.12.0"]);
}

#[test]
fn test_duplicate_versions_rejected() {
    let result = TechObjectBuilder::new("python", "Python", AbstractionLevel::Language)
        .version(
            TechVersion::new(id("python-3"), v("3.0.0"))
                .with_child(TechVersion::new(id("python-3b"), v("3.0.0"))),
        )
        .build();
    assert!(matches!(result, Err(AtlasError::InvalidVersionTree { .. })));
}

#[test]
fn test_builder_relations() {
    let django = TechObjectBuilder::new("django", "Django", AbstractionLevel::Framework)
        .relate(StructuralKind::Uses, "python")
        .relate_inactive(StructuralKind::DependsOn, "python2")
        .build()
        .unwrap();

    let data = django.viewer_data();
    assert_eq!(data.relationship_count(), 2);
    assert!(data.has_active_relationship(&StructuralKind::Uses.into(), &id("python")));
    assert!(!data.has_active_relationship(&StructuralKind::DependsOn.into(), &id("python2")));
    assert_eq!(data.active_edges(Dimension::Structural).len(), 1);

    assert!(TechObjectBuilder::new("bad id", "Bad", AbstractionLevel::Library)
        .build()
        .is_err());
}

#[test]
fn test_at_version_swaps_viewer_data_only() {
    let python = TechObjectBuilder::new("python", "Python", AbstractionLevel::Language)
        .relate(StructuralKind::Influences, "javascript")
        .version(python_versions()[1].clone())
        .build()
        .unwrap();

    let v3 = python.find_version("3.0.0").unwrap().unwrap();
    let view = python.at_version(v3);
    assert_eq!(view.id(), python.id());
    assert_eq!(view.name(), "Python");
    assert_eq!(view.level(), AbstractionLevel::Language);
    assert!(view
        .viewer_data()
        .has_active_relationship(&TemporalKind::Supersedes.into(), &id("python2")));
    assert!(!view
        .viewer_data()
        .has_active_relationship(&StructuralKind::Influences.into(), &id("javascript")));
}
