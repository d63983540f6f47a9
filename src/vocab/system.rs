//! System relationships: runtimes, targets and bindings.

use serde::{Deserialize, Serialize};

use super::RelationKind;
use crate::types::Dimension;

/// How two tech objects relate at the execution-environment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SystemKind {
    /// This object executes on that runtime or platform.
    RunsOn = 0,
    Hosts = 1,
    /// This object compiles down to that object.
    CompilesTo = 2,
    CompilationTargetOf = 3,
    /// This object exposes bindings to that object.
    BindsTo = 4,
    BoundBy = 5,
    /// This object is deployed on that object.
    DeployedOn = 6,
    DeploymentTargetOf = 7,
    InteroperatesWith = 8,
}

impl RelationKind for SystemKind {
    const DIMENSION: Dimension = Dimension::System;

    const TABLE: &'static [(Self, Self)] = &[
        (Self::RunsOn, Self::Hosts),
        (Self::Hosts, Self::RunsOn),
        (Self::CompilesTo, Self::CompilationTargetOf),
        (Self::CompilationTargetOf, Self::CompilesTo),
        (Self::BindsTo, Self::BoundBy),
        (Self::BoundBy, Self::BindsTo),
        (Self::DeployedOn, Self::DeploymentTargetOf),
        (Self::DeploymentTargetOf, Self::DeployedOn),
        (Self::InteroperatesWith, Self::InteroperatesWith),
    ];

    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::RunsOn),
            1 => Some(Self::Hosts),
            2 => Some(Self::CompilesTo),
            3 => Some(Self::CompilationTargetOf),
            4 => Some(Self::BindsTo),
            5 => Some(Self::BoundBy),
            6 => Some(Self::DeployedOn),
            7 => Some(Self::DeploymentTargetOf),
            8 => Some(Self::InteroperatesWith),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::RunsOn => "RUNS_ON",
            Self::Hosts => "HOSTS",
            Self::CompilesTo => "COMPILES_TO",
            Self::CompilationTargetOf => "COMPILATION_TARGET_OF",
            Self::BindsTo => "BINDS_TO",
            Self::BoundBy => "BOUND_BY",
            Self::DeployedOn => "DEPLOYED_ON",
            Self::DeploymentTargetOf => "DEPLOYMENT_TARGET_OF",
            Self::InteroperatesWith => "INTEROPERATES_WITH",
        }
    }
}

impl std::fmt::Display for SystemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
