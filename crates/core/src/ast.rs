//! Syntax tree types consumed by the policy builder.
//!
//! The tree is produced by an external parsing front end. It mirrors the
//! grammar's node taxonomy: every node has a kind (with the leaf data that
//! kind carries), the source line it started on, and its children in
//! document order.

use serde::Deserialize;
use std::fmt;

// ──────────────────────────────────────────────
// Nodes
// ──────────────────────────────────────────────

/// One node of the governance syntax tree.
///
/// In JSON form a node is an object whose `kind` field selects the variant,
/// with the variant's payload fields alongside `line` and `children`:
///
/// ```json
/// { "kind": "Deadline", "line": 7, "name": "sprintEnd", "amount": 2, "unit": "weeks" }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub line: u32,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// Closed set of node kinds, each with its own leaf payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum NodeKind {
    Policy,
    Project {
        name: String,
    },
    Activity {
        name: String,
    },
    Task {
        name: String,
    },
    /// Container for the `Roles` and `Individuals` sections.
    Participants,
    Roles,
    Individuals,
    ParticipantId {
        name: String,
    },
    /// Container for deadline definitions.
    Conditions,
    Deadline {
        name: String,
        amount: i64,
        unit: TimeUnit,
    },
    Rules,
    Rule {
        name: String,
        rule_type: RuleType,
    },
    RuleContent,
    /// Deadline referenced by a rule.
    DeadlineRef {
        name: String,
    },
    AppliedTo {
        scope: String,
    },
    People,
    MinVotes {
        value: i64,
    },
    RangeType {
        range: String,
    },
    Ratio {
        value: f64,
    },
    /// Fallback rule of a leader-driven rule.
    Default {
        rule: String,
    },
}

/// Payload-free discriminant of [`NodeKind`], used to search for nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Policy,
    Project,
    Activity,
    Task,
    Participants,
    Roles,
    Individuals,
    ParticipantId,
    Conditions,
    Deadline,
    Rules,
    Rule,
    RuleContent,
    DeadlineRef,
    AppliedTo,
    People,
    MinVotes,
    RangeType,
    Ratio,
    Default,
}

impl NodeKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Policy => NodeTag::Policy,
            NodeKind::Project { .. } => NodeTag::Project,
            NodeKind::Activity { .. } => NodeTag::Activity,
            NodeKind::Task { .. } => NodeTag::Task,
            NodeKind::Participants => NodeTag::Participants,
            NodeKind::Roles => NodeTag::Roles,
            NodeKind::Individuals => NodeTag::Individuals,
            NodeKind::ParticipantId { .. } => NodeTag::ParticipantId,
            NodeKind::Conditions => NodeTag::Conditions,
            NodeKind::Deadline { .. } => NodeTag::Deadline,
            NodeKind::Rules => NodeTag::Rules,
            NodeKind::Rule { .. } => NodeTag::Rule,
            NodeKind::RuleContent => NodeTag::RuleContent,
            NodeKind::DeadlineRef { .. } => NodeTag::DeadlineRef,
            NodeKind::AppliedTo { .. } => NodeTag::AppliedTo,
            NodeKind::People => NodeTag::People,
            NodeKind::MinVotes { .. } => NodeTag::MinVotes,
            NodeKind::RangeType { .. } => NodeTag::RangeType,
            NodeKind::Ratio { .. } => NodeTag::Ratio,
            NodeKind::Default { .. } => NodeTag::Default,
        }
    }

    /// The identifier carried by kinds that are named by one.
    pub fn ident(&self) -> Option<&str> {
        match self {
            NodeKind::Project { name }
            | NodeKind::Activity { name }
            | NodeKind::Task { name }
            | NodeKind::ParticipantId { name }
            | NodeKind::Deadline { name, .. }
            | NodeKind::Rule { name, .. }
            | NodeKind::DeadlineRef { name } => Some(name.as_str()),
            NodeKind::AppliedTo { scope } => Some(scope.as_str()),
            NodeKind::RangeType { range } => Some(range.as_str()),
            NodeKind::Default { rule } => Some(rule.as_str()),
            _ => None,
        }
    }
}

impl Node {
    pub fn new(kind: NodeKind, line: u32, children: Vec<Node>) -> Self {
        Node {
            kind,
            line,
            children,
        }
    }

    /// A node with no children.
    pub fn leaf(kind: NodeKind, line: u32) -> Self {
        Node::new(kind, line, Vec::new())
    }

    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }
}

// ──────────────────────────────────────────────
// Leaf tags
// ──────────────────────────────────────────────

/// Time unit of a deadline amount as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years,
    /// Any unit the grammar accepted but the model has no conversion for.
    Other(String),
}

impl TimeUnit {
    pub fn as_str(&self) -> &str {
        match self {
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
            TimeUnit::Other(s) => s,
        }
    }
}

impl From<&str> for TimeUnit {
    fn from(s: &str) -> Self {
        match s {
            "days" => TimeUnit::Days,
            "weeks" => TimeUnit::Weeks,
            "months" => TimeUnit::Months,
            "years" => TimeUnit::Years,
            other => TimeUnit::Other(other.to_string()),
        }
    }
}

impl From<String> for TimeUnit {
    fn from(s: String) -> Self {
        TimeUnit::from(s.as_str())
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule type tag as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RuleType {
    Majority,
    Ratio,
    LeaderDriven,
    /// Unreachable for grammar-valid input; kept so the builder can reject it.
    Other(String),
}

impl RuleType {
    pub fn as_str(&self) -> &str {
        match self {
            RuleType::Majority => "Majority",
            RuleType::Ratio => "Ratio",
            RuleType::LeaderDriven => "LeaderDriven",
            RuleType::Other(s) => s,
        }
    }
}

impl From<&str> for RuleType {
    fn from(s: &str) -> Self {
        match s {
            "Majority" => RuleType::Majority,
            "Ratio" => RuleType::Ratio,
            "LeaderDriven" => RuleType::LeaderDriven,
            other => RuleType::Other(other.to_string()),
        }
    }
}

impl From<String> for RuleType {
    fn from(s: String) -> Self {
        RuleType::from(s.as_str())
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
