//! Typed structs for the governance policy model.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;
use time::Duration;

// ── Policy / Project ────────────────────────────────────────────────

/// Root of a built model. Owns exactly one project.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub project: Project,
    /// Every rule defined in the tree, keyed by name. Later definitions of a
    /// name replace earlier ones.
    pub rules: BTreeMap<String, Rc<Rule>>,
}

impl Policy {
    pub fn rule(&self, name: &str) -> Option<&Rc<Rule>> {
        self.rules.get(name)
    }
}

/// The governed unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Written once, when the project's subtree has been fully visited.
    pub activities: BTreeSet<Activity>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Project {
            name: name.into(),
            activities: BTreeSet::new(),
        }
    }

    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }
}

// ── Activity / Task ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Activity {
    pub name: String,
    pub tasks: BTreeSet<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Task {
    pub name: String,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Task { name: name.into() }
    }
}

// ── Participants ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Role {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Individual {
    pub name: String,
}

/// Anything a rule can name as a voter: a role or an individual.
///
/// Both kinds live in one namespace when rules resolve participant names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Participant {
    Role(Role),
    Individual(Individual),
}

impl Participant {
    pub fn role(name: impl Into<String>) -> Self {
        Participant::Role(Role { name: name.into() })
    }

    pub fn individual(name: impl Into<String>) -> Self {
        Participant::Individual(Individual { name: name.into() })
    }

    pub fn name(&self) -> &str {
        match self {
            Participant::Role(r) => &r.name,
            Participant::Individual(i) => &i.name,
        }
    }

    /// Lower-case kind label used in diagnostics ("role" / "individual").
    pub fn kind(&self) -> &'static str {
        match self {
            Participant::Role(_) => "role",
            Participant::Individual(_) => "individual",
        }
    }
}

// ── Deadline ────────────────────────────────────────────────────────

/// A named, normalized duration condition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline {
    pub name: String,
    pub duration: Duration,
}

// ── Rules ───────────────────────────────────────────────────────────

/// Qualifies how votes are counted for majority-style rules.
///
/// Stored in canonical form: spaces replaced by underscores, upper case
/// (`"present ones"` becomes `PRESENT_ONES`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RangeType(String);

impl RangeType {
    pub fn from_source(text: &str) -> Self {
        RangeType(text.trim().replace(' ', "_").to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A governance decision rule: the shared base record plus its variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: String,
    /// Identifier of the collaboration scope the rule governs.
    pub applied_to: String,
    /// Not populated by the current front end.
    pub stage: Option<String>,
    /// Not populated by the current front end.
    pub query_filter: Option<String>,
    pub deadline: Rc<Deadline>,
    pub people: BTreeSet<Rc<Participant>>,
    pub kind: RuleKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    Majority {
        min_votes: u32,
        range_type: RangeType,
    },
    RatioMajority {
        min_votes: u32,
        range_type: RangeType,
        ratio: f64,
    },
    /// Falls back to `default` when the leader does not decide.
    LeaderDriven { default: Rc<Rule> },
}

impl Rule {
    pub fn min_votes(&self) -> Option<u32> {
        match &self.kind {
            RuleKind::Majority { min_votes, .. } | RuleKind::RatioMajority { min_votes, .. } => {
                Some(*min_votes)
            }
            RuleKind::LeaderDriven { .. } => None,
        }
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.people.iter().any(|p| p.name() == name)
    }

    /// Variant name as written in the source language.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            RuleKind::Majority { .. } => "Majority",
            RuleKind::RatioMajority { .. } => "RatioMajority",
            RuleKind::LeaderDriven { .. } => "LeaderDriven",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_type_is_canonicalized() {
        assert_eq!(RangeType::from_source("present ones").as_str(), "PRESENT_ONES");
        assert_eq!(RangeType::from_source("qualified").as_str(), "QUALIFIED");
    }

    #[test]
    fn participants_share_a_namespace_by_name() {
        let role = Participant::role("reviewer");
        let person = Participant::individual("reviewer");
        assert_eq!(role.name(), person.name());
        assert_ne!(role, person);
        assert_eq!(role.kind(), "role");
        assert_eq!(person.kind(), "individual");
    }

    #[test]
    fn leader_driven_has_no_min_votes() {
        let deadline = Rc::new(Deadline {
            name: "d".to_string(),
            duration: Duration::days(1),
        });
        let base = Rc::new(Rule {
            name: "r0".to_string(),
            applied_to: "pr".to_string(),
            stage: None,
            query_filter: None,
            deadline: deadline.clone(),
            people: BTreeSet::new(),
            kind: RuleKind::Majority {
                min_votes: 3,
                range_type: RangeType::from_source("present"),
            },
        });
        let leader = Rule {
            name: "r1".to_string(),
            applied_to: "pr".to_string(),
            stage: None,
            query_filter: None,
            deadline,
            people: BTreeSet::new(),
            kind: RuleKind::LeaderDriven {
                default: base.clone(),
            },
        };
        assert_eq!(base.min_votes(), Some(3));
        assert_eq!(leader.min_votes(), None);
        assert_eq!(leader.kind_name(), "LeaderDriven");
    }
}
