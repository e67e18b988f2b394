//! govdsl-model: the in-memory governance policy model.
//!
//! These are the entities produced by `govdsl-core` after semantic analysis
//! of a governance syntax tree. Cross-references between entities (a rule's
//! deadline, its participants, a leader-driven rule's default) are shared
//! [`Rc`](std::rc::Rc) handles into the same graph, never copies.

pub mod types;

pub use types::{
    Activity, Deadline, Individual, Participant, Policy, Project, RangeType, Role, Rule, RuleKind,
    Task,
};
