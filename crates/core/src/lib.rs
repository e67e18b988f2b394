//! govdsl-core: semantic analysis for the governance policy language.
//!
//! Turns a syntax tree produced by an external front end into a validated
//! [`Policy`](govdsl_model::Policy) in a single forward pass.
//!
//! # Public API
//!
//! - [`build_policy()`] -- run one pass over a tree with fresh state
//! - [`PolicyBuilder`] -- the per-pass state, driven by [`walk()`]
//! - [`BuildError`] / [`BuildWarning`] -- fatal and recoverable conditions
//! - [`BuildOptions`] -- collision and time-unit policies
//! - AST types: [`Node`], [`NodeKind`], [`NodeTag`], [`TimeUnit`], [`RuleType`]
//!
//! The component functions ([`scan()`], [`normalize()`], [`build_rule()`])
//! are re-exported for callers that drive their own traversal.

pub mod assemble;
pub mod ast;
pub mod config;
pub mod duration;
pub mod error;
pub mod load;
pub mod rules;
pub mod scan;
pub mod source;
pub mod symbols;
pub mod walk;

// ── Convenience re-exports: key types ────────────────────────────────

pub use assemble::{BuildOutcome, PolicyBuilder};
pub use ast::{Node, NodeKind, NodeTag, RuleType, TimeUnit};
pub use config::{BuildOptions, CollisionPolicy, UnknownUnitPolicy};
pub use error::{BuildError, BuildWarning};
pub use symbols::SymbolTables;
pub use walk::PolicyListener;

// ── Convenience re-exports: entry points ─────────────────────────────

pub use assemble::build_policy;
pub use duration::normalize;
pub use load::{load_options, load_tree, parse_tree};
pub use rules::build_rule;
pub use scan::scan;
pub use walk::walk;
