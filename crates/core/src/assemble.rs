//! Policy assembly: one forward pass over one syntax tree.
//!
//! [`PolicyBuilder`] holds the symbol tables for a single pass. It is driven
//! by [`walk`](crate::walk::walk) through the [`PolicyListener`] callbacks
//! and consumed by [`PolicyBuilder::finish`], so a builder can never be
//! reused for a second tree.

use crate::ast::{Node, NodeTag, RuleType, TimeUnit};
use crate::config::{BuildOptions, UnknownUnitPolicy};
use crate::duration;
use crate::error::{BuildError, BuildWarning};
use crate::rules;
use crate::scan::scan;
use crate::symbols::SymbolTables;
use crate::walk::{walk, PolicyListener};
use govdsl_model::{Activity, Deadline, Participant, Policy, Project, Task};
use std::collections::BTreeSet;

/// A successfully built policy and the warnings recorded on the way.
#[derive(Debug)]
pub struct BuildOutcome {
    pub policy: Policy,
    /// Distinct participant names defined by the tree.
    pub participants: usize,
    /// Distinct deadline names defined by the tree.
    pub deadlines: usize,
    pub warnings: Vec<BuildWarning>,
}

/// Per-pass build state.
#[derive(Debug)]
pub struct PolicyBuilder {
    options: BuildOptions,
    tables: SymbolTables,
    project: Option<Project>,
    /// Set once the project's exit hook has assigned its activities.
    project_closed: bool,
    warnings: Vec<BuildWarning>,
}

impl PolicyBuilder {
    pub fn new(options: BuildOptions) -> Self {
        PolicyBuilder {
            options,
            tables: SymbolTables::new(),
            project: None,
            project_closed: false,
            warnings: Vec::new(),
        }
    }

    /// Symbol tables as populated so far.
    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    /// Hand out the finished policy. Valid only after a complete walk.
    pub fn finish(self) -> Result<BuildOutcome, BuildError> {
        let PolicyBuilder {
            tables,
            project,
            project_closed,
            warnings,
            ..
        } = self;
        match project {
            Some(project) if project_closed => Ok(BuildOutcome {
                participants: tables.participants.len(),
                deadlines: tables.deadlines.len(),
                policy: Policy {
                    project,
                    rules: tables.rules.into_iter().collect(),
                },
                warnings,
            }),
            _ => Err(BuildError::MissingProject),
        }
    }

    fn define_participants(
        &mut self,
        node: &Node,
        make: fn(String) -> Participant,
    ) -> Result<(), BuildError> {
        for id in scan(node, NodeTag::ParticipantId) {
            let name = id.kind.ident().unwrap_or_default().to_string();
            let policy = self.options.participants.collision;
            if let Some(w) = self.tables.define_participant(make(name), policy)? {
                self.warnings.push(w);
            }
        }
        Ok(())
    }
}

impl PolicyListener for PolicyBuilder {
    fn enter_project(&mut self, _node: &Node, name: &str) -> Result<(), BuildError> {
        log::debug!("building project '{}'", name);
        self.project = Some(Project::new(name));
        Ok(())
    }

    fn exit_project(&mut self, _node: &Node, _name: &str) -> Result<(), BuildError> {
        if let Some(project) = self.project.as_mut() {
            project.activities = self.tables.activities.values().cloned().collect();
            self.project_closed = true;
        }
        Ok(())
    }

    fn enter_activity(&mut self, node: &Node, name: &str) -> Result<(), BuildError> {
        let tasks: BTreeSet<Task> = scan(node, NodeTag::Task)
            .into_iter()
            .filter_map(|t| t.kind.ident())
            .map(Task::new)
            .collect();
        self.tables.define_activity(Activity {
            name: name.to_string(),
            tasks,
        });
        Ok(())
    }

    fn enter_roles(&mut self, node: &Node) -> Result<(), BuildError> {
        self.define_participants(node, Participant::role)
    }

    fn enter_individuals(&mut self, node: &Node) -> Result<(), BuildError> {
        self.define_participants(node, Participant::individual)
    }

    fn enter_deadline(
        &mut self,
        _node: &Node,
        name: &str,
        amount: i64,
        unit: &TimeUnit,
    ) -> Result<(), BuildError> {
        let normalized = duration::normalize(amount, unit)?;
        if let Some(unit) = normalized.unsupported_unit {
            if self.options.deadlines.unknown_unit == UnknownUnitPolicy::Reject {
                return Err(BuildError::UnsupportedTimeUnit(unit));
            }
            log::warn!(
                "deadline '{}': unsupported time unit '{}', defaulting to days",
                name,
                unit
            );
            self.warnings.push(BuildWarning::UnsupportedTimeUnit {
                deadline: name.to_string(),
                unit,
            });
        }
        self.tables.define_deadline(Deadline {
            name: name.to_string(),
            duration: normalized.duration,
        });
        Ok(())
    }

    fn enter_rule(
        &mut self,
        node: &Node,
        name: &str,
        rule_type: &RuleType,
    ) -> Result<(), BuildError> {
        let rule = rules::build_rule(node, name, rule_type, &self.tables)?;
        log::debug!("rule '{}' built as {}", name, rule.kind_name());
        self.tables.define_rule(rule);
        Ok(())
    }
}

/// Build a policy from `tree` with a fresh builder.
pub fn build_policy(tree: &Node, options: BuildOptions) -> Result<BuildOutcome, BuildError> {
    let mut builder = PolicyBuilder::new(options);
    walk(tree, &mut builder)?;
    builder.finish()
}
