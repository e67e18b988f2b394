//! Pre-order traversal of the syntax tree with listener callbacks.
//!
//! [`walk`] visits nodes depth-first in document order and calls the
//! matching `enter_*` method before a node's children. The project node is
//! the only one with an exit hook, called after all of its children.

use crate::ast::{Node, NodeKind, RuleType, TimeUnit};
use crate::error::BuildError;

/// Callbacks invoked by [`walk`]. All methods default to doing nothing.
pub trait PolicyListener {
    fn enter_policy(&mut self, _node: &Node) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_project(&mut self, _node: &Node, _name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn exit_project(&mut self, _node: &Node, _name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_activity(&mut self, _node: &Node, _name: &str) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_roles(&mut self, _node: &Node) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_individuals(&mut self, _node: &Node) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_deadline(
        &mut self,
        _node: &Node,
        _name: &str,
        _amount: i64,
        _unit: &TimeUnit,
    ) -> Result<(), BuildError> {
        Ok(())
    }

    fn enter_rule(
        &mut self,
        _node: &Node,
        _name: &str,
        _rule_type: &RuleType,
    ) -> Result<(), BuildError> {
        Ok(())
    }
}

/// Walk `node` and its descendants, stopping at the first listener error.
pub fn walk<L: PolicyListener + ?Sized>(node: &Node, listener: &mut L) -> Result<(), BuildError> {
    match &node.kind {
        NodeKind::Policy => listener.enter_policy(node)?,
        NodeKind::Project { name } => listener.enter_project(node, name)?,
        NodeKind::Activity { name } => listener.enter_activity(node, name)?,
        NodeKind::Roles => listener.enter_roles(node)?,
        NodeKind::Individuals => listener.enter_individuals(node)?,
        NodeKind::Deadline { name, amount, unit } => {
            listener.enter_deadline(node, name, *amount, unit)?
        }
        NodeKind::Rule { name, rule_type } => listener.enter_rule(node, name, rule_type)?,
        // read by their enclosing construct, no callback of their own
        NodeKind::Task { .. }
        | NodeKind::Participants
        | NodeKind::ParticipantId { .. }
        | NodeKind::Conditions
        | NodeKind::Rules
        | NodeKind::RuleContent
        | NodeKind::DeadlineRef { .. }
        | NodeKind::AppliedTo { .. }
        | NodeKind::People
        | NodeKind::MinVotes { .. }
        | NodeKind::RangeType { .. }
        | NodeKind::Ratio { .. }
        | NodeKind::Default { .. } => {}
    }

    for child in &node.children {
        walk(child, listener)?;
    }

    if let NodeKind::Project { name } = &node.kind {
        listener.exit_project(node, name)?;
    }
    Ok(())
}
