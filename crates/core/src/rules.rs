//! Rule construction: reference resolution against the symbol tables,
//! the shared base record, and per-type fields.

use crate::ast::{Node, NodeKind, NodeTag, RuleType};
use crate::error::BuildError;
use crate::scan::{first, scan};
use crate::symbols::SymbolTables;
use govdsl_model::{Participant, RangeType, Rule, RuleKind};
use std::collections::BTreeSet;
use std::rc::Rc;

/// Build the rule defined by `node`.
///
/// Resolution happens in a fixed order so the reported error is the first
/// problem in the rule: deadline, then participants in document order,
/// then the type-specific fields. Only rules already in `tables` can serve
/// as a leader-driven default. The caller is responsible for inserting the
/// result into the rule table.
pub fn build_rule(
    node: &Node,
    name: &str,
    rule_type: &RuleType,
    tables: &SymbolTables,
) -> Result<Rule, BuildError> {
    let content = first(node, NodeTag::RuleContent).ok_or_else(|| missing(name, "content"))?;

    let deadline_name =
        ident_of(content, NodeTag::DeadlineRef).ok_or_else(|| missing(name, "deadline"))?;
    let deadline = tables
        .deadline(deadline_name)
        .cloned()
        .ok_or_else(|| BuildError::UndefinedDeadline(deadline_name.to_string()))?;

    let people = resolve_people(content, tables)?;

    let applied_to =
        ident_of(content, NodeTag::AppliedTo).ok_or_else(|| missing(name, "appliedTo"))?;

    let kind = match rule_type {
        RuleType::Majority => RuleKind::Majority {
            min_votes: min_votes(content, name)?,
            range_type: range_type(content, name)?,
        },
        RuleType::Ratio => RuleKind::RatioMajority {
            min_votes: min_votes(content, name)?,
            range_type: range_type(content, name)?,
            ratio: ratio(content, name)?,
        },
        RuleType::LeaderDriven => {
            let default_name =
                ident_of(content, NodeTag::Default).ok_or_else(|| missing(name, "default"))?;
            let default = tables
                .rule(default_name)
                .cloned()
                .ok_or_else(|| BuildError::UndefinedRule(default_name.to_string()))?;
            RuleKind::LeaderDriven { default }
        }
        RuleType::Other(tag) => return Err(BuildError::UnsupportedRuleType(tag.clone())),
    };

    Ok(Rule {
        name: name.to_string(),
        applied_to: applied_to.to_string(),
        stage: None,
        query_filter: None,
        deadline,
        people,
        kind,
    })
}

fn resolve_people(
    content: &Node,
    tables: &SymbolTables,
) -> Result<BTreeSet<Rc<Participant>>, BuildError> {
    let mut people = BTreeSet::new();
    for p in scan(content, NodeTag::ParticipantId) {
        let pname = p.kind.ident().unwrap_or_default();
        let participant = tables
            .participant(pname)
            .ok_or_else(|| BuildError::UndefinedParticipant(pname.to_string()))?;
        people.insert(Rc::clone(participant));
    }
    Ok(people)
}

fn min_votes(content: &Node, rule: &str) -> Result<u32, BuildError> {
    match first(content, NodeTag::MinVotes).map(|n| &n.kind) {
        Some(NodeKind::MinVotes { value }) => {
            u32::try_from(*value).map_err(|_| BuildError::InvalidVotes(*value))
        }
        _ => Err(missing(rule, "minVotes")),
    }
}

fn range_type(content: &Node, rule: &str) -> Result<RangeType, BuildError> {
    ident_of(content, NodeTag::RangeType)
        .map(RangeType::from_source)
        .ok_or_else(|| missing(rule, "rangeType"))
}

fn ratio(content: &Node, rule: &str) -> Result<f64, BuildError> {
    match first(content, NodeTag::Ratio).map(|n| &n.kind) {
        Some(NodeKind::Ratio { value }) => Ok(*value),
        _ => Err(missing(rule, "ratio")),
    }
}

fn ident_of(content: &Node, tag: NodeTag) -> Option<&str> {
    first(content, tag).and_then(|n| n.kind.ident())
}

fn missing(rule: &str, field: &'static str) -> BuildError {
    BuildError::MissingField {
        rule: rule.to_string(),
        field,
    }
}
