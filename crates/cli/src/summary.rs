//! Human and machine readable summaries of a built policy.

use govdsl_core::BuildOutcome;
use govdsl_model::{Rule, RuleKind};
use serde_json::{json, Value};

use crate::OutputFormat;

pub(crate) fn print(outcome: &BuildOutcome, output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&to_json(outcome))
                .unwrap_or_else(|e| format!("{{\"error\": \"serialization: {}\"}}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => print_text(outcome),
    }
}

fn print_text(outcome: &BuildOutcome) {
    let project = &outcome.policy.project;
    println!("Policy for project '{}'", project.name);
    println!();
    println!("  Activities: {}", project.activities.len());
    for a in &project.activities {
        println!("    {} ({} tasks)", a.name, a.tasks.len());
    }
    println!("  Participants: {}", outcome.participants);
    println!("  Deadlines: {}", outcome.deadlines);
    println!("  Rules: {}", outcome.policy.rules.len());
    for rule in outcome.policy.rules.values() {
        println!("    {}", describe(rule));
    }
    if !outcome.warnings.is_empty() {
        println!();
        println!("  Warnings:");
        for w in &outcome.warnings {
            println!("    {}", w);
        }
    }
}

fn describe(rule: &Rule) -> String {
    let detail = match &rule.kind {
        RuleKind::Majority {
            min_votes,
            range_type,
        } => format!("min votes {}, range {}", min_votes, range_type),
        RuleKind::RatioMajority {
            min_votes,
            range_type,
            ratio,
        } => format!(
            "min votes {}, range {}, ratio {}",
            min_votes, range_type, ratio
        ),
        RuleKind::LeaderDriven { default } => format!("default {}", default.name),
    };
    format!(
        "{} [{}] on {}, deadline {} ({} days), {} participant(s), {}",
        rule.name,
        rule.kind_name(),
        rule.applied_to,
        rule.deadline.name,
        rule.deadline.duration.whole_days(),
        rule.people.len(),
        detail
    )
}

fn to_json(outcome: &BuildOutcome) -> Value {
    let project = &outcome.policy.project;
    let activities: Vec<Value> = project
        .activities
        .iter()
        .map(|a| json!({ "name": a.name, "tasks": a.tasks.len() }))
        .collect();
    let rules: Vec<Value> = outcome
        .policy
        .rules
        .values()
        .map(|r| {
            json!({
                "name":         r.name,
                "kind":         r.kind_name(),
                "applied_to":   r.applied_to,
                "deadline":     r.deadline.name,
                "participants": r.people.iter().map(|p| p.name()).collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "project":      project.name,
        "activities":   activities,
        "participants": outcome.participants,
        "deadlines":    outcome.deadlines,
        "rules":        rules,
        "warnings":     outcome.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    })
}
