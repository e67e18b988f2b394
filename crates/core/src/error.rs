use std::fmt;

/// A fatal policy build error. The first one encountered aborts the pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A deadline amount below zero.
    #[error("invalid deadline amount {0}: amounts must be non-negative")]
    InvalidAmount(i64),

    /// Only fatal when the build options reject unknown units; otherwise this
    /// degrades to a [`BuildWarning::UnsupportedTimeUnit`].
    #[error("unsupported time unit '{0}'")]
    UnsupportedTimeUnit(String),

    #[error("undefined participant '{0}'")]
    UndefinedParticipant(String),

    #[error("undefined deadline '{0}'")]
    UndefinedDeadline(String),

    /// A leader-driven default that is not defined before the rule using it.
    #[error("undefined rule '{0}': a default rule must be defined before the rule that uses it")]
    UndefinedRule(String),

    #[error("unsupported rule type '{0}'")]
    UnsupportedRuleType(String),

    #[error("invalid minimum vote count {0}: must be a non-negative integer")]
    InvalidVotes(i64),

    /// A rule subtree lacks a field its rule type requires.
    #[error("rule '{rule}' is missing required field '{field}'")]
    MissingField { rule: String, field: &'static str },

    #[error("participant '{name}' is declared as {existing} and as {incoming}")]
    ParticipantCollision {
        name: String,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("syntax tree contains no project")]
    MissingProject,

    /// The syntax tree or build options could not be read or decoded.
    #[error("{0}")]
    Load(String),
}

impl BuildError {
    /// Stable variant name for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            BuildError::InvalidAmount(_) => "InvalidAmount",
            BuildError::UnsupportedTimeUnit(_) => "UnsupportedTimeUnit",
            BuildError::UndefinedParticipant(_) => "UndefinedParticipant",
            BuildError::UndefinedDeadline(_) => "UndefinedDeadline",
            BuildError::UndefinedRule(_) => "UndefinedRule",
            BuildError::UnsupportedRuleType(_) => "UnsupportedRuleType",
            BuildError::InvalidVotes(_) => "InvalidVotes",
            BuildError::MissingField { .. } => "MissingField",
            BuildError::ParticipantCollision { .. } => "ParticipantCollision",
            BuildError::MissingProject => "MissingProject",
            BuildError::Load(_) => "Load",
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind":    self.kind(),
            "message": self.to_string(),
        })
    }
}

/// A non-fatal condition recorded while building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// The deadline's amount was interpreted as days.
    UnsupportedTimeUnit { deadline: String, unit: String },
    /// A role and an individual shared a name and the later one replaced the
    /// earlier in the participant table.
    ParticipantOverwritten {
        name: String,
        previous: &'static str,
        current: &'static str,
    },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::UnsupportedTimeUnit { deadline, unit } => write!(
                f,
                "deadline '{}': unsupported time unit '{}', defaulting to days",
                deadline, unit
            ),
            BuildWarning::ParticipantOverwritten {
                name,
                previous,
                current,
            } => write!(
                f,
                "participant '{}': {} replaced by {} of the same name",
                name, previous, current
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_value_carries_kind_and_message() {
        let err = BuildError::UndefinedDeadline("sprintEnd".to_string());
        let v = err.to_json_value();
        assert_eq!(v["kind"], "UndefinedDeadline");
        assert_eq!(v["message"], "undefined deadline 'sprintEnd'");
    }

    #[test]
    fn warning_display_names_the_unit() {
        let w = BuildWarning::UnsupportedTimeUnit {
            deadline: "q".to_string(),
            unit: "fortnights".to_string(),
        };
        assert!(w.to_string().contains("fortnights"));
    }
}
