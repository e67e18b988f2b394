//! Per-pass symbol tables: activities, participants, deadlines and rules,
//! each keyed by identifier.
//!
//! Redefining an activity, deadline or rule replaces the earlier entry.
//! Participants follow the configured [`CollisionPolicy`] when a role and an
//! individual share a name.

use crate::config::CollisionPolicy;
use crate::error::{BuildError, BuildWarning};
use govdsl_model::{Activity, Deadline, Participant, Rule};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct SymbolTables {
    pub activities: HashMap<String, Activity>,
    pub participants: HashMap<String, Rc<Participant>>,
    /// Deadlines are the only kind of condition the language has.
    pub deadlines: HashMap<String, Rc<Deadline>>,
    pub rules: HashMap<String, Rc<Rule>>,
}

impl SymbolTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define_activity(&mut self, activity: Activity) {
        if let Some(prev) = self.activities.insert(activity.name.clone(), activity) {
            log::debug!("activity '{}' redefined", prev.name);
        }
    }

    /// Insert a role or individual.
    ///
    /// Returns a warning when a participant of the other kind was replaced
    /// under [`CollisionPolicy::LastWriteWins`].
    pub fn define_participant(
        &mut self,
        participant: Participant,
        policy: CollisionPolicy,
    ) -> Result<Option<BuildWarning>, BuildError> {
        let name = participant.name().to_string();
        let mut warning = None;
        if let Some(existing) = self.participants.get(&name) {
            if existing.kind() != participant.kind() {
                match policy {
                    CollisionPolicy::Reject => {
                        return Err(BuildError::ParticipantCollision {
                            name,
                            existing: existing.kind(),
                            incoming: participant.kind(),
                        });
                    }
                    CollisionPolicy::LastWriteWins => {
                        log::warn!(
                            "participant '{}': {} replaced by {}",
                            name,
                            existing.kind(),
                            participant.kind()
                        );
                        warning = Some(BuildWarning::ParticipantOverwritten {
                            name: name.clone(),
                            previous: existing.kind(),
                            current: participant.kind(),
                        });
                    }
                }
            }
        }
        self.participants.insert(name, Rc::new(participant));
        Ok(warning)
    }

    pub fn define_deadline(&mut self, deadline: Deadline) {
        if let Some(prev) = self
            .deadlines
            .insert(deadline.name.clone(), Rc::new(deadline))
        {
            log::debug!("deadline '{}' redefined", prev.name);
        }
    }

    /// Insert a built rule, making it visible as a default for later rules.
    pub fn define_rule(&mut self, rule: Rule) -> Rc<Rule> {
        let rule = Rc::new(rule);
        if self
            .rules
            .insert(rule.name.clone(), Rc::clone(&rule))
            .is_some()
        {
            log::debug!("rule '{}' redefined", rule.name);
        }
        rule
    }

    pub fn participant(&self, name: &str) -> Option<&Rc<Participant>> {
        self.participants.get(name)
    }

    pub fn deadline(&self, name: &str) -> Option<&Rc<Deadline>> {
        self.deadlines.get(name)
    }

    pub fn rule(&self, name: &str) -> Option<&Rc<Rule>> {
        self.rules.get(name)
    }
}
