//! Compatibility API shared by the CLI shell and one-shot commands.
//! Pure: no I/O, no shared state.

use crate::model::Part;
use crate::rules::{default_rules, Issue, RulesEngine};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Basic compatibility checks passed.";

#[derive(Debug, thiserror::Error)]
pub enum PartGuardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Duplicate part id {0} in catalog")]
    DuplicateId(u32),
    #[error("No part with id {0} in catalog")]
    UnknownPart(u32),
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

/// Options for a compatibility run.
#[derive(Clone, Debug, Default)]
pub struct CheckOptions {
    /// Rule ids to run; empty runs every default rule.
    pub rules: Vec<String>,
}

/// Verdict plus one message per failed rule, or the single success message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub ok: bool,
    pub messages: Vec<String>,
}

impl CompatibilityResult {
    pub fn from_issues(issues: &[Issue]) -> Self {
        if issues.is_empty() {
            return Self {
                ok: true,
                messages: vec![SUCCESS_MESSAGE.to_string()],
            };
        }
        Self {
            ok: false,
            messages: issues.iter().map(|i| i.message.clone()).collect(),
        }
    }
}

impl RulesEngine {
    /// Default rules filtered by `options.rules`, keeping the default order.
    pub fn with_options(options: &CheckOptions) -> Result<Self, PartGuardError> {
        let available = default_rules();
        if let Some(unknown) = options
            .rules
            .iter()
            .find(|id| !available.iter().any(|r| r.id() == id.as_str()))
        {
            return Err(PartGuardError::UnknownRule(unknown.clone()));
        }

        let mut engine = Self::new();
        for rule in available {
            if options.rules.is_empty() || options.rules.iter().any(|id| id == rule.id()) {
                engine.add_rule(rule);
            }
        }
        Ok(engine)
    }

    pub fn check(&self, selection: &[Part]) -> CompatibilityResult {
        CompatibilityResult::from_issues(&self.evaluate(selection))
    }
}

/// Check a selection against the default rules.
pub fn check_compatibility(selection: &[Part]) -> CompatibilityResult {
    RulesEngine::with_default_rules().check(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn test_empty_selection_passes() {
        let result = check_compatibility(&[]);
        assert!(result.ok);
        assert_eq!(result.messages, vec![SUCCESS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_with_options_filters_rules() {
        let options = CheckOptions {
            rules: vec!["power_budget".to_string(), "socket_match".to_string()],
        };
        let engine = RulesEngine::with_options(&options).unwrap();
        let ids: Vec<&str> = engine.rules().iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["socket_match", "power_budget"]);
    }

    #[test]
    fn test_with_options_rejects_unknown_rule() {
        let options = CheckOptions {
            rules: vec!["airflow".to_string()],
        };
        let err = RulesEngine::with_options(&options).err().unwrap();
        assert!(matches!(err, PartGuardError::UnknownRule(ref id) if id == "airflow"));
    }

    #[test]
    fn test_filtered_engine_skips_other_rules() {
        let parts = vec![
            Part::new(1, Category::Cpu, "CPU", 1.0, 1).with_socket("AM4"),
            Part::new(2, Category::Motherboard, "Board", 1.0, 1).with_socket("LGA1700"),
        ];
        let options = CheckOptions {
            rules: vec!["ram_generation".to_string()],
        };
        let result = RulesEngine::with_options(&options).unwrap().check(&parts);
        assert!(result.ok);
    }
}
