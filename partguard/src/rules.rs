use crate::model::Part;
use crate::selection::SelectedParts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Case form factor that gets the GPU length limit.
pub const COMPACT_FORM_FACTOR: &str = "mATX";
/// Longest GPU (exclusive) that fits a compact case.
pub const MAX_COMPACT_GPU_LENGTH_MM: i32 = 280;
/// Safety margin applied to the summed CPU and GPU TDP.
pub const PSU_HEADROOM: f64 = 1.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
}

/// A pairwise cross-check over the selected parts.
///
/// `check` returns the failure message, or `None` when the rule passes or
/// does not apply.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn severity(&self) -> Severity;
    fn check(&self, selected: &SelectedParts<'_>) -> Option<String>;
}

pub struct RulesEngine {
    rules: Vec<Arc<dyn Rule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Socket, RAM generation, GPU clearance, power budget, in that order.
    pub fn with_default_rules() -> Self {
        let mut engine = Self::new();
        for rule in default_rules() {
            engine.add_rule(rule);
        }
        engine
    }

    pub fn add_rule(&mut self, rule: Arc<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Run every rule against the first-wins selection. One issue per failed rule.
    pub fn evaluate(&self, selection: &[Part]) -> Vec<Issue> {
        let selected = SelectedParts::from_selection(selection);
        tracing::debug!(
            "Evaluating {} rules over {} parts ({} categories selected)",
            self.rules.len(),
            selection.len(),
            selected.count()
        );

        let mut issues = Vec::new();
        for rule in &self.rules {
            match rule.check(&selected) {
                Some(message) => {
                    tracing::debug!("Rule {} failed: {}", rule.id(), message);
                    issues.push(Issue {
                        rule_id: rule.id().to_string(),
                        severity: rule.severity(),
                        message,
                    });
                }
                None => tracing::debug!("Rule {} passed or skipped", rule.id()),
            }
        }
        issues
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}

pub fn default_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(SocketMatchRule),
        Arc::new(RamGenerationRule),
        Arc::new(GpuClearanceRule),
        Arc::new(PowerBudgetRule),
    ]
}

// Helper functions

/// Shared missing-vs-mismatch comparison for string tokens.
fn compare_tokens(
    left: Option<&str>,
    right: Option<&str>,
    missing: &str,
    mismatch: &str,
) -> Option<String> {
    match (left, right) {
        (Some(a), Some(b)) if a == b => None,
        (Some(_), Some(_)) => Some(mismatch.to_string()),
        _ => Some(missing.to_string()),
    }
}

/// Summed TDP of CPU and GPU (absent counts as 0) with headroom, truncated.
pub fn required_wattage(cpu: Option<&Part>, gpu: Option<&Part>) -> i64 {
    let total = cpu.and_then(Part::tdp).map(i64::from).unwrap_or(0)
        + gpu.and_then(Part::tdp).map(i64::from).unwrap_or(0);
    (total as f64 * PSU_HEADROOM) as i64
}

// Rule implementations

pub struct SocketMatchRule;

impl Rule for SocketMatchRule {
    fn id(&self) -> &str {
        "socket_match"
    }

    fn name(&self) -> &str {
        "CPU socket match"
    }

    fn description(&self) -> &str {
        "CPU and motherboard must declare the same socket"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, selected: &SelectedParts<'_>) -> Option<String> {
        let (cpu, board) = (selected.cpu?, selected.motherboard?);
        compare_tokens(
            cpu.socket(),
            board.socket(),
            "Missing socket info on CPU or motherboard.",
            "CPU socket mismatch.",
        )
    }
}

pub struct RamGenerationRule;

impl Rule for RamGenerationRule {
    fn id(&self) -> &str {
        "ram_generation"
    }

    fn name(&self) -> &str {
        "RAM generation match"
    }

    fn description(&self) -> &str {
        "RAM and motherboard must use the same memory generation"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, selected: &SelectedParts<'_>) -> Option<String> {
        let (ram, board) = (selected.ram?, selected.motherboard?);
        compare_tokens(
            ram.ram_type(),
            board.ram_type(),
            "Missing RAM type info.",
            "RAM generation mismatch.",
        )
    }
}

/// Skipped silently when either attribute is absent.
pub struct GpuClearanceRule;

impl Rule for GpuClearanceRule {
    fn id(&self) -> &str {
        "gpu_clearance"
    }

    fn name(&self) -> &str {
        "GPU clearance"
    }

    fn description(&self) -> &str {
        "GPUs longer than 280mm may not fit an mATX case"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, selected: &SelectedParts<'_>) -> Option<String> {
        let (gpu, case) = (selected.gpu?, selected.case?);
        let length = gpu.length_mm()?;
        let form_factor = case.form_factor()?;
        if form_factor == COMPACT_FORM_FACTOR && length > MAX_COMPACT_GPU_LENGTH_MM {
            Some(format!(
                "GPU may be too long for this {} case.",
                COMPACT_FORM_FACTOR
            ))
        } else {
            None
        }
    }
}

/// Skipped silently when the PSU has no wattage.
pub struct PowerBudgetRule;

impl Rule for PowerBudgetRule {
    fn id(&self) -> &str {
        "power_budget"
    }

    fn name(&self) -> &str {
        "Power budget"
    }

    fn description(&self) -> &str {
        "PSU wattage must cover 1.3x the combined CPU and GPU TDP"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, selected: &SelectedParts<'_>) -> Option<String> {
        let wattage = selected.psu?.psu_wattage()?;
        let required = required_wattage(selected.cpu, selected.gpu);
        if i64::from(wattage) < required {
            Some("PSU wattage may be insufficient.".to_string())
        } else {
            None
        }
    }
}
