//! Model-output form and checklist review shared by the audit flow and the
//! model-output checker.

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use super::{blank, items};
use crate::api::dto::{BotExecuteRequest, InputMode, OutputMetrics, OutputSubmission};
use crate::api::ClientResult;

/// A model output to evaluate against a policy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputForm {
    pub model_name: String,
    pub domain: String,
    pub policy: String,
    pub mode: InputMode,
    pub output_text: String,
    pub output_data: OutputMetrics,
}

impl Default for OutputForm {
    fn default() -> Self {
        Self {
            model_name: String::new(),
            domain: "finance".to_string(),
            policy: "EU AI Act".to_string(),
            mode: InputMode::Text,
            output_text: String::new(),
            output_data: OutputMetrics::default(),
        }
    }
}

impl OutputForm {
    /// Request body; sends text or metrics depending on the mode.
    pub fn submission(&self) -> Result<OutputSubmission, String> {
        if blank(&self.model_name) {
            return Err("Model name is required".to_string());
        }
        let (output_text, output_data) = match self.mode {
            InputMode::Text => (Some(self.output_text.clone()), None),
            InputMode::Structured => (None, Some(self.output_data.clone())),
        };
        Ok(OutputSubmission {
            model_name: self.model_name.clone(),
            domain: self.domain.clone(),
            policy: self.policy.clone(),
            output_text,
            output_data,
        })
    }
}

/// Demo payload for either input mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DemoOutput {
    Text(&'static str),
    Metrics(OutputMetrics),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoScenario {
    pub label: &'static str,
    pub description: &'static str,
    pub model_name: &'static str,
    pub domain: &'static str,
    pub policy: &'static str,
    pub output: DemoOutput,
}

impl DemoScenario {
    pub fn to_form(&self) -> OutputForm {
        let (mode, output_text, output_data) = match &self.output {
            DemoOutput::Text(text) => (InputMode::Text, text.to_string(), OutputMetrics::default()),
            DemoOutput::Metrics(metrics) => (InputMode::Structured, String::new(), metrics.clone()),
        };
        OutputForm {
            model_name: self.model_name.to_string(),
            domain: self.domain.to_string(),
            policy: self.policy.to_string(),
            mode,
            output_text,
            output_data,
        }
    }
}

/// Progress of a remediation bot launched from a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BotRun {
    Running,
    Done,
    Failed,
}

/// Bias findings retrain the model; everything else goes to remediation.
pub fn bot_type_for(check: &str) -> &'static str {
    if check.to_lowercase().contains("bias") {
        "retrain_bot"
    } else {
        "remediation_bot"
    }
}

pub fn finding_id(source_id: &str, index: usize) -> String {
    format!("FIND-{}-{}", source_id, index)
}

/// Per-item review state for one checklist result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChecklistReview {
    pub resolved: BTreeSet<usize>,
    pub bots: BTreeMap<usize, BotRun>,
}

impl ChecklistReview {
    pub fn toggle_resolved(&mut self, index: usize) {
        if !self.resolved.remove(&index) {
            self.resolved.insert(index);
        }
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.resolved.contains(&index)
    }

    pub fn bot(&self, index: usize) -> Option<BotRun> {
        self.bots.get(&index).copied()
    }

    /// Start a bot for checklist item `index` of the result identified by `source_id`.
    pub fn begin_bot(&mut self, index: usize, item: &Value, source_id: &str) -> BotExecuteRequest {
        self.bots.insert(index, BotRun::Running);
        let check = item.get("check").and_then(Value::as_str).unwrap_or_default();
        BotExecuteRequest {
            bot_type: bot_type_for(check).to_string(),
            finding_id: finding_id(source_id, index),
        }
    }

    pub fn finish_bot(&mut self, index: usize, result: &ClientResult<Value>) {
        let state = if result.is_ok() {
            BotRun::Done
        } else {
            BotRun::Failed
        };
        self.bots.insert(index, state);
    }
}

/// Checklist items of a pipeline or upload result
pub fn checklist_items(result: &Value) -> Vec<Value> {
    items(result, "checklist")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ClientError;
    use serde_json::json;

    #[test]
    fn test_submission_by_mode() {
        let mut form = OutputForm {
            model_name: "CreditScorer-v2".to_string(),
            output_text: "Loan denied.".to_string(),
            ..Default::default()
        };
        let text = form.submission().unwrap();
        assert_eq!(text.output_text.as_deref(), Some("Loan denied."));
        assert!(text.output_data.is_none());

        form.mode = InputMode::Structured;
        let structured = form.submission().unwrap();
        assert!(structured.output_text.is_none());
        assert_eq!(structured.output_data.unwrap().bias_score, 0.18);

        form.model_name = " ".to_string();
        assert_eq!(form.submission().unwrap_err(), "Model name is required");
    }

    #[test]
    fn test_bot_choice_and_finding_id() {
        assert_eq!(bot_type_for("Bias Score Threshold"), "retrain_bot");
        assert_eq!(bot_type_for("Human Oversight"), "remediation_bot");
        assert_eq!(finding_id("RUN-42", 3), "FIND-RUN-42-3");
    }

    #[test]
    fn test_review_tracks_items() {
        let mut review = ChecklistReview::default();
        review.toggle_resolved(1);
        assert!(review.is_resolved(1));
        review.toggle_resolved(1);
        assert!(!review.is_resolved(1));

        let request = review.begin_bot(2, &json!({"check": "Bias audit"}), "RUN-1");
        assert_eq!(request.bot_type, "retrain_bot");
        assert_eq!(request.finding_id, "FIND-RUN-1-2");
        assert_eq!(review.bot(2), Some(BotRun::Running));

        review.finish_bot(2, &Err(ClientError::Network("down".to_string())));
        assert_eq!(review.bot(2), Some(BotRun::Failed));
        review.finish_bot(2, &Ok(json!({})));
        assert_eq!(review.bot(2), Some(BotRun::Done));
    }
}
