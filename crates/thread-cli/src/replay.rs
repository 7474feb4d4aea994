//! Replaying action scripts through the store.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use thread_core::{Action, Forest, Outcome, ThreadStore, render_text};
use tracing::{debug, info, info_span, warn};

/// How the final forest is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented outline, one comment per line.
    #[default]
    Text,
    /// The forest as a pretty-printed JSON array.
    Json,
}

/// One applied or rejected script entry.
#[derive(Debug, Clone)]
pub struct Step {
    /// 1-based position in the script.
    pub index: usize,
    pub action: Action,
    pub outcome: Outcome,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub steps: Vec<Step>,
    pub forest: Forest,
    pub revision: u64,
}

impl ReplayReport {
    pub fn applied_count(&self) -> usize {
        self.steps.iter().filter(|s| s.outcome.is_applied()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.steps.len() - self.applied_count()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected_count() > 0
    }

    /// Steps that did not change the forest, in script order.
    pub fn rejections(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| !s.outcome.is_applied())
    }

    /// `(applied, rejected)` for one action kind.
    pub fn counts_for(&self, kind: &str) -> (usize, usize) {
        self.steps
            .iter()
            .filter(|s| s.action.kind() == kind)
            .fold((0, 0), |(applied, rejected), step| {
                if step.outcome.is_applied() {
                    (applied + 1, rejected)
                } else {
                    (applied, rejected + 1)
                }
            })
    }
}

/// Read a JSON array of actions.
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse script {}", path.display()))
}

/// Read a JSON forest and check that its ids are globally unique.
pub fn load_forest(path: &Path) -> Result<Forest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read forest {}", path.display()))?;
    let forest: Forest = serde_json::from_str(&raw)
        .with_context(|| format!("parse forest {}", path.display()))?;
    forest
        .validate()
        .with_context(|| format!("invalid forest {}", path.display()))?;
    Ok(forest)
}

/// Apply `actions` in order on top of `seed`.
pub fn replay(seed: Forest, actions: Vec<Action>) -> Result<ReplayReport> {
    let span = info_span!("replay", actions = actions.len());
    let _guard = span.enter();

    let mut store = ThreadStore::from_forest(seed).context("seed forest")?;
    let mut steps = Vec::with_capacity(actions.len());
    for (offset, action) in actions.into_iter().enumerate() {
        let index = offset + 1;
        let outcome = store.dispatch(action.clone());
        match outcome.rejection() {
            Some(reason) => warn!(step = index, op = action.kind(), %reason, "action rejected"),
            None => debug!(step = index, op = action.kind(), "action applied"),
        }
        steps.push(Step {
            index,
            action,
            outcome,
        });
    }

    let revision = store.revision();
    let report = ReplayReport {
        steps,
        forest: store.into_forest(),
        revision,
    };
    info!(
        applied = report.applied_count(),
        rejected = report.rejected_count(),
        comments = report.forest.total_count(),
        "replay finished"
    );
    Ok(report)
}

/// Render a forest for stdout.
pub fn render(forest: &Forest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(forest)),
        OutputFormat::Json => serde_json::to_string_pretty(forest).context("serialize forest"),
    }
}
