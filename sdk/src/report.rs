use std::path::{Path, PathBuf};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InputStatus {
    Written {
        struct_name: String,
        output:      PathBuf,
        rejected:    Vec<String>,
    },
    /// Would have been written.
    DryRun {
        struct_name: String,
        output:      PathBuf,
        rejected:    Vec<String>,
    },
    Skipped {
        reason: String,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputOutcome {
    pub path:   PathBuf,
    #[serde(flatten)]
    pub status: InputStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<InputOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, path: &Path, status: InputStatus) {
        self.outcomes.push(InputOutcome {
            path: path.to_path_buf(),
            status,
        });
    }

    /// Written plus dry-run outcomes.
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, InputStatus::Written { .. } | InputStatus::DryRun { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, InputStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, InputStatus::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn get(&self, path: &Path) -> Option<&InputStatus> {
        self.outcomes.iter().find(|o| o.path == path).map(|o| &o.status)
    }

    fn count(&self, test: impl Fn(&InputStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| test(&o.status)).count()
    }
}
