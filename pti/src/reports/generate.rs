//! Reports for commands that write files.

use pti_core::WriteResult;

use super::output::{Output, Report};

/// One file touched by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntry {
    /// Path relative to the repository root
    pub path: String,
    pub result: WriteResult,
}

/// Files written by one generator step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub step: &'static str,
    pub files: Vec<GeneratedEntry>,
    /// External commands run after writing, e.g. `yarn install`
    pub commands: Vec<String>,
}

impl GenerateReport {
    pub fn new(step: &'static str) -> Self {
        Self {
            step,
            files: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, path: impl Into<String>, result: WriteResult) {
        self.files.push(GeneratedEntry {
            path: path.into(),
            result,
        });
    }

    pub fn written(&self) -> usize {
        self.files
            .iter()
            .filter(|entry| entry.result == WriteResult::Written)
            .count()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(self.step);
        for entry in &self.files {
            match entry.result {
                WriteResult::Written => out.added_item(&entry.path),
                WriteResult::Skipped => out.list_item(&format!("{} (kept existing)", entry.path)),
            }
        }
        for command in &self.commands {
            out.key_value("ran", command);
        }
    }
}

/// Every step run by `init`, in order.
#[derive(Debug, Default)]
pub struct InitReport {
    pub steps: Vec<GenerateReport>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Project initialized");
        for step in &self.steps {
            step.render(out);
        }

        let written: usize = self.steps.iter().map(GenerateReport::written).sum();
        out.newline();
        out.preformatted(&format!("{written} files written."));
    }
}
