use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FixTypesCommand {
    /// Module format whose declarations to fix (cjs or es)
    #[arg(short = 't', long = "type")]
    pub kind: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

impl FixTypesCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::fix_types(ws, &project, &self.kind).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
