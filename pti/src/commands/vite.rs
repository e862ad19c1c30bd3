use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ViteCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ViteCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::vite(ws, &project).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
