use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Don't run the package manager's install after updating package.json
    #[arg(long)]
    pub skip_install: bool,
}

impl InitCommand {
    /// Run every generator against the repository
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::init(ws, &project, self.skip_install).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
