use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PackageJsonCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Don't run the package manager's install afterwards
    #[arg(long)]
    pub skip_install: bool,
}

impl PackageJsonCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::package_json(ws, &project, self.skip_install).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
