//! Commands that only write literal template files.

use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops::{self, Workspace},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GitCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl GitCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::git(ws, &project).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[derive(Args)]
pub struct PrettierCommand {}

impl PrettierCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let report = ops::prettier(ws).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[derive(Args)]
pub struct YarnCommand {}

impl YarnCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let report = ops::yarn(ws).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

#[derive(Args)]
pub struct ReleaseItCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl ReleaseItCommand {
    pub async fn run(&self, ws: &Workspace) -> Result<()> {
        let project = self.project.resolve(&ws.settings)?;
        let report = ops::release_it(ws, &project).await?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
