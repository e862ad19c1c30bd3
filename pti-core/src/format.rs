//! Optional code formatter collaborator.
//!
//! Generated files are passed through prettier when it can be found. The
//! formatter is strictly best-effort: any failure yields the input text.

use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use tokio::{io::AsyncWriteExt, process::Command};

use crate::{Error, Result};

/// Source syntax, mapped onto a prettier parser name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    TypeScript,
    JavaScript,
}

impl Syntax {
    pub fn parser(self) -> &'static str {
        match self {
            Syntax::Json => "json",
            Syntax::TypeScript => "typescript",
            Syntax::JavaScript => "babel",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Formatter {
    /// Write content exactly as rendered
    #[default]
    Disabled,
    /// Pipe content through a prettier executable
    Prettier { program: PathBuf },
}

impl Formatter {
    pub fn prettier(program: impl Into<PathBuf>) -> Self {
        Formatter::Prettier {
            program: program.into(),
        }
    }

    /// Locate prettier for the project at `root`.
    ///
    /// Prefers the project-local install, then whatever is on `PATH`.
    pub fn detect(root: &Path) -> Self {
        let local = root.join("node_modules").join(".bin").join("prettier");
        if local.is_file() {
            return Self::prettier(local);
        }
        match which::which("prettier") {
            Ok(program) => Self::prettier(program),
            Err(_) => Formatter::Disabled,
        }
    }

    /// Format `source`, returning it unchanged if the formatter is disabled
    /// or fails for any reason.
    pub async fn format(&self, source: String, syntax: Syntax) -> String {
        let Formatter::Prettier { program } = self else {
            return source;
        };

        match run_prettier(program, &source, syntax).await {
            Ok(formatted) => formatted,
            Err(error) => {
                tracing::debug!(%error, "formatter unavailable, writing unformatted output");
                source
            }
        }
    }
}

async fn run_prettier(program: &Path, source: &str, syntax: Syntax) -> Result<String> {
    let display = program.display().to_string();
    let mut child = Command::new(program)
        .arg("--parser")
        .arg(syntax.parser())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| Error::Spawn {
            program: display.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(source.as_bytes())
            .await
            .map_err(|e| Error::io(program, e))?;
    }

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| Error::io(program, e))?;

    if !output.status.success() {
        return Err(Error::Process {
            command: format!("{} --parser {}", display, syntax.parser()),
            status: output.status,
        });
    }

    String::from_utf8(output.stdout)
        .map_err(|_| Error::invalid_argument(format!("{} produced non-UTF-8 output", display)))
}
