//! Diagnostic logging for the CLI.
//!
//! Events go to stderr so generated output on stdout (completions, reports)
//! stays clean. `--verbose` wins over `--quiet`; without either flag the
//! filter comes from `RUST_LOG`, falling back to info for pti's crates.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: &[&str] = &["pti", "pti_codegen", "pti_config", "pti_core", "pti_manifest"];

fn directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Filter for the given verbosity flags.
pub fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(directives("debug"))
    } else if quiet {
        EnvFilter::new(directives("error"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives("info")))
    }
}

/// Install the global subscriber. Call once, before any event is emitted.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directives_cover_every_crate() {
        assert_eq!(
            directives("debug"),
            "pti=debug,pti_codegen=debug,pti_config=debug,pti_core=debug,pti_manifest=debug"
        );
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        assert!(filter(true, true).to_string().contains("pti=debug"));
        assert!(filter(false, true).to_string().contains("pti=error"));
    }
}
