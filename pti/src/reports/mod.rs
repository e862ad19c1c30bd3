//! Report data structures for commands.
//!
//! Operations build reports, then commands render them to an Output target.

mod fix_types;
mod generate;
mod output;

pub use fix_types::FixTypesReport;
pub use generate::{GenerateReport, InitReport};
pub use output::{Report, TerminalOutput};
