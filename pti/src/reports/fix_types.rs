use super::output::{Output, Report};

/// Declaration files renamed by `fix-types`.
#[derive(Debug)]
pub struct FixTypesReport {
    pub format: &'static str,
    /// (from, to), relative to the repository root
    pub renamed: Vec<(String, String)>,
}

impl Report for FixTypesReport {
    fn render(&self, out: &mut dyn Output) {
        if self.renamed.is_empty() {
            out.preformatted(&format!("No {} declaration files found.", self.format));
            return;
        }

        out.section(&format!("Renamed {} declarations", self.format));
        for (from, to) in &self.renamed {
            out.list_item(&format!("{from} -> {to}"));
        }
    }
}
