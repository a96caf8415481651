//! Repository status report
//!
//! Runs three git queries in a fixed order and renders each one as a titled
//! section. A failing query is rendered as an `Error:` line and the report
//! moves on to the next section.

use crate::git::{GitRunner, Invocation};
use std::io::{self, Write};

/// One section of the report, tied to the git query that feeds it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Status,
    Branch,
    ModifiedFiles,
}

impl Section {
    /// Every section, in the order it is reported
    pub const ALL: [Section; 3] = [Section::Status, Section::Branch, Section::ModifiedFiles];

    pub fn title(self) -> &'static str {
        match self {
            Section::Status => "Git Status",
            Section::Branch => "Current Branch",
            Section::ModifiedFiles => "Modified Files",
        }
    }

    /// Arguments passed to git for this section's query
    pub fn args(self) -> &'static [&'static str] {
        match self {
            Section::Status => &["status", "--porcelain"],
            Section::Branch => &["branch", "--show-current"],
            Section::ModifiedFiles => &["diff", "--name-only"],
        }
    }

    /// Render the body of this section (everything below the header)
    pub fn render(self, invocation: &Invocation) -> String {
        let output = match invocation {
            Invocation::Completed(output) if output.success() => output,
            failed => {
                return format!("Error: {}\n", failed.error_text().unwrap_or_default());
            }
        };

        match self {
            Section::Status => render_status(&output.stdout),
            Section::Branch => format!("Current branch: {}\n", output.stdout.trim()),
            Section::ModifiedFiles => render_modified_files(&output.stdout),
        }
    }
}

/// Porcelain output is printed as-is, trailing newline included
fn render_status(stdout: &str) -> String {
    if stdout.trim().is_empty() {
        return "No changes detected\n".to_string();
    }

    format!("Modified files:\n{}\n", stdout)
}

fn render_modified_files(stdout: &str) -> String {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return "No modified files\n".to_string();
    }

    let mut rendered = String::from("Modified files:\n");
    for path in trimmed.split('\n') {
        rendered.push_str("  - ");
        rendered.push_str(path);
        rendered.push('\n');
    }
    rendered
}

/// Runs every section against a git runner and writes the report
#[derive(Debug)]
pub struct Reporter<R> {
    runner: R,
}

impl<R: GitRunner> Reporter<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Write the full report. Only write errors are returned; git failures
    /// become part of the report text.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (index, section) in Section::ALL.into_iter().enumerate() {
            out.write_all(self.section_text(index, section).as_bytes())?;
        }

        out.flush()
    }

    /// Render the full report into a string
    pub fn render(&self) -> String {
        Section::ALL
            .into_iter()
            .enumerate()
            .map(|(index, section)| self.section_text(index, section))
            .collect()
    }

    /// Header plus body for one section; every header after the first is
    /// preceded by a blank line
    fn section_text(&self, index: usize, section: Section) -> String {
        let separator = if index > 0 { "\n" } else { "" };
        let invocation = self.runner.run(section.args());

        format!(
            "{}=== {} ===\n{}",
            separator,
            section.title(),
            section.render(&invocation)
        )
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}
