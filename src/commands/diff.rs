use crate::areas::session::Session;
use crate::artifacts::diff::change_set::{ChangeSet, Line};
use crate::artifacts::diff::source::{ListSource, Source, SourcePair};
use crate::artifacts::diff::unified::{Edit, Hunk, UnifiedDiff};
use colored::Colorize;
use derive_new::new;
use std::path::Path;

/// How the differences are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Hunks with context, as `diff -u` prints them
    #[default]
    Unified,
    /// Every line of both files, changed lines marked
    Full,
    /// Every line of both files with line numbers of each side
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub context: isize,
    pub layout: Layout,
    pub org_label: Option<String>,
    pub rev_label: Option<String>,
}

impl Session {
    pub fn diff(&self, org: &Path, rev: &Path, options: &DiffOptions) -> anyhow::Result<()> {
        let org_name = Self::label(org, options.org_label.as_deref());
        let rev_name = Self::label(rev, options.rev_label.as_deref());

        let source = SourcePair::new(
            self.workspace().read_source(org, &org_name)?,
            self.workspace().read_source(rev, &rev_name)?,
        );
        let change_set = ChangeSet::run(source);

        match options.layout {
            Layout::Unified => self.print_unified(&change_set, options.context),
            Layout::Full => self.print_full(&change_set),
            Layout::Numbered => self.print_numbered(&change_set),
        }
    }

    fn label(path: &Path, label: Option<&str>) -> String {
        label.map_or_else(|| path.display().to_string(), str::to_owned)
    }

    fn print_unified(
        &self,
        change_set: &ChangeSet<ListSource<String>>,
        context: isize,
    ) -> anyhow::Result<()> {
        let hunks = UnifiedDiff::new(change_set, context)?.hunks();
        if hunks.is_empty() {
            return Ok(());
        }

        let source = change_set.source();
        writeln!(self.writer(), "{}", format!("--- {}", source.org().name()).bold())?;
        writeln!(self.writer(), "{}", format!("+++ {}", source.rev().name()).bold())?;

        for hunk in &hunks {
            self.print_diff_hunk(hunk)?;
        }

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk<'_, String>) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", hunk.header().cyan())?;

        for edit in hunk.edits() {
            let line = edit.to_string();
            match edit {
                Edit::Delete { .. } => writeln!(self.writer(), "{}", line.red())?,
                Edit::Insert { .. } => writeln!(self.writer(), "{}", line.green())?,
                Edit::Equal { .. } => writeln!(self.writer(), "{}", line)?,
            }
        }

        Ok(())
    }

    fn print_full(&self, change_set: &ChangeSet<ListSource<String>>) -> anyhow::Result<()> {
        let texts = change_set.unify_texts();
        self.print_listing(change_set, &texts)
    }

    fn print_numbered(&self, change_set: &ChangeSet<ListSource<String>>) -> anyhow::Result<()> {
        let texts = change_set.unify_texts_with_numbers();
        self.print_listing(change_set, &texts)
    }

    /// Prints `texts`, one per aligned line of `change_set`, colored by side
    fn print_listing<S: Source>(
        &self,
        change_set: &ChangeSet<S>,
        texts: &[String],
    ) -> anyhow::Result<()> {
        for (line, text) in change_set.lines().zip(texts) {
            match line {
                Line::Org { .. } => writeln!(self.writer(), "{}", text.red())?,
                Line::Rev { .. } => writeln!(self.writer(), "{}", text.green())?,
                Line::Both { .. } => writeln!(self.writer(), "{}", text)?,
            }
        }

        Ok(())
    }
}
