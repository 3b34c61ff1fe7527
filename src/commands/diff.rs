use crate::areas::session::Session;
use crate::areas::workspace::{Document, STDIN_PATH};
use crate::artifacts::diff::cancel::{Cancel, Deadline, Never};
use crate::artifacts::diff::myers::{self, DiffOutcome};
use crate::artifacts::diff::sequence::{BytesPair, split_lines};
use crate::artifacts::unified::options::{ColorMode, UnifiedOptions};
use crate::artifacts::unified::writer::write_unified;
use anyhow::Context;
use derive_new::new;
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default number of unchanged lines shown around each change.
pub const DEFAULT_CONTEXT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Identical,
    Different,
}

/// One comparison of two files, as requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRequest {
    pub path_a: PathBuf,
    pub path_b: PathBuf,
    #[new(value = "DEFAULT_CONTEXT")]
    pub context: usize,
    #[new(default)]
    pub color: ColorMode,
    #[new(default)]
    pub labels: Option<(String, String)>,
    #[new(default)]
    pub timeout: Option<Duration>,
}

impl DiffRequest {
    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_labels(mut self, labels: Option<(String, String)>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Session {
    /// Prints the unified diff of the two requested files.
    ///
    /// Nothing is printed when the files are identical.
    pub fn diff(&self, request: &DiffRequest) -> anyhow::Result<DiffStatus> {
        let stdin = Path::new(STDIN_PATH);
        if request.path_a == stdin && request.path_b == stdin {
            anyhow::bail!("Standard input can only be compared against a file");
        }

        let a = self.workspace().load(&request.path_a)?;
        let b = self.workspace().load(&request.path_b)?;

        self.diff_documents(&a, &b, request)
    }

    pub fn diff_documents(
        &self,
        a: &Document,
        b: &Document,
        request: &DiffRequest,
    ) -> anyhow::Result<DiffStatus> {
        let (a_lines, b_lines) = (split_lines(a.data()), split_lines(b.data()));
        let pair = BytesPair::new(&a_lines, &b_lines);

        let cancel: Box<dyn Cancel> = match request.timeout {
            Some(timeout) => Box::new(Deadline::after(timeout)),
            None => Box::new(Never),
        };
        let script = match myers::diff(&pair, cancel.as_ref()) {
            DiffOutcome::Completed(script) => script,
            DiffOutcome::Cancelled => anyhow::bail!(
                "Diff of {} and {} cancelled after {:?}",
                a.name(),
                b.name(),
                request.timeout.unwrap_or_default()
            ),
        };

        let stat = script.stat();
        info!(
            "{} -> {}: {} insertions, {} deletions",
            a.name(),
            b.name(),
            stat.inserted,
            stat.deleted
        );
        if script.is_identity() {
            return Ok(DiffStatus::Identical);
        }

        let (name_a, name_b) = match &request.labels {
            Some((name_a, name_b)) => (name_a.clone(), name_b.clone()),
            None => (a.name().to_string(), b.name().to_string()),
        };
        let options = UnifiedOptions::default()
            .try_names(name_a, name_b)?
            .color(request.color);

        let mut writer = self.writer();
        write_unified(
            &script.with_context(request.context),
            &mut *writer,
            &pair,
            &options,
        )
        .context("Failed to write diff output")?;
        writer.flush().context("Failed to flush diff output")?;

        Ok(DiffStatus::Different)
    }
}
