//! Progress display for batch corpus runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Coordinates a batch bar over corpus files and a bar for the current corpus
///
/// The batch bar only appears when more than one corpus is processed.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    corpus_bar: Option<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static CORPUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} inscriptions"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Corpora: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            corpus_bar: None,
            file_count: 0,
        }
    }

    /// Prepare the batch bar for `file_count` corpora
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Number of corpora announced by [`Self::initialize`]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Start a bar for a corpus holding `inscriptions` records
    pub fn start_corpus(&mut self, path: &Path, inscriptions: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(inscriptions as u64);
        bar.set_style(CORPUS_STYLE.clone());
        bar.set_prefix(display_name);

        if let Some(previous) = self.corpus_bar.replace(self.multi_progress.add(bar)) {
            previous.finish_and_clear();
        }
    }

    /// Report that `count` more inscriptions were folded in
    pub fn advance(&self, count: usize) {
        if let Some(ref bar) = self.corpus_bar {
            bar.inc(count as u64);
        }
    }

    /// Mark the current corpus as finished
    pub fn complete_corpus(&mut self) {
        if let Some(bar) = self.corpus_bar.take() {
            bar.finish_and_clear();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All corpora processed");
        }
        let _ = self.multi_progress.clear();
    }
}
