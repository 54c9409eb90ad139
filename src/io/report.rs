//! CSV and JSON report writing for a finished analysis

use crate::analysis::aggregate::CorpusAnalysis;
use crate::analysis::classifier::{SignProfile, SuffixThresholds};
use crate::analysis::ordering::{rank_counts, rank_positional};
use crate::analysis::table::{FrequencyTable, KeyLabel, PositionKey};
use crate::corpus::inscription::Inscription;
use crate::corpus::loader::CorpusLoader;
use crate::io::configuration::{
    BIGRAM_FREQ_FILE, FINAL_BIGRAM_FILE, FINAL_TRIGRAM_FILE, NORMALIZED_CORPUS_FILE,
    POSITIONAL_FREQ_FILE, REPORT_DECIMALS, REPORT_FILES, SIGN_FREQ_FILE, SUFFIX_FREQ_FILE,
    SUFFIX_STATS_FILE, TRANSITION_MODEL_FILE, TRIGRAM_FREQ_FILE,
};
use crate::io::error::{Result, WithPath};
use std::borrow::Cow;
use std::fs::File;
use std::hash::Hash;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Quote a CSV field containing a comma, quote or line break
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Write `<header>,count` followed by one row per key, highest count first
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_counts<W, K>(
    out: &mut W,
    header: &str,
    table: &FrequencyTable<K>,
) -> std::io::Result<()>
where
    W: Write,
    K: Ord + Eq + Hash + KeyLabel,
{
    writeln!(out, "{header},count")?;
    for (key, count) in rank_counts(table) {
        writeln!(out, "{},{count}", escape_field(&key.label()))?;
    }
    Ok(())
}

/// Write `position,sign,count` rows, highest count then lowest position first
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_positional<W: Write>(
    out: &mut W,
    table: &FrequencyTable<PositionKey>,
) -> std::io::Result<()> {
    writeln!(out, "position,sign,count")?;
    for (position, sign, count) in rank_positional(table) {
        writeln!(out, "{position},{},{count}", escape_field(sign))?;
    }
    Ok(())
}

/// Write per-sign suffix statistics in the order given
///
/// Ratios and average positions use four decimals, the candidate flag `0`/`1`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_profiles<W: Write>(out: &mut W, profiles: &[SignProfile]) -> std::io::Result<()> {
    writeln!(
        out,
        "sign,total_count,final_count,final_ratio,avg_position,is_suffix_candidate"
    )?;
    for profile in profiles {
        writeln!(
            out,
            "{},{},{},{:.prec$},{:.prec$},{}",
            escape_field(&profile.sign),
            profile.total,
            profile.final_count,
            profile.final_ratio,
            profile.average_position,
            u8::from(profile.is_candidate),
            prec = REPORT_DECIMALS,
        )?;
    }
    Ok(())
}

/// Writes the full report set for one corpus into a directory
#[derive(Debug, Clone)]
pub struct ReportWriter {
    out_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `out_dir`
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Directory the reports are written into
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory and optionally delete earlier reports
    ///
    /// Only files carrying this tool's report names, including the normalized
    /// corpus export, are removed. Returns the number of files deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or a file cannot be removed
    pub fn prepare(&self, clean: bool) -> Result<usize> {
        std::fs::create_dir_all(&self.out_dir).with_path(&self.out_dir, "create report directory")?;
        if !clean {
            return Ok(0);
        }

        let mut removed = 0;
        for name in REPORT_FILES.into_iter().chain([NORMALIZED_CORPUS_FILE]) {
            let path = self.out_dir.join(name);
            if path.is_file() {
                std::fs::remove_file(&path).with_path(&path, "remove previous report")?;
                removed += 1;
            }
        }
        if removed > 0 {
            log::debug!(
                "removed {removed} previous reports from {}",
                self.out_dir.display()
            );
        }
        Ok(removed)
    }

    /// Write every table of `analysis`, returning the paths written
    ///
    /// # Errors
    ///
    /// Returns an error if any report file cannot be created or written
    pub fn write_analysis(
        &self,
        analysis: &CorpusAnalysis,
        thresholds: &SuffixThresholds,
    ) -> Result<Vec<PathBuf>> {
        let frequencies = &analysis.frequencies;
        let suffixes = &analysis.suffixes;
        let profiles = analysis.profiles(thresholds);

        let written = vec![
            self.write_file(SIGN_FREQ_FILE, |out| {
                write_counts(out, "sign", &frequencies.signs)
            })?,
            self.write_file(BIGRAM_FREQ_FILE, |out| {
                write_counts(out, "bigram", &frequencies.bigrams)
            })?,
            self.write_file(TRIGRAM_FREQ_FILE, |out| {
                write_counts(out, "trigram", &frequencies.trigrams)
            })?,
            self.write_file(SUFFIX_FREQ_FILE, |out| {
                write_counts(out, "suffix", &frequencies.terminal)
            })?,
            self.write_file(POSITIONAL_FREQ_FILE, |out| {
                write_positional(out, &frequencies.positional)
            })?,
            self.write_file(SUFFIX_STATS_FILE, |out| write_profiles(out, &profiles))?,
            self.write_file(FINAL_BIGRAM_FILE, |out| {
                write_counts(out, "final_bigram", suffixes.final_bigrams())
            })?,
            self.write_file(FINAL_TRIGRAM_FILE, |out| {
                write_counts(out, "final_trigram", suffixes.final_trigrams())
            })?,
            self.write_transitions(analysis)?,
        ];

        Ok(written)
    }

    /// Write the loaded corpus as JSON Lines `loader` reads back
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written
    pub fn write_normalized(
        &self,
        loader: &CorpusLoader,
        inscriptions: &[Inscription],
    ) -> Result<PathBuf> {
        self.write_file(NORMALIZED_CORPUS_FILE, |out| loader.write_json_lines(out, inscriptions))
    }

    fn write_transitions(&self, analysis: &CorpusAnalysis) -> Result<PathBuf> {
        let json = analysis.transitions.to_json()?;
        self.write_file(TRANSITION_MODEL_FILE, |out| writeln!(out, "{json}"))
    }

    fn write_file<F>(&self, name: &str, render: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        let path = self.out_dir.join(name);
        let file = File::create(&path).with_path(&path, "create report")?;
        let mut out = BufWriter::new(file);
        render(&mut out).with_path(&path, "write report")?;
        out.flush().with_path(&path, "flush report")?;
        Ok(path)
    }
}
