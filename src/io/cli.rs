//! Command-line interface for batch analysis of inscription corpora

use crate::analysis::aggregate::{AnalysisConfig, CorpusAnalysis, TransitionScope};
use crate::corpus::loader::{Corpus, CorpusLoader, load_transcriptions};
use crate::corpus::normalize::AllographMap;
use crate::io::configuration::{
    CORPUS_EXTENSIONS, DEFAULT_MAX_LEN, DEFAULT_MIN_FINAL, DEFAULT_OUTPUT_DIR, DEFAULT_SIGN_KEY,
    DEFAULT_SUFFIX_RATIO, PROGRESS_CHUNK, TRANSCRIPTION_CORPUS_NAME, TRANSCRIPTION_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::ReportWriter;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "signstats")]
#[command(
    author,
    version,
    about = "Compute sign frequency, positional and suffix statistics for inscription corpora"
)]
/// Command-line arguments for the corpus statistics tool
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Corpus file (.json, .jsonl or a .txt transcription) or directory of corpora to analyze
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory receiving the reports
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Longest inscription admitted into the tables
    #[arg(short = 'l', long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Minimum final occurrences for a suffix candidate
    #[arg(short = 'f', long, default_value_t = DEFAULT_MIN_FINAL)]
    pub min_final: usize,

    /// Minimum final/total ratio for a suffix candidate
    #[arg(short = 'r', long, default_value_t = DEFAULT_SUFFIX_RATIO)]
    pub suffix_ratio: f64,

    /// Record key holding the sign token list
    #[arg(short = 'k', long, default_value = DEFAULT_SIGN_KEY)]
    pub sign_key: String,

    /// JSON allograph map applied before aggregation
    #[arg(short, long, value_name = "MAP")]
    pub allographs: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Keep previously generated report files in the output directory
    #[arg(short, long)]
    pub no_clean: bool,

    /// Also write the loaded, normalized corpus as JSON Lines
    #[arg(short, long)]
    pub export_normalized: bool,

    /// Build the transition model from every inscription, ignoring --max-len
    #[arg(short = 't', long)]
    pub all_transitions: bool,
}

impl Cli {
    /// Check if earlier report files should be deleted before writing
    pub const fn should_clean(&self) -> bool {
        !self.no_clean
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Inscriptions the transition model is built from
    pub const fn transition_scope(&self) -> TransitionScope {
        if self.all_transitions {
            TransitionScope::All
        } else {
            TransitionScope::Admitted
        }
    }

    /// Analysis parameters from the command line, validated
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of range
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let config = AnalysisConfig {
            max_len: self.max_len,
            min_final: self.min_final,
            suffix_ratio_threshold: self.suffix_ratio,
            transition_scope: self.transition_scope(),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Orchestrates loading, analysis and report writing for each corpus
pub struct CorpusProcessor {
    cli: Cli,
    loader: CorpusLoader,
    progress_manager: Option<ProgressManager>,
}

impl CorpusProcessor {
    /// Create a new corpus processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let loader = CorpusLoader::new(cli.sign_key.clone());

        Self {
            cli,
            loader,
            progress_manager,
        }
    }

    /// Process every corpus named by the CLI target
    ///
    /// Parameters are validated before any corpus is read.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target validation, loading or
    /// report writing fails
    pub fn process(&mut self) -> Result<()> {
        let config = self.cli.analysis_config()?;
        let allographs = self
            .cli
            .allographs
            .as_deref()
            .map(AllographMap::from_json_path)
            .transpose()?;
        if let Some(ref map) = allographs {
            log::info!("loaded {} allograph rules", map.len());
        }

        let sources = self.collect_sources()?;
        if sources.is_empty() {
            log::warn!("no corpus files found in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sources.len());
        }

        let per_corpus_dirs = self.cli.target.is_dir();
        for source in &sources {
            let out_dir = if per_corpus_dirs {
                self.cli.out.join(source.report_name())
            } else {
                self.cli.out.clone()
            };
            self.process_source(source, &out_dir, &config, allographs.as_ref())?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_sources(&self) -> Result<Vec<CorpusSource>> {
        let target = &self.cli.target;
        if target.is_file() {
            if is_corpus_file(target) {
                Ok(vec![CorpusSource::Records(target.clone())])
            } else if is_transcription_file(target) {
                Ok(vec![CorpusSource::Transcriptions {
                    origin: target.clone(),
                    files: vec![target.clone()],
                }])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"corpus file must have a .json, .jsonl or .txt extension",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "list corpus directory")? {
                let path = entry.with_path(target, "list corpus directory")?.path();
                if path.is_file() {
                    files.push(path);
                }
            }
            files.sort();

            let (transcriptions, others): (Vec<PathBuf>, Vec<PathBuf>) =
                files.into_iter().partition(|path| is_transcription_file(path));
            let mut sources: Vec<CorpusSource> = others
                .into_iter()
                .filter(|path| is_corpus_file(path))
                .map(CorpusSource::Records)
                .collect();
            if !transcriptions.is_empty() {
                sources.push(CorpusSource::Transcriptions {
                    origin: target.clone(),
                    files: transcriptions,
                });
            }

            check_report_names(target, &sources)?;
            Ok(sources)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a corpus file or directory",
            ))
        }
    }

    fn process_source(
        &mut self,
        source: &CorpusSource,
        out_dir: &Path,
        config: &AnalysisConfig,
        allographs: Option<&AllographMap>,
    ) -> Result<()> {
        let start_time = Instant::now();
        let origin = source.origin();

        let mut corpus = source.load(&self.loader)?;
        if let Some(map) = allographs {
            let vocabulary = map.normalize_all(&mut corpus.inscriptions);
            log::info!(
                "normalized {} to {} canonical signs",
                origin.display(),
                vocabulary.len()
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_corpus(origin, corpus.inscriptions.len());
        }

        let mut analysis = CorpusAnalysis::from_config(config)?;
        for chunk in corpus.inscriptions.chunks(PROGRESS_CHUNK) {
            for inscription in chunk {
                analysis.observe(inscription);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.advance(chunk.len());
            }
        }

        let writer = ReportWriter::new(out_dir);
        writer.prepare(self.cli.should_clean())?;
        if self.cli.export_normalized {
            let path = writer.write_normalized(&self.loader, &corpus.inscriptions)?;
            log::info!("wrote normalized corpus to {}", path.display());
        }
        let thresholds = config.thresholds()?;
        let written = writer.write_analysis(&analysis, &thresholds)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_corpus();
        }

        log::info!(
            "{}: {} records ({} without tokens), {} admitted, {} outside 1..={} signs, {} suffix candidates; {} reports in {} ({:.2?})",
            origin.display(),
            corpus.summary.records,
            corpus.summary.missing_tokens,
            analysis.admitted,
            analysis.rejected,
            config.max_len,
            analysis.suffixes.candidates(&thresholds).len(),
            written.len(),
            out_dir.display(),
            start_time.elapsed()
        );

        Ok(())
    }
}

/// One corpus to analyze: a record file or a set of raw transcriptions
enum CorpusSource {
    Records(PathBuf),
    Transcriptions {
        origin: PathBuf,
        files: Vec<PathBuf>,
    },
}

impl CorpusSource {
    fn origin(&self) -> &Path {
        match self {
            Self::Records(path) => path,
            Self::Transcriptions { origin, .. } => origin,
        }
    }

    // Subdirectory receiving this corpus's reports when the target is a directory
    fn report_name(&self) -> String {
        match self {
            Self::Records(path) => path
                .file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned(),
            Self::Transcriptions { .. } => TRANSCRIPTION_CORPUS_NAME.to_string(),
        }
    }

    fn load(&self, loader: &CorpusLoader) -> Result<Corpus> {
        match self {
            Self::Records(path) => loader.load_path(path),
            Self::Transcriptions { files, .. } => load_transcriptions(files),
        }
    }
}

// Rejects corpora that would write into the same report directory
fn check_report_names(target: &Path, sources: &[CorpusSource]) -> Result<()> {
    let mut claimed: BTreeMap<String, &Path> = BTreeMap::new();
    for source in sources {
        let name = source.report_name();
        if let Some(first) = claimed.insert(name.clone(), source.origin()) {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &format!(
                    "{} and {} would both report into '{name}'",
                    first.display(),
                    source.origin().display()
                ),
            ));
        }
    }
    Ok(())
}

fn is_transcription_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(TRANSCRIPTION_EXTENSION)
}

fn is_corpus_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CORPUS_EXTENSIONS.contains(&ext))
}
