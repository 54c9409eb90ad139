//! Analysis defaults, corpus keys and report file names

// Default values for configurable parameters
/// Longest inscription admitted into the tables
pub const DEFAULT_MAX_LEN: usize = 5;
/// Minimum number of final occurrences for a suffix candidate
pub const DEFAULT_MIN_FINAL: usize = 3;
/// Minimum final/total ratio for a suffix candidate
pub const DEFAULT_SUFFIX_RATIO: f64 = 0.7;

// Corpus record layout
/// Top-level key holding the inscription records
pub const INSCRIPTIONS_KEY: &str = "inscriptions";
/// Record key holding the sign token list
pub const DEFAULT_SIGN_KEY: &str = "sign_ids";
/// Record key written for the inscription identifier
pub const ID_KEY: &str = "id";
/// Record keys tried in order for the inscription identifier
pub const ID_KEYS: [&str; 2] = [ID_KEY, "insc_id"];
/// Allograph map entry that carries a human note rather than a mapping
pub const ALLOGRAPH_COMMENT_KEY: &str = "comment";

/// Record corpus file extensions accepted by the CLI
pub const CORPUS_EXTENSIONS: [&str; 2] = ["json", JSON_LINES_EXTENSION];
/// Extension of record corpora read line by line
pub const JSON_LINES_EXTENSION: &str = "jsonl";
/// Extension of raw transcription files holding one inscription each
pub const TRANSCRIPTION_EXTENSION: &str = "txt";
/// Report subdirectory for the transcription files of a corpus directory
pub const TRANSCRIPTION_CORPUS_NAME: &str = "transcriptions";
/// Default directory that receives the reports
pub const DEFAULT_OUTPUT_DIR: &str = "reports";

// Report file names, in write order
/// Unigram counts
pub const SIGN_FREQ_FILE: &str = "01_sign_freq.csv";
/// Bigram counts
pub const BIGRAM_FREQ_FILE: &str = "02_bigram_freq.csv";
/// Trigram counts
pub const TRIGRAM_FREQ_FILE: &str = "03_trigram_freq.csv";
/// Terminal sign counts
pub const SUFFIX_FREQ_FILE: &str = "04_suffix_sign_freq.csv";
/// Position-keyed sign counts
pub const POSITIONAL_FREQ_FILE: &str = "05_positional_freq.csv";
/// Per-sign suffix statistics and candidate flags
pub const SUFFIX_STATS_FILE: &str = "06_suffix_stats.csv";
/// Closing bigram counts
pub const FINAL_BIGRAM_FILE: &str = "07_final_bigram.csv";
/// Closing trigram counts
pub const FINAL_TRIGRAM_FILE: &str = "08_final_trigram.csv";
/// Successor counts of the bigram transition model
pub const TRANSITION_MODEL_FILE: &str = "09_transition_model.json";

/// Loaded and normalized corpus, written on request as JSON Lines
pub const NORMALIZED_CORPUS_FILE: &str = "00_normalized_corpus.jsonl";

/// Every report a run writes
pub const REPORT_FILES: [&str; 9] = [
    SIGN_FREQ_FILE,
    BIGRAM_FREQ_FILE,
    TRIGRAM_FREQ_FILE,
    SUFFIX_FREQ_FILE,
    POSITIONAL_FREQ_FILE,
    SUFFIX_STATS_FILE,
    FINAL_BIGRAM_FILE,
    FINAL_TRIGRAM_FILE,
    TRANSITION_MODEL_FILE,
];

/// Decimal places for ratios and average positions in reports
pub const REPORT_DECIMALS: usize = 4;

// Progress bar display settings
/// Inscriptions folded between progress bar refreshes
pub const PROGRESS_CHUNK: usize = 256;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
