//! Cross-cutting, shared constants.
//!
//! Thresholds are cosine similarities in `[-1, 1]`, not percentages.

/// Hub repository id of the default sentence-embedding model.
pub const DEFAULT_MODEL_NAME: &str = "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2";

/// Output dimension of [`DEFAULT_MODEL_NAME`].
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token window of [`DEFAULT_MODEL_NAME`]; longer inputs are truncated.
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// Base URL files are fetched from when the model is not cached locally.
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// Default download cache directory (relative to the working directory).
pub const DEFAULT_CACHE_DIR: &str = "./model_cache";

/// Two responsibilities above this similarity are considered duplicates.
pub const DEFAULT_DEDUP_THRESHOLD: f32 = 0.8;

/// A job responsibility whose best résumé match is below this is "missing".
pub const DEFAULT_EXPERIENCE_THRESHOLD: f32 = 0.5;

/// Cap on sentences considered per text by the quadratic stages.
pub const DEFAULT_MAX_SENTENCES: usize = 200;

pub const DEFAULT_LOAD_TIMEOUT_SECS: u64 = 300;

pub const DEFAULT_ENCODE_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_EMBEDDING_CACHE_CAPACITY: u64 = 4096;

/// Files a model directory must contain.
pub const MODEL_CONFIG_FILE: &str = "config.json";
pub const MODEL_TOKENIZER_FILE: &str = "tokenizer.json";
pub const MODEL_WEIGHTS_FILE: &str = "model.safetensors";

pub const MODEL_FILES: [&str; 3] = [MODEL_CONFIG_FILE, MODEL_TOKENIZER_FILE, MODEL_WEIGHTS_FILE];
