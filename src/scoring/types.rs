use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::ConfigError;

/// A percentage score, or the reason no score could be computed.
///
/// Callers that only need a number use [`SimilarityScore::value_or_zero`],
/// which yields the degraded `0.0` for an unavailable model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityScore {
    Scored(f32),
    Unavailable { reason: String },
}

impl SimilarityScore {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        SimilarityScore::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns the score (if available).
    pub fn value(&self) -> Option<f32> {
        match self {
            SimilarityScore::Scored(value) => Some(*value),
            SimilarityScore::Unavailable { .. } => None,
        }
    }

    pub fn value_or_zero(&self) -> f32 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SimilarityScore::Scored(_))
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityScore::Scored(value) => write!(f, "{:.1}%", value),
            SimilarityScore::Unavailable { reason } => write!(f, "unavailable ({})", reason),
        }
    }
}

/// How a cosine similarity in `[-1, 1]` becomes a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativePolicy {
    /// `max(0, cos) * 100`, range `[0, 100]`.
    #[default]
    Clamp,
    /// `cos * 100`, range `[-100, 100]`.
    Signed,
    /// `|cos| * 100`, range `[0, 100]`.
    Absolute,
}

impl NegativePolicy {
    /// Converts a cosine similarity to a percentage.
    ///
    /// Input is clamped to `[-1, 1]` first; rounding can push a self-similarity
    /// slightly above 1.
    pub fn apply(&self, cosine: f32) -> f32 {
        let cosine = if cosine.is_nan() {
            0.0
        } else {
            cosine.clamp(-1.0, 1.0)
        };

        match self {
            NegativePolicy::Clamp => cosine.max(0.0) * 100.0,
            NegativePolicy::Signed => cosine * 100.0,
            NegativePolicy::Absolute => cosine.abs() * 100.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NegativePolicy::Clamp => "clamp",
            NegativePolicy::Signed => "signed",
            NegativePolicy::Absolute => "absolute",
        }
    }
}

impl fmt::Display for NegativePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NegativePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(NegativePolicy::Clamp),
            "signed" => Ok(NegativePolicy::Signed),
            "absolute" | "abs" => Ok(NegativePolicy::Absolute),
            _ => Err(ConfigError::InvalidChoice {
                value: s.to_string(),
                expected: "clamp, signed, absolute",
            }),
        }
    }
}

/// Document-level similarity strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentScoring {
    /// Mean over sentences of A of the best match among sentences of B.
    /// Asymmetric: `score(a, b) != score(b, a)` in general.
    #[default]
    SentenceLevel,
    /// One embedding per document (subject to the encoder's token window).
    WholeDocument,
}

impl DocumentScoring {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentScoring::SentenceLevel => "sentence",
            DocumentScoring::WholeDocument => "whole",
        }
    }
}

impl fmt::Display for DocumentScoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentScoring {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sentence" | "sentence_level" => Ok(DocumentScoring::SentenceLevel),
            "whole" | "whole_document" | "document" => Ok(DocumentScoring::WholeDocument),
            _ => Err(ConfigError::InvalidChoice {
                value: s.to_string(),
                expected: "sentence, whole",
            }),
        }
    }
}
