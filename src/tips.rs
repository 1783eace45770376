//! Turn free-form model output into exactly [`TIP_COUNT`] usable tips.

use std::fmt;
use tracing::debug;

pub mod fallback;
pub mod strategies;

pub use fallback::{FallbackPool, FALLBACK_TIPS};
pub use strategies::{line_segments, numbered_segments, sentence_segments};

/// Number of tips in every [`TipList`].
pub const TIP_COUNT: usize = 3;

// Padding may have to cover the whole list.
const _: () = assert!(FALLBACK_TIPS.len() >= TIP_COUNT);

/// Exactly [`TIP_COUNT`] trimmed, non-empty tips without enumeration markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipList(Vec<String>);

impl TipList {
    pub fn tips(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    /// `1. first\n2. second\n3. third`
    pub fn to_numbered(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, tip)| format!("{}. {tip}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for TipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_numbered())
    }
}

/// Extract tips from raw generated text.
///
/// A numbered list wins when it has enough entries. Otherwise lines are
/// used, or sentences when there are too few lines and splitting on
/// sentences finds more. Extra candidates are dropped and any shortfall is
/// filled from a fresh [`FallbackPool`].
pub fn extract_tips(raw: &str) -> TipList {
    let numbered = numbered_segments(raw);
    let (source, mut tips) = if numbered.len() >= TIP_COUNT {
        ("numbered", numbered)
    } else {
        let lines = line_segments(raw);
        if lines.len() >= TIP_COUNT {
            ("lines", lines)
        } else {
            let sentences = sentence_segments(raw);
            if sentences.len() > lines.len() {
                ("sentences", sentences)
            } else {
                ("lines", lines)
            }
        }
    };

    tips.truncate(TIP_COUNT);
    let missing = TIP_COUNT - tips.len();
    tips.extend(FallbackPool::new().take(missing).map(String::from));

    debug!(source, fallback = missing, "extracted tips");
    TipList(tips)
}

/// Extract tips and render them as a numbered block.
pub fn format_tips(raw: &str) -> String {
    extract_tips(raw).to_numbered()
}
