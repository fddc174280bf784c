use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A list marker (`1. `, `- `, `* `) at the very start of a line.
static STEP_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.\s|-\s|\*\s)").expect("valid step boundary regex"));

/// One leading marker, with all whitespace that follows it.
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.\s+|-\s+|\*\s+)").expect("valid marker regex"));

/// Ordered cooking steps derived from a recipe's instructions.
///
/// Never mutated in place: re-parsing produces a new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct StepSequence(Vec<String>);

impl StepSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for StepSequence {
    fn from(steps: Vec<String>) -> Self {
        Self(steps)
    }
}

/// Splits free-form instructions into discrete steps.
///
/// Chunks start at line breaks followed by a list marker, so continuation
/// lines stay with their step. Text without any marker falls back to one
/// step per non-blank line.
pub fn parse_steps(instructions: Option<&str>) -> StepSequence {
    let Some(text) = instructions else {
        return StepSequence::default();
    };
    if text.trim().is_empty() {
        return StepSequence::default();
    }

    let mut marker_seen = false;
    let mut steps = Vec::new();
    for chunk in split_at_markers(text) {
        let trimmed = chunk.trim_start();
        let body = match LEADING_MARKER.find(trimmed) {
            Some(marker) => {
                marker_seen = true;
                &trimmed[marker.end()..]
            }
            None => trimmed,
        };
        let body = body.trim();
        if !body.is_empty() {
            steps.push(body.to_string());
        }
    }

    if marker_seen && !steps.is_empty() {
        return StepSequence(steps);
    }

    StepSequence(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn split_at_markers(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (newline, _) in text.match_indices('\n') {
        if STEP_BOUNDARY.is_match(&text[newline + 1..]) {
            chunks.push(&text[start..newline]);
            start = newline + 1;
        }
    }
    chunks.push(&text[start..]);
    chunks
}
