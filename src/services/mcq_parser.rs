use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::models::domain::{Mcq, McqOptions};

// Numbered question ending in '?', four lettered options, then "Answer: x)".
static MCQ_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)\d+\.\s*(.*?)\?\s*a\)(.*?)\s*b\)(.*?)\s*c\)(.*?)\s*d\)(.*?)\s*Answer:\s*([a-d])\)",
    )
    .expect("MCQ_PATTERN is a valid regex pattern")
});

/// Turns raw model output into question records.
///
/// Implementations are best effort: output that does not fit the expected
/// shape produces no records rather than an error.
pub trait McqExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Mcq>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMcqExtractor;

impl McqExtractor for RegexMcqExtractor {
    fn extract(&self, text: &str) -> Vec<Mcq> {
        extract_mcqs(text)
    }
}

/// Extracts every conforming question in order of appearance, numbering them from 1.
pub fn extract_mcqs(text: &str) -> Vec<Mcq> {
    MCQ_PATTERN
        .captures_iter(text)
        .zip(1..)
        .map(|(caps, question_number)| mcq_from_captures(&caps, question_number))
        .collect()
}

fn mcq_from_captures(caps: &Captures<'_>, question_number: u32) -> Mcq {
    let group = |i: usize| {
        caps.get(i)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    Mcq {
        question_number,
        question: group(1),
        options: McqOptions {
            a: group(2),
            b: group(3),
            c: group(4),
            d: group(5),
        },
        correct_answer: group(6),
    }
}
