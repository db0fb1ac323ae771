//! Text preparation for course documents.
//!
//! Builds the per-course training document and tokenizes it into the
//! lexical terms fed to the TF-IDF vectorizer.

use catalog::Course;

/// Standard English stop words excluded from the vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her", "what",
    "which", "who", "whom", "when", "where", "why", "how", "all", "any", "both", "each", "few",
    "more", "most", "other", "some", "such", "only", "own", "same", "than", "too", "very",
];

/// Build the training document for a course.
///
/// Concatenates title, description, category, and level in that fixed
/// order, space-separated. Missing fields contribute an empty string so a
/// sparse catalog row never faults the extraction path.
pub fn build_document(course: &Course) -> String {
    [
        course.title.as_str(),
        course.description.as_deref().unwrap_or(""),
        course.category.as_deref().unwrap_or(""),
        course.level.as_deref().unwrap_or(""),
    ]
    .join(" ")
}

/// Tokenize text: lowercase, split on non-alphanumeric, drop single
/// characters and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1)
        .filter(|w| !STOP_WORDS.contains(w))
        .map(|w| w.to_string())
        .collect()
}
