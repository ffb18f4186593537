//! Text analysis for page content: tokenization, stopword filtering,
//! keyword density and Flesch reading ease.
//!
//! The stopword set is a fixed Spanish list (the corpus the pipeline was
//! built for); localization beyond it is out of scope.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Fixed Spanish stopword list, merged with the custom additions below at
/// load time.
const SPANISH_STOPWORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "mas", "más", "pero", "sus", "le", "ya", "o",
    "este", "si", "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también",
    "me", "hasta", "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno",
    "les", "ni", "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes",
    "algunos", "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos",
    "mucho", "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas", "algunas",
    "algo", "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas", "es", "son", "fue",
    "ha", "han", "ser", "tiene", "tienen", "era", "eran", "está", "están", "estaba",
];

const CUSTOM_STOPWORDS: &[&str] = &["y", "que", "la", "en", "el", "un", "una"];

/// Process-wide stopword set. Idempotent; the first caller pays the build.
pub fn ensure_stopwords() -> &'static HashSet<&'static str> {
    static STOPWORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOPWORDS.get_or_init(|| {
        SPANISH_STOPWORDS
            .iter()
            .chain(CUSTOM_STOPWORDS.iter())
            .copied()
            .collect()
    })
}

/// Split text into lowercase alphabetic word tokens. Digits and punctuation
/// act as separators and never appear in the output.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
        .collect()
}

/// Tokenize and drop stopwords; these are the "content words" the word count
/// and keyword densities are computed over.
pub fn content_words(text: &str) -> Vec<String> {
    let stopwords = ensure_stopwords();
    tokenize(text)
        .into_iter()
        .filter(|word| !stopwords.contains(word.as_str()))
        .collect()
}

/// Per-keyword density (occurrences / total words) in first-seen order.
///
/// The order is captured explicitly so downstream ranking can tie-break
/// reproducibly instead of leaning on map iteration order.
pub fn keyword_density(words: &[String]) -> Vec<(String, f64)> {
    if words.is_empty() {
        return Vec::new();
    }

    let mut counts: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in words {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.clone(), counts.len());
                counts.push((word.clone(), 1));
            }
        }
    }

    let total = words.len() as f64;
    counts
        .into_iter()
        .map(|(word, count)| (word, count as f64 / total))
        .collect()
}

/// Flesch reading ease over raw text.
///
/// 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words).
/// Empty text scores 0. The syllable count is the usual vowel-group
/// heuristic with silent trailing 'e' handling.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| s.chars().any(|c| c.is_alphanumeric()))
        .count()
        .max(1);

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let word_count = words.len() as f64;
    206.835 - 1.015 * (word_count / sentences as f64) - 84.6 * (syllables as f64 / word_count)
}

fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if word.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| "aeiouyáéíóú".contains(c);
    let mut syllables = 0;
    let mut previous_was_vowel = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            syllables += 1;
        }
        previous_was_vowel = vowel;
    }

    // silent trailing 'e' as in "make", but not a lone "e"
    if word.ends_with('e') && !word.ends_with("le") && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_only_alphabetic_words() {
        let tokens = tokenize("Hello, World! 2024 3d-printing rocks");
        assert_eq!(tokens, vec!["hello", "world", "d", "printing", "rocks"]);
    }

    #[test]
    fn test_content_words_drop_stopwords() {
        let words = content_words("el perro y la casa que ladra");
        assert_eq!(words, vec!["perro", "casa", "ladra"]);
    }

    #[test]
    fn test_ensure_stopwords_is_idempotent() {
        let first = ensure_stopwords() as *const _;
        let second = ensure_stopwords() as *const _;
        assert_eq!(first, second);
        assert!(ensure_stopwords().contains("una"));
    }

    #[test]
    fn test_keyword_density_counts_and_order() {
        let words: Vec<String> = ["seo", "rust", "seo", "web"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let densities = keyword_density(&words);

        assert_eq!(densities.len(), 3);
        assert_eq!(densities[0], ("seo".to_string(), 0.5));
        assert_eq!(densities[1], ("rust".to_string(), 0.25));
        assert_eq!(densities[2], ("web".to_string(), 0.25));
    }

    #[test]
    fn test_keyword_density_empty_input() {
        assert!(keyword_density(&[]).is_empty());
    }

    #[test]
    fn test_flesch_simple_text_reads_easy() {
        let score = flesch_reading_ease("The cat sat. The dog ran. It was fun.");
        assert!(score > 80.0, "short monosyllabic text should score high, got {}", score);
    }

    #[test]
    fn test_flesch_dense_text_reads_hard() {
        let score = flesch_reading_ease(
            "Notwithstanding considerable organizational heterogeneity, institutional \
             prioritization necessitates comprehensive interdepartmental harmonization \
             initiatives alongside sustainable operational contingencies",
        );
        assert!(score < 30.0, "polysyllabic run-on should score low, got {}", score);
    }

    #[test]
    fn test_flesch_empty_text_scores_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("analysis"), 4);
    }
}
