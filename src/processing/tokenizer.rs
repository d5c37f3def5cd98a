//! Text segmentation and normalization shared by every matching stage

use unicode_segmentation::UnicodeSegmentation;

/// Symbols that stay attached to the word they follow (`c++`, `c#`, `f#`)
const SUFFIX_SYMBOLS: [char; 2] = ['+', '#'];

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Split text into lowercased word tokens.
///
/// Segmentation follows Unicode word boundaries. Punctuation and whitespace are
/// dropped, except that a run of `+`/`#` directly after a word is kept as part
/// of that word. Words are split at apostrophes and a possessive `'s` is
/// dropped, so `Python's` yields `python`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut attached = false;
    let mut after_apostrophe = false;

    for segment in text.split_word_bounds() {
        if segment.chars().any(char::is_alphanumeric) {
            let lowered = segment.to_lowercase();
            if after_apostrophe && lowered == "s" {
                attached = false;
            } else {
                push_word(&mut tokens, &lowered);
                attached = true;
            }
            after_apostrophe = false;
        } else if attached && segment.chars().all(|c| SUFFIX_SYMBOLS.contains(&c)) {
            if let Some(last) = tokens.last_mut() {
                last.push_str(segment);
            }
        } else {
            // `C++'s` segments as `c`, `+`, `+`, `'`, `s`
            after_apostrophe = attached && segment.chars().all(|c| APOSTROPHES.contains(&c));
            attached = false;
        }
    }

    tokens
}

fn push_word(tokens: &mut Vec<String>, word: &str) {
    let mut parts = word
        .split(|c: char| APOSTROPHES.contains(&c))
        .filter(|part| part.chars().any(char::is_alphanumeric));

    if let Some(first) = parts.next() {
        tokens.push(first.to_string());
    }
    tokens.extend(parts.filter(|part| *part != "s").map(str::to_string));
}

/// Identity of a skill phrase: its tokens joined by single spaces.
///
/// Two phrases with the same key are the same skill.
pub fn skill_key(phrase: &str) -> String {
    tokenize(phrase).join(" ")
}

/// Title-case a phrase for display: a letter following a non-letter is
/// uppercased, every other letter lowercased.
pub fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut prev_is_letter = false;

    for c in phrase.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Lowercase and collapse whitespace, for comparing free-text names
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_punctuation_and_case() {
        let tokens = tokenize("Skills: Python, SQL; Tableau (advanced)!");
        assert_eq!(tokens, vec!["skills", "python", "sql", "tableau", "advanced"]);
    }

    #[test]
    fn test_tokenize_keeps_language_suffixes() {
        let tokens = tokenize("C++ and C# developer, some F#.");
        assert_eq!(tokens, vec!["c++", "and", "c#", "developer", "some", "f#"]);
    }

    #[test]
    fn test_tokenize_splits_on_separators() {
        assert_eq!(tokenize("CI/CD"), vec!["ci", "cd"]);
        assert_eq!(tokenize("machine-learning"), vec!["machine", "learning"]);
        assert_eq!(tokenize("Node.js"), vec!["node.js"]);
    }

    #[test]
    fn test_tokenize_drops_possessive() {
        assert_eq!(tokenize("Python's ecosystem"), vec!["python", "ecosystem"]);
        assert_eq!(tokenize("AWS\u{2019}s services"), vec!["aws", "services"]);
        assert_eq!(tokenize("C++'s templates"), vec!["c++", "templates"]);
        assert_eq!(tokenize("O'Reilly"), vec!["o", "reilly"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbol_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... --- !!! ").is_empty());
        assert!(tokenize("++ leading").contains(&"leading".to_string()));
        assert_eq!(tokenize("++ leading").len(), 1);
    }

    #[test]
    fn test_skill_key() {
        assert_eq!(skill_key("Data  Visualization"), "data visualization");
        assert_eq!(skill_key("ci/cd"), "ci cd");
        assert_eq!(skill_key("C++"), "c++");
        assert_eq!(skill_key("   "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sql"), "Sql");
        assert_eq!(title_case("data visualization"), "Data Visualization");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("POWER BI"), "Power Bi");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Data   ANALYTICS "), "data analytics");
    }
}
