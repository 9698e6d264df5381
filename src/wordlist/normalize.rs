//! Cell text normalization
//!
//! Two independent checks: whether a cell looks like an English word or
//! phrase, and cleanup of the Chinese meaning text. Both full-width and
//! half-width punctuation must be matched since vocabulary documents mix them.

use once_cell::sync::Lazy;
use regex::Regex;

// Letters, whitespace, hyphens and apostrophes only
static ENGLISH_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

// Meaning cleanup, applied in this order
static PART_OF_SPEECH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+\.").unwrap());
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[（(].*?[)）]").unwrap());
static BULLETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[・•]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LEADING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[,，;；\s]+").unwrap());
static TRAILING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,，;；\s…]+$").unwrap());

/// Check whether text is an English word or phrase
///
/// Spaces, hyphens and apostrophes are allowed so that entries such as
/// "ice-cream" or "rock 'n' roll" pass. Whitespace-only text does not.
pub fn is_english_word(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && ENGLISH_WORD.is_match(text)
}

/// Clean up the meaning text of a vocabulary entry
///
/// Strips part-of-speech tags ("n.", "vt."), bracketed notes, bullet marks,
/// and stray separators at either end. An empty result means the entry has
/// no usable meaning.
pub fn clean_meaning(text: &str) -> String {
    let text = PART_OF_SPEECH.replace_all(text, "");
    let text = BRACKETED.replace_all(&text, "");
    let text = BULLETS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = LEADING_PUNCT.replace(&text, "");
    let text = TRAILING_PUNCT.replace(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_words_are_english() {
        assert!(is_english_word("apple"));
        assert!(is_english_word("  Apple  "));
        assert!(is_english_word("give up"));
        assert!(is_english_word("ice-cream"));
        assert!(is_english_word("o'clock"));
    }

    #[test]
    fn test_rejects_non_english_cells() {
        assert!(!is_english_word(""));
        assert!(!is_english_word("   "));
        assert!(!is_english_word("苹果"));
        assert!(!is_english_word("apple苹果"));
        assert!(!is_english_word("12"));
        assert!(!is_english_word("A4"));
        assert!(!is_english_word("etc."));
        assert!(!is_english_word("yes/no"));
        assert!(!is_english_word("café"));
    }

    #[test]
    fn test_clean_meaning_strips_part_of_speech() {
        assert_eq!(clean_meaning("你好 n."), "你好");
        assert_eq!(clean_meaning("n. 苹果"), "苹果");
        assert_eq!(clean_meaning("vt. 放弃；vi. 投降"), "放弃； 投降");
    }

    #[test]
    fn test_clean_meaning_strips_brackets() {
        assert_eq!(clean_meaning("银行（金融机构）"), "银行");
        assert_eq!(clean_meaning("河岸(bank of a river)"), "河岸");
        assert_eq!(clean_meaning("书（）本"), "书本");
        // Mixed bracket families still pair up
        assert_eq!(clean_meaning("书(复数）"), "书");
    }

    #[test]
    fn test_clean_meaning_bracket_removal_is_non_greedy() {
        assert_eq!(clean_meaning("(a)猫(b)"), "猫");
    }

    #[test]
    fn test_clean_meaning_removes_bullets_and_collapses_spaces() {
        assert_eq!(clean_meaning("・苹果 •梨"), "苹果 梨");
        assert_eq!(clean_meaning("跑   步\n走"), "跑 步 走");
    }

    #[test]
    fn test_clean_meaning_strips_edge_punctuation() {
        assert_eq!(clean_meaning("，；苹果"), "苹果");
        assert_eq!(clean_meaning(", ;苹果"), "苹果");
        assert_eq!(clean_meaning("苹果；梨，"), "苹果；梨");
        assert_eq!(clean_meaning("苹果……"), "苹果");
        assert_eq!(clean_meaning("苹果, ;"), "苹果");
    }

    #[test]
    fn test_clean_meaning_can_be_empty() {
        assert_eq!(clean_meaning("(n.)"), "");
        assert_eq!(clean_meaning("（名词）"), "");
        assert_eq!(clean_meaning("adj."), "");
        assert_eq!(clean_meaning("   "), "");
    }

    #[test]
    fn test_clean_meaning_is_idempotent() {
        let samples = [
            "n. 苹果",
            "vt. 放弃；vi. 投降 (常与to连用)",
            "・银行，河岸……",
            "  adj. 美丽的, 漂亮的 ; ",
            "你好 n.",
            "（口语）再见",
        ];

        for sample in samples {
            let once = clean_meaning(sample);
            assert_eq!(clean_meaning(&once), once, "not idempotent for {sample:?}");
        }
    }
}
