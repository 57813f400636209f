use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';
const ARABIC: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// A language guessed from the scripts present in a complaint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Returns the ISO 639-1 code stored alongside complaints.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Arabic => "ar",
        }
    }
}

/// The result of running a complaint through [`detect_and_translate`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Translation {
    pub language: Language,
    pub text: String,
}

/// Guesses the language of `text` from its code points. Devanagari
/// takes precedence over Arabic; anything else is treated as English.
///
/// ```
/// use civic::language::{detect, Language};
/// assert_eq!(detect("पानी"), Language::Hindi);
/// assert_eq!(detect("no water"), Language::English);
/// ```
pub fn detect(text: &str) -> Language {
    if text.chars().any(|c| DEVANAGARI.contains(&c)) {
        Language::Hindi
    } else if text.chars().any(|c| ARABIC.contains(&c)) {
        Language::Arabic
    } else {
        Language::English
    }
}

/// Detects the language of `text`. The text itself is returned
/// untouched: there is no translation backend.
pub fn detect_and_translate(text: &str) -> Translation {
    Translation {
        language: detect(text),
        text: text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{detect, detect_and_translate, Language};

    #[test]
    fn empty_text_is_english() {
        assert_eq!(detect(""), Language::English);
    }

    #[test]
    fn devanagari_wins_over_arabic() {
        assert_eq!(detect("ماء पानी"), Language::Hindi);
    }

    #[test]
    fn arabic_is_detected() {
        assert_eq!(detect("تسرب المياه في الشارع"), Language::Arabic);
        assert_eq!(Language::Arabic.code(), "ar");
    }

    #[test]
    fn translation_keeps_text() {
        let translation = detect_and_translate("सड़क पर गड्ढा");

        assert_eq!(translation.language, Language::Hindi);
        assert_eq!(translation.text, "सड़क पर गड्ढा");
    }

    proptest! {
        #[test]
        fn any_devanagari_means_hindi(before in "\\PC*", c in "[\u{0900}-\u{097F}]", after in "\\PC*") {
            let text = format!("{}{}{}", before, c, after);
            prop_assert_eq!(detect(&text), Language::Hindi);
        }

        #[test]
        fn arabic_without_devanagari_means_arabic(before in "[a-z ]*", c in "[\u{0600}-\u{06FF}]", after in "[a-z ]*") {
            let text = format!("{}{}{}", before, c, after);
            prop_assert_eq!(detect(&text), Language::Arabic);
        }

        #[test]
        fn latin_text_is_english(text in "[ -~]*") {
            prop_assert_eq!(detect(&text), Language::English);
            prop_assert_eq!(detect_and_translate(&text).text, text);
        }
    }
}
