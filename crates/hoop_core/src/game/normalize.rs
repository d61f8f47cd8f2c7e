//! Name normalization shared by typed guesses and roster names.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Generational suffixes, matched as whole words before periods are removed
/// so initials such as "J.R." survive.
static NAME_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(sr|jr|iii|ii|iv|v)\b").expect("invalid suffix regex"));

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Canonical comparison form of a player name.
///
/// Decomposes accents and drops them, lowercases, removes suffix words, then
/// periods, and joins the remaining words with single spaces.
pub fn normalize_name(input: &str) -> String {
    let folded: String =
        input.nfd().filter(|c| !is_combining_diacritic(*c)).collect::<String>().to_lowercase();
    let unsuffixed = NAME_SUFFIX.replace_all(&folded, "");

    unsuffixed.replace('.', "").split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_and_period_are_dropped() {
        assert_eq!(normalize_name("Cliff Robinson Jr."), "cliff robinson");
        assert_eq!(normalize_name("cliff robinson"), "cliff robinson");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize_name("Nikola Jokić"), "nikola jokic");
        assert_eq!(normalize_name("Dāvis Bertāns"), "davis bertans");
        assert_eq!(normalize_name("Luka Dončić"), "luka doncic");
    }

    #[test]
    fn roman_numerals_only_as_whole_words() {
        assert_eq!(normalize_name("Gary Payton II"), "gary payton");
        assert_eq!(normalize_name("Marvin Bagley III"), "marvin bagley");
        assert_eq!(normalize_name("Ivica Zubac"), "ivica zubac");
        assert_eq!(normalize_name("Victor Wembanyama"), "victor wembanyama");
    }

    #[test]
    fn initials_lose_their_periods() {
        assert_eq!(normalize_name("P.J. Washington"), "pj washington");
        assert_eq!(normalize_name("  OG   Anunoby "), "og anunoby");
    }

    #[test]
    fn dotted_initials_are_not_a_suffix() {
        assert_eq!(normalize_name("J.R. Smith"), "jr smith");
        assert_eq!(normalize_name("jr smith"), "smith");
        assert_ne!(normalize_name("J.R. Smith"), normalize_name("Smith"));
    }

    #[test]
    fn suffix_followed_by_punctuation_is_dropped() {
        assert_eq!(normalize_name("Kelly Oubre Jr., "), "kelly oubre ,");
        assert_eq!(normalize_name("Larry Nance Jr.!"), "larry nance !");
    }

    #[test]
    fn suffix_letters_inside_words_are_kept() {
        assert_eq!(normalize_name("Ivica Zubac"), "ivica zubac");
        assert_eq!(normalize_name("Jrue Holiday"), "jrue holiday");
        assert_eq!(normalize_name("Vince Carter Sr"), "vince carter");
    }

    #[test]
    fn blank_input_normalizes_to_empty() {
        assert_eq!(normalize_name("   "), "");
        assert_eq!(normalize_name(" Jr. "), "");
    }
}
