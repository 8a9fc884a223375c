// File: src/core/charmap.rs
use crate::core::types::{CharInfo, ScriptClass};

use ScriptClass::*;

const fn info(class: ScriptClass, canonical: char) -> CharInfo {
    CharInfo { class, canonical }
}

/// Classifies a code point and returns its canonical form.
///
/// Latin letters fold to lowercase, both Arabic-Indic digit ranges fold to
/// ASCII digits, and Arabic/Farsi letter variants (hamza carriers, teh
/// marbuta, Arabic kaf and yeh) fold to the Farsi letter they stand for.
/// Anything not listed is `Unknown` and maps to itself.
pub fn classify(ch: char) -> CharInfo {
    match ch {
        'A'..='Z' => info(LatinLetter, ch.to_ascii_lowercase()),
        'a'..='z' => info(LatinLetter, ch),
        '0'..='9' => info(LatinDigit, ch),

        // Alef with madda or hamza -> alef
        '\u{0622}' | '\u{0623}' | '\u{0625}' => info(ScriptLetter, '\u{0627}'),
        // Waw with hamza -> waw
        '\u{0624}' => info(ScriptLetter, '\u{0648}'),
        // Yeh with hamza, alef maksura, Arabic yeh -> Farsi yeh
        '\u{0626}' | '\u{0649}' | '\u{064A}' => info(ScriptLetter, '\u{06CC}'),
        // Teh marbuta -> teh
        '\u{0629}' => info(ScriptLetter, '\u{062A}'),
        // Arabic kaf -> keheh
        '\u{0643}' => info(ScriptLetter, '\u{06A9}'),
        '\u{0627}'
        | '\u{0628}'
        | '\u{062A}'..='\u{063A}'
        | '\u{0641}'
        | '\u{0642}'
        | '\u{0644}'..='\u{0648}'
        | '\u{067E}'
        | '\u{0686}'
        | '\u{0698}'
        | '\u{06A9}'
        | '\u{06AF}'
        | '\u{06CC}' => info(ScriptLetter, ch),

        '\u{0660}'..='\u{0669}' => info(ScriptDigit, shift_digit(ch, '\u{0660}')),
        '\u{06F0}'..='\u{06F9}' => info(ScriptDigit, shift_digit(ch, '\u{06F0}')),

        // Hamza, tatweel and the harakat
        '\u{0621}' | '\u{0640}' | '\u{064B}'..='\u{0652}' => info(Diacritic, ch),

        _ => info(Unknown, ch),
    }
}

fn shift_digit(ch: char, zero: char) -> char {
    let offset = ch as u32 - zero as u32;
    char::from_digit(offset, 10).unwrap_or(ch)
}

pub fn is_latin_letter(ch: char) -> bool {
    classify(ch).class == LatinLetter
}

pub fn is_script_letter(ch: char) -> bool {
    classify(ch).class == ScriptLetter
}

pub fn is_diacritic(ch: char) -> bool {
    classify(ch).class == Diacritic
}

/// True for digits of either script.
pub fn is_digit(ch: char) -> bool {
    matches!(classify(ch).class, LatinDigit | ScriptDigit)
}

pub fn normalize(ch: char) -> char {
    classify(ch).canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_folds_to_lowercase() {
        assert_eq!(classify('Q'), info(LatinLetter, 'q'));
        assert_eq!(classify('q'), info(LatinLetter, 'q'));
        assert!(!is_latin_letter('é'));
    }

    #[test]
    fn hamza_carriers_fold_to_bare_letters() {
        for ch in ['\u{0622}', '\u{0623}', '\u{0625}', '\u{0627}'] {
            assert_eq!(normalize(ch), '\u{0627}', "{:?}", ch);
        }
        assert_eq!(normalize('\u{0624}'), '\u{0648}');
        assert_eq!(normalize('\u{0626}'), '\u{06CC}');
        assert_eq!(normalize('\u{064A}'), '\u{06CC}');
        assert_eq!(normalize('\u{0643}'), '\u{06A9}');
        assert_eq!(normalize('\u{0629}'), '\u{062A}');
    }

    #[test]
    fn script_letter_range_has_no_gaps_where_expected() {
        // U+063B..U+0640 are not letters in the table.
        assert!(is_script_letter('\u{063A}'));
        assert!(!is_script_letter('\u{063B}'));
        assert!(!is_script_letter('\u{0640}'));
        assert!(is_script_letter('\u{0641}'));
        assert!(is_script_letter('\u{0648}'));
        assert!(is_script_letter('\u{06AF}'));
    }

    #[test]
    fn digits_of_both_scripts_fold_to_ascii() {
        assert_eq!(classify('\u{0663}'), info(ScriptDigit, '3'));
        assert_eq!(classify('\u{06F9}'), info(ScriptDigit, '9'));
        assert_eq!(classify('7'), info(LatinDigit, '7'));
        assert!(is_digit('\u{0660}') && is_digit('0'));
    }

    #[test]
    fn diacritics_and_unknowns() {
        for ch in ['\u{0621}', '\u{0640}', '\u{064B}', '\u{0652}'] {
            assert!(is_diacritic(ch));
            assert!(!is_script_letter(ch));
        }
        assert_eq!(classify('-'), info(Unknown, '-'));
        assert_eq!(normalize('€'), '€');
    }
}
