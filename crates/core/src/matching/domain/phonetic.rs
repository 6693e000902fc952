/// Leading silent letters, applied once at the start of the word.
const SILENT_PREFIXES: &[(&str, &str)] = &[("kn", "n"), ("pn", "n"), ("wr", "r")];

/// Sound folds applied in order across the whole word.
///
/// `0` stands for "th" and `x` for "sh"/"ch" so they stay distinct from
/// `t` and `s`.
const FOLDS: &[(&str, &str)] = &[
    ("ph", "f"),
    ("gh", "f"),
    ("th", "0"),
    ("sh", "x"),
    ("ch", "x"),
    ("ck", "k"),
    ("c", "k"),
    ("z", "s"),
    ("q", "k"),
];

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Coarse fingerprint of how a word sounds.
///
/// Words sharing a code are treated as acoustically confusable. The rules
/// run in a single pass, so re-encoding a code is not guaranteed to be a
/// no-op.
pub fn phonetic_code(word: &str) -> String {
    let mut code = word.trim().to_lowercase();

    for (prefix, replacement) in SILENT_PREFIXES {
        if let Some(rest) = code.strip_prefix(prefix) {
            code = format!("{replacement}{rest}");
        }
    }
    for (from, to) in FOLDS {
        code = code.replace(from, to);
    }

    let mut chars = code.chars();
    let Some(first) = chars.next() else {
        return code;
    };
    let consonants = std::iter::once(first).chain(chars.filter(|c| !VOWELS.contains(c)));

    let mut collapsed = String::with_capacity(code.len());
    let mut previous = None;
    for c in consonants {
        if previous != Some(c) {
            collapsed.push(c);
        }
        previous = Some(c);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::silent_k("knight", "nft")]
    #[case::silent_p("pneumonia", "nmn")]
    #[case::silent_w("write", "rt")]
    #[case::ph("phone", "fn")]
    #[case::th("there", "0r")]
    #[case::sh("ship", "xp")]
    #[case::ch("chip", "xp")]
    #[case::ck("back", "bk")]
    #[case::hard_c("cat", "kt")]
    #[case::z("zoo", "s")]
    #[case::q("queen", "kn")]
    #[case::double_letters("letter", "ltr")]
    #[case::leading_vowel_kept("apple", "apl")]
    #[case::uppercase("HELLO", "hl")]
    fn test_phonetic_code(#[case] word: &str, #[case] expected: &str) {
        assert_eq!(phonetic_code(word), expected);
    }

    #[rstest]
    #[case::ph_f("phone", "fone")]
    #[case::c_k("cat", "kat")]
    #[case::th("their", "there")]
    #[case::vowel_swap("sun", "son")]
    fn test_confusable_words_share_a_code(#[case] a: &str, #[case] b: &str) {
        assert_eq!(phonetic_code(a), phonetic_code(b));
    }

    #[test]
    fn test_distinct_sounds_keep_distinct_codes() {
        assert_ne!(phonetic_code("think"), phonetic_code("tink"));
        assert_ne!(phonetic_code("ship"), phonetic_code("sip"));
    }

    #[rstest]
    #[case("nft")]
    #[case("bk")]
    #[case("ltr")]
    fn test_second_pass_is_noop_for_plain_consonant_runs(#[case] code: &str) {
        assert_eq!(phonetic_code(code), code);
    }

    #[test]
    fn test_empty_and_single_letter() {
        assert_eq!(phonetic_code(""), "");
        assert_eq!(phonetic_code("a"), "a");
        assert_eq!(phonetic_code("  "), "");
    }
}
