//! Typosquat similarity checks: homograph substitution, common affixes,
//! and edit distance.

use strsim::levenshtein;

/// Visually confusable stand-ins, keyed by the ASCII character they imitate.
/// Covers the digit look-alikes plus the Greek/Cyrillic letters most often
/// seen in registered look-alike domains.
const HOMOGLYPHS: &[(char, &[char])] = &[
    ('o', &['0', 'ο', 'о']), // digit zero, Greek omicron, Cyrillic o
    ('a', &['α', 'а']),      // Greek alpha, Cyrillic a
    ('e', &['е']),           // Cyrillic e
    ('i', &['1', 'l', 'і']), // digit one, Latin l, Cyrillic i
    ('l', &['1', 'i', 'І']), // digit one, Latin i, Cyrillic I
];

/// Decorations commonly bolted onto a brand name when the plain name is taken.
const COMMON_AFFIXES: &[&str] = &[
    "-", "_", "1", "2", "0", "app", "web", "secure", "login", "official",
];

/// Maximum edit distance (and length difference) still considered a typosquat.
const MAX_EDIT_DISTANCE: usize = 2;

/// Whether `input` looks like a deliberate imitation of `legitimate`.
///
/// An exact match is not similarity; identical names are handled by the
/// caller's exact-match rule. Beyond that, three checks in order: homograph
/// substitution that normalizes back to the legitimate name, a single common
/// affix prepended or appended, and finally plain edit distance.
pub fn is_similar_domain(input: &str, legitimate: &str) -> bool {
    if input == legitimate {
        return false;
    }

    for &(canonical, stand_ins) in HOMOGLYPHS {
        for &stand_in in stand_ins {
            if input.contains(stand_in) && legitimate.contains(canonical) {
                let normalized: String = input
                    .chars()
                    .map(|c| if c == stand_in { canonical } else { c })
                    .collect();
                if normalized == legitimate {
                    return true;
                }
            }
        }
    }

    for affix in COMMON_AFFIXES {
        if input == format!("{legitimate}{affix}") || input == format!("{affix}{legitimate}") {
            return true;
        }
    }

    let length_diff = input
        .chars()
        .count()
        .abs_diff(legitimate.chars().count());
    levenshtein(input, legitimate) <= MAX_EDIT_DISTANCE && length_diff <= MAX_EDIT_DISTANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_base_cases() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn test_homograph_substitution() {
        assert!(is_similar_domain("g0ogle", "google")); // digit zero
        assert!(is_similar_domain("gοοgle", "google")); // Greek omicron
        assert!(is_similar_domain("аpple", "apple")); // Cyrillic a
        assert!(is_similar_domain("paypa1", "paypal")); // digit one for l
    }

    #[test]
    fn test_common_affixes() {
        assert!(is_similar_domain("google-", "google"));
        assert!(is_similar_domain("-google", "google"));
        assert!(is_similar_domain("googleapp", "google"));
        assert!(is_similar_domain("secureamazon", "amazon"));
        assert!(is_similar_domain("chaselogin", "chase"));
    }

    #[test]
    fn test_edit_distance_window() {
        assert!(is_similar_domain("gooogle", "google")); // distance 1
        assert!(is_similar_domain("gogle", "google")); // distance 1
        assert!(is_similar_domain("walmrat", "walmart")); // distance 2
        assert!(!is_similar_domain("wallmartt1", "walmart")); // distance 3
    }

    #[test]
    fn test_exact_match_is_not_similar() {
        assert!(!is_similar_domain("google", "google"));
    }

    #[test]
    fn test_unrelated_names() {
        assert!(!is_similar_domain("my-new-domain", "google"));
        assert!(!is_similar_domain("example", "walmart"));
    }
}
