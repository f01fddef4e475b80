//! Fixed correction tables for known typos and abbreviations.
//!
//! These lookup tables are constant for the process lifetime and are checked
//! before any candidate generation runs: a known typo or abbreviation
//! short-circuits the whole scoring pipeline. The entries cover common
//! e-commerce query shorthand and the misspellings observed most often in
//! search logs.

use ahash::AHashMap;
use lazy_static::lazy_static;

lazy_static! {
    /// Canonical word -> observed typo variants. Inverted into
    /// [`TYPO_TO_CANONICAL`] at startup; kept in this direction because it is
    /// the natural shape to maintain by hand.
    static ref COMMON_TYPOS: Vec<(&'static str, &'static [&'static str])> = vec![
        ("iphone", &["iphone", "ipone", "iphon", "ifone", "iphones"][..]),
        ("samsung", &["samsung", "samsnug", "samsng", "samung", "samsong"][..]),
        ("adidas", &["adidas", "addidas", "adiadas", "adidass"][..]),
        ("nike", &["nike", "niike", "nkie", "nyke"][..]),
        ("laptop", &["laptop", "laptpo", "labtop", "leptop"][..]),
        ("mobile", &["mobile", "mobil", "moble", "moblie"][..]),
        ("headphones", &["headphones", "hedphones", "headfones", "headphons"][..]),
        ("bluetooth", &["bluetooth", "bluetoth", "bluethooth", "blutooth"][..]),
        ("wireless", &["wireless", "wireles", "wirelss", "wirelees"][..]),
        ("camera", &["camera", "camra", "cemera", "camara"][..]),
    ];

    /// Typo -> canonical form, many-to-one.
    static ref TYPO_TO_CANONICAL: AHashMap<&'static str, &'static str> = {
        let mut map = AHashMap::new();
        for (canonical, typos) in COMMON_TYPOS.iter() {
            for typo in typos.iter() {
                map.insert(*typo, *canonical);
            }
        }
        map
    };

    /// Abbreviation -> expansion, one-to-one. An expansion is only applied
    /// when it is itself a member of the live vocabulary; that check belongs
    /// to the corrector, which owns the vocabulary reference.
    static ref ABBREVIATION_EXPANSIONS: AHashMap<&'static str, &'static str> = {
        let mut map = AHashMap::new();
        for (abbr, expansion) in [
            ("tv", "television"),
            ("pc", "computer"),
            ("mob", "mobile"),
            ("tab", "tablet"),
            ("cam", "camera"),
            ("mic", "microphone"),
            ("kbd", "keyboard"),
            ("hdd", "hard drive"),
            ("ssd", "solid state drive"),
            ("ram", "memory"),
            ("gpu", "graphics card"),
            ("cpu", "processor"),
            ("usb", "universal serial bus"),
            ("hdmi", "high definition multimedia interface"),
            ("wifi", "wireless"),
            ("bt", "bluetooth"),
            ("ac", "air conditioner"),
            ("fridge", "refrigerator"),
            ("washing", "washing machine"),
            ("tshirt", "t-shirt"),
            ("jeans", "denim"),
            ("sneakers", "sports shoes"),
            ("earphones", "headphones"),
        ] {
            map.insert(abbr, expansion);
        }
        map
    };
}

/// Look up the canonical form of a known typo.
///
/// Lookup is case-insensitive for ASCII input; the corrector lowercases
/// before calling.
pub fn lookup_typo(word: &str) -> Option<&'static str> {
    TYPO_TO_CANONICAL.get(word).copied()
}

/// Look up the expansion of a known abbreviation.
///
/// The result's vocabulary-membership gate is applied by the caller.
pub fn lookup_abbreviation(word: &str) -> Option<&'static str> {
    ABBREVIATION_EXPANSIONS.get(word).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_lookup() {
        assert_eq!(lookup_typo("ipone"), Some("iphone"));
        assert_eq!(lookup_typo("blutooth"), Some("bluetooth"));
        assert_eq!(lookup_typo("hedphones"), Some("headphones"));
        assert_eq!(lookup_typo("samsnug"), Some("samsung"));
        assert_eq!(lookup_typo("definitely-not-a-typo"), None);
    }

    #[test]
    fn test_typo_map_is_many_to_one() {
        for typo in ["laptpo", "labtop", "leptop"] {
            assert_eq!(lookup_typo(typo), Some("laptop"));
        }
    }

    #[test]
    fn test_canonical_words_map_to_themselves() {
        // The maintained lists include the canonical spelling itself; the
        // corrector treats an identity mapping as "no correction".
        assert_eq!(lookup_typo("iphone"), Some("iphone"));
        assert_eq!(lookup_typo("nike"), Some("nike"));
    }

    #[test]
    fn test_abbreviation_lookup() {
        assert_eq!(lookup_abbreviation("tv"), Some("television"));
        assert_eq!(lookup_abbreviation("bt"), Some("bluetooth"));
        assert_eq!(lookup_abbreviation("fridge"), Some("refrigerator"));
        assert_eq!(lookup_abbreviation("xyz"), None);
    }
}
