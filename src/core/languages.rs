use std::collections::HashSet;
use std::sync::LazyLock;

/// Two-letter ISO 639-1 language codes accepted for registration.
pub const ISO_639_1_CODES: [&str; 185] = [
    "ab", "aa", "af", "ak", "sq", "am", "ar", "an", "hy", "as", "av", "ae", "ay", "az", "bm", "ba",
    "eu", "be", "bn", "bh", "bi", "bs", "br", "bg", "my", "ca", "ch", "ce", "ny", "zh", "cv", "kw",
    "co", "cr", "hr", "cs", "da", "dv", "nl", "dz", "en", "eo", "et", "ee", "fo", "fj", "fi", "fr",
    "ff", "gl", "ka", "de", "el", "gn", "gu", "ht", "ha", "he", "hz", "hi", "ho", "hu", "ia", "id",
    "ie", "ga", "ig", "ik", "io", "is", "it", "iu", "ja", "jv", "kl", "kn", "kr", "ks", "kk", "km",
    "ki", "rw", "ky", "kv", "kg", "ko", "ku", "kj", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu",
    "lv", "gv", "mk", "mg", "ms", "ml", "mt", "mi", "mr", "mh", "mn", "na", "nv", "nd", "ne", "ng",
    "nb", "nn", "no", "ii", "nr", "oc", "oj", "cu", "om", "or", "os", "pa", "pi", "fa", "pl", "ps",
    "pt", "qu", "rm", "rn", "rc", "ro", "ru", "sa", "sc", "sd", "se", "sm", "sg", "sr", "gd", "sn",
    "si", "sk", "sl", "so", "st", "es", "su", "sw", "ss", "sv", "ta", "te", "tg", "th", "ti", "bo",
    "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo",
    "wa", "cy", "wo", "fy", "xh", "yi", "yo", "za", "zu",
];

static VALID_CODES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ISO_639_1_CODES.iter().copied().collect());

/// Membership check against the fixed code set. Codes are matched exactly,
/// so anything other than a known two-letter lowercase code is rejected.
pub fn is_valid_code(code: &str) -> bool {
    VALID_CODES.contains(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_codes() {
        assert!(is_valid_code("cs"));
        assert!(is_valid_code("en"));
        assert!(is_valid_code("zh"));
        assert!(is_valid_code("zu"));
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(!is_valid_code("invalid"));
        assert!(!is_valid_code("xx1"));
        assert!(!is_valid_code("CS"));
        assert!(!is_valid_code(""));
    }

    #[test]
    fn table_has_no_duplicates() {
        assert_eq!(VALID_CODES.len(), ISO_639_1_CODES.len());
    }
}
