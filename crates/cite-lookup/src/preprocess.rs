use unicode_normalization::UnicodeNormalization;

/// Trim and NFKC-normalize user input.
///
/// Full-width digits and hyphens typed through a CJK input method become
/// ASCII. No checksum or length check is made.
pub fn normalize_identifier(raw: &str) -> String {
    let text = raw.trim();

    if text.is_empty() {
        return String::new();
    }

    text.nfkc().collect::<String>().trim().to_string()
}
