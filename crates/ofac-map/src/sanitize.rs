//! Identifier sanitization for type tokens, roles and name lookups.

/// Token used when there is no name to sanitize at all.
pub const UNKNOWN_IDENTIFIER: &str = "UNKNOWN";

/// Convert a free-form label into an upper-snake-case token.
///
/// The label is uppercased, every run of characters outside `A-Z0-9` becomes
/// a single underscore, and leading/trailing underscores are removed. A label
/// with no ASCII alphanumerics at all is returned unchanged; an empty label
/// becomes [`UNKNOWN_IDENTIFIER`].
pub fn sanitize_identifier(name: &str) -> String {
    if name.is_empty() {
        return UNKNOWN_IDENTIFIER.to_string();
    }
    let mut safe = String::with_capacity(name.len());
    let mut last_was_underscore = true;
    for ch in name.chars().flat_map(char::to_uppercase) {
        if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
            safe.push(ch);
            last_was_underscore = false;
        } else if !last_was_underscore {
            safe.push('_');
            last_was_underscore = true;
        }
    }
    if safe.ends_with('_') {
        safe.pop();
    }
    if safe.is_empty() {
        return name.to_string();
    }
    safe
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(sanitize_identifier("Driver's License No."), "DRIVER_S_LICENSE_NO");
        assert_eq!(sanitize_identifier("N.I.F."), "N_I_F");
        assert_eq!(sanitize_identifier("NIT #"), "NIT");
        assert_eq!(sanitize_identifier("  --Vessel   Flag--  "), "VESSEL_FLAG");
    }

    #[test]
    fn mixed_case_and_digits() {
        assert_eq!(sanitize_identifier("eo13662 Directive 4"), "EO13662_DIRECTIVE_4");
        assert_eq!(
            sanitize_identifier("Digital Currency Address - XBT"),
            "DIGITAL_CURRENCY_ADDRESS_XBT"
        );
    }

    #[test]
    fn diacritics_act_as_separators() {
        assert_eq!(sanitize_identifier("Cédula No."), "C_DULA_NO");
        assert_eq!(sanitize_identifier("Numéro d'Identité"), "NUM_RO_D_IDENTIT");
    }

    #[test]
    fn uppercase_expansion_is_kept() {
        assert_eq!(sanitize_identifier("straße"), "STRASSE");
    }

    #[test]
    fn degenerate_labels() {
        assert_eq!(sanitize_identifier(""), UNKNOWN_IDENTIFIER);
        assert_eq!(sanitize_identifier("---"), "---");
        assert_eq!(sanitize_identifier("ééé"), "ééé");
        assert_eq!(sanitize_identifier("_A_"), "A");
    }
}
