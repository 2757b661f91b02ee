use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Derive a URL-fragment-safe identifier from heading text.
///
/// The derivation is deterministic and must stay in lockstep with the
/// ids painted onto heading elements, otherwise `#fragment` navigation
/// and scroll tracking stop resolving:
///
/// 1. lowercase the title,
/// 2. decompose to NFD and drop combining marks ("Données" → "donnees"),
/// 3. collapse every run outside `[a-z0-9]` into a single hyphen,
/// 4. trim leading/trailing hyphens.
///
/// The result may be empty (e.g. a heading that is only punctuation);
/// such headings render but are not navigable.
pub fn slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let mut out = String::with_capacity(stripped.len());
    let mut pending_hyphen = false;
    for c in stripped.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_hyphen = false;
        } else {
            pending_hyphen = true;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::slug;

    #[rstest]
    #[case("Pourquoi moderniser ?", "pourquoi-moderniser")]
    #[case("Données clients", "donnees-clients")]
    #[case("Bonnes pratiques", "bonnes-pratiques")]
    #[case("  Setup & Install!  ", "setup-install")]
    #[case("UPPER lower 123", "upper-lower-123")]
    #[case("déjà-vu", "deja-vu")]
    #[case("   !!!   ", "")]
    #[case("", "")]
    fn derives_expected_slugs(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slug(input), expected);
    }

    #[test]
    fn slug_is_idempotent_on_its_own_output() {
        for input in ["Données clients", "Setup & Install!", "a--b", "é é é"] {
            let once = slug(input);
            assert_eq!(slug(&once), once);
        }
    }

    #[test]
    fn slug_is_deterministic_across_calls() {
        let input = "Moderniser son infrastructure réseau : bonnes pratiques en 2025";
        assert_eq!(slug(input), slug(input));
        assert_eq!(
            slug(input),
            "moderniser-son-infrastructure-reseau-bonnes-pratiques-en-2025"
        );
    }
}
