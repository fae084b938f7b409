/// Canonical text form shared by every scoring path: lower-cased, internal
/// whitespace runs collapsed to single spaces, leading/trailing whitespace
/// removed. Idempotent.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_whitespace() {
        assert_eq!(
            normalize("  Senior\tRust   Engineer\n\n"),
            "senior rust engineer"
        );
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Experience: Built  Systems.",
            "  MIXED case\twith\ntabs ",
            "already normalized text",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }
}
