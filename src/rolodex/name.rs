use crate::error::{Result, RolodexError};

/// Uppercases the first character of a name and leaves the rest untouched.
///
/// `"dino"` becomes `"Dino"`, `"mcDonald"` stays `"McDonald"`. The empty
/// string is rejected with `EmptyName` rather than letting the
/// first-character access fall over. Uppercasing is Unicode-aware and may
/// expand a character (`"ß"` → `"SS"`).
pub fn capitalize_first(name: &str) -> Result<String> {
    let mut chars = name.chars();
    let first = chars.next().ok_or(RolodexError::EmptyName)?;
    Ok(first.to_uppercase().chain(chars).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_only_the_first_letter() {
        assert_eq!(capitalize_first("dino").unwrap(), "Dino");
        assert_eq!(capitalize_first("mcDonald").unwrap(), "McDonald");
    }

    #[test]
    fn leaves_already_capitalized_names_alone() {
        assert_eq!(capitalize_first("Anna").unwrap(), "Anna");
    }

    #[test]
    fn handles_single_characters_and_unicode() {
        assert_eq!(capitalize_first("q").unwrap(), "Q");
        assert_eq!(capitalize_first("élise").unwrap(), "Élise");
        assert_eq!(capitalize_first("ßler").unwrap(), "SSler");
    }

    #[test]
    fn rejects_the_empty_string() {
        assert!(matches!(
            capitalize_first(""),
            Err(RolodexError::EmptyName)
        ));
    }
}
