//! Character class section - checks for uppercase, digit and symbol.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::verdict::{CharClass, RejectionReason};

/// Checks that the password contains an ASCII uppercase letter, an ASCII
/// digit and a symbol (anything outside `[A-Za-z0-9]`).
pub fn character_class_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    let missing: Vec<CharClass> = [
        (has_upper, CharClass::Uppercase),
        (has_digit, CharClass::Digit),
        (has_symbol, CharClass::Symbol),
    ]
    .into_iter()
    .filter(|(present, _)| !present)
    .map(|(_, class)| class)
    .collect();

    if !missing.is_empty() {
        return Some(RejectionReason::MissingCharacterClasses(missing));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(pwd: &str) -> Vec<CharClass> {
        let pwd = SecretString::new(pwd.to_string().into());
        match character_class_section(&pwd) {
            Some(RejectionReason::MissingCharacterClasses(classes)) => classes,
            Some(other) => panic!("Unexpected rejection: {:?}", other),
            None => Vec::new(),
        }
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        assert_eq!(missing("lowercase123!"), vec![CharClass::Uppercase]);
    }

    #[test]
    fn test_variety_section_missing_digit() {
        assert_eq!(missing("NoNumbers!"), vec![CharClass::Digit]);
    }

    #[test]
    fn test_variety_section_missing_symbol() {
        assert_eq!(missing("NoSymbol123"), vec![CharClass::Symbol]);
    }

    #[test]
    fn test_variety_section_reports_every_missing_class() {
        assert_eq!(
            missing("alllowercase1"),
            vec![CharClass::Uppercase, CharClass::Symbol]
        );
    }

    #[test]
    fn test_variety_section_non_ascii_counts_as_symbol() {
        assert!(missing("Passwort1ß").is_empty());
        assert_eq!(missing("ÄÖÜäöü12"), vec![CharClass::Uppercase]);
    }

    #[test]
    fn test_variety_section_all_classes() {
        assert!(missing("HasAll123!@#").is_empty());
    }
}
