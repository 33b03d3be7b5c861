//! Case-insensitive collation for names and categories.
//!
//! Both fields use the same rule everywhere in the crate: ASCII letters are
//! folded to lowercase and every other byte compares by its raw value. Nothing
//! outside ASCII is folded, so `"Ä"` and `"ä"` stay distinct. Folding happens
//! during the comparison itself; no lowercase copies are built.

use std::cmp::Ordering;

/// Lexicographic comparison of the ASCII-folded bytes of `a` and `b`.
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

pub fn equals(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// True when `a` sorts strictly after `b`. The sorters only move an element
/// on this condition, which keeps equal keys in their input order.
pub fn is_after(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_ascii_case() {
        assert_eq!(compare("Motor", "motor"), Ordering::Equal);
        assert_eq!(compare("ANTENA", "antena"), Ordering::Equal);
        assert!(equals("Propulsao", "PROPULSAO"));
    }

    #[test]
    fn orders_lexicographically() {
        assert_eq!(compare("Antena", "motor"), Ordering::Less);
        assert_eq!(compare("suporte", "Controle"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare("mot", "Motor"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }

    #[test]
    fn case_fold_changes_order_against_punctuation() {
        // '_' (0x5F) sits between 'Z' (0x5A) and 'a' (0x61): folding puts
        // "Z" after "_" even though the raw bytes say otherwise.
        assert_eq!("Z".cmp("_"), Ordering::Less);
        assert_eq!(compare("Z", "_"), Ordering::Greater);
    }

    #[test]
    fn non_ascii_is_not_folded() {
        assert!(!equals("Ä", "ä"));
        assert_ne!(compare("Ä", "ä"), Ordering::Equal);
    }

    #[test]
    fn is_after_is_strict() {
        assert!(is_after("b", "A"));
        assert!(!is_after("a", "A"));
        assert!(!is_after("a", "b"));
    }
}
