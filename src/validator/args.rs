use super::types::DomainError;

/// Vérifie que l'argument est présent et non vide une fois trimé.
pub(crate) fn check_args(domain: Option<&str>) -> Vec<DomainError> {
    match domain.map(str::trim) {
        Some(d) if !d.is_empty() => Vec::new(),
        _ => vec![DomainError::ZeroSize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn absent_or_blank() {
        assert_eq!(check_args(None), vec![DomainError::ZeroSize]);
        assert_eq!(check_args(Some("")), vec![DomainError::ZeroSize]);
        assert_eq!(check_args(Some(" \t\n ")), vec![DomainError::ZeroSize]);
    }
    #[test]
    fn present() {
        assert!(check_args(Some("  a.com\n")).is_empty());
        assert!(check_args(Some(".")).is_empty());
    }
}
