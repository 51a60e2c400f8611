use super::settings::MAX_DOMAIN_LENGTH;
use super::types::DomainError;

/// Longueur totale du domaine trimé, en caractères.
pub(crate) fn check_domain_length(domain: &str) -> Vec<DomainError> {
    if domain.chars().count() > MAX_DOMAIN_LENGTH {
        vec![DomainError::MaxDomainSize]
    } else {
        Vec::new()
    }
}

/// Passe en minuscules puis découpe sur '.', en gardant les labels vides
/// (points consécutifs, initial ou final).
pub(crate) fn split_labels(domain: &str) -> Vec<String> {
    domain
        .to_ascii_lowercase()
        .split('.')
        .map(str::to_string)
        .collect()
}
