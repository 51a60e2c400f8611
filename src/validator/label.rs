use std::sync::LazyLock;

use regex::Regex;

use super::settings::{MAX_LABEL_LENGTH, MAX_LEVELS, MIN_LEVELS};
use super::types::DomainError;

// LDH + underscore ; un label vide ne matche pas
static LABEL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("static label regex"));

/// Règles d'un label isolé (TLD compris). Les quatre vérifications sont
/// indépendantes : un label peut produire plusieurs codes.
pub(crate) fn check_label(label: &str) -> Vec<DomainError> {
    let mut errs = Vec::new();
    if label.chars().count() > MAX_LABEL_LENGTH {
        errs.push(DomainError::MaxLabelSize);
    }
    if label.starts_with('-') {
        errs.push(DomainError::LabelDashBegin);
    }
    if label.ends_with('-') {
        errs.push(DomainError::LabelDashEnd);
    }
    if !LABEL_CHARS.is_match(label) {
        errs.push(DomainError::IllegalChars);
    }
    errs
}

/// Règles sur la séquence complète, puis `check_label` sur chaque label.
/// `domain` est le domaine trimé d'origine, utilisé pour détecter le point initial.
pub(crate) fn check_labels(domain: &str, labels: &[String]) -> Vec<DomainError> {
    let mut errs = Vec::new();
    if labels.len() > MAX_LEVELS {
        errs.push(DomainError::MaxLevelSize);
    }
    if labels.len() < MIN_LEVELS {
        errs.push(DomainError::MinLevelSize);
    }
    if domain.starts_with('.') {
        errs.push(DomainError::IllegalStart);
    }
    errs.extend(labels.iter().flat_map(|label| check_label(label)));
    errs
}
