mod args;
mod domain;
mod label;
pub mod settings;
mod tld;
mod types;


pub use types::{DomainError, NormalizedDomain, UnknownCodeError, ValidationReport};

use args::check_args;
use domain::{check_domain_length, split_labels};
use label::check_labels;
use tld::check_tld;

/// Liste ordonnée des violations pour `domain` ; vide si le domaine est valide.
///
/// Ordre : argument, longueur totale, séquence de labels, labels, TLD.
/// Aucune déduplication : un même label peut produire plusieurs codes.
pub fn errors(domain: Option<&str>) -> Vec<DomainError> {
    let args = check_args(domain);
    let Some(input) = domain.map(str::trim).filter(|_| args.is_empty()) else {
        #[cfg(feature = "with-tracing")]
        tracing::debug!(?domain, "domain rejected: absent or blank");
        return args;
    };

    let labels = split_labels(input);
    let mut errs = check_domain_length(input);
    errs.extend(check_labels(input, &labels));
    if let Some(tld) = labels.last() {
        errs.extend(check_tld(tld));
    }

    #[cfg(feature = "with-tracing")]
    tracing::debug!(
        domain = input,
        levels = labels.len(),
        violations = errs.len(),
        "domain checked"
    );
    errs
}

/// `true` si aucune violation n'est relevée.
pub fn is_valid(domain: Option<&str>) -> bool {
    errors(domain).is_empty()
}

/// Rapport simplifié : `ok` et les messages des violations, dans l'ordre.
pub fn validate_domain(domain: &str) -> ValidationReport {
    let reasons: Vec<String> = errors(Some(domain))
        .into_iter()
        .map(DomainError::message)
        .collect();
    ValidationReport {
        ok: reasons.is_empty(),
        reasons,
    }
}

/// Valide et renvoie une *sortie normalisée* (domaine trimé en minuscules,
/// labels, TLD, codes et messages).
pub fn normalize_domain(domain: Option<&str>) -> NormalizedDomain {
    let errs = errors(domain);
    let trimmed = domain.map(str::trim).unwrap_or_default();

    let labels = if trimmed.is_empty() {
        Vec::new()
    } else {
        split_labels(trimmed)
    };
    let tld = labels.last().cloned();

    NormalizedDomain {
        original: domain.map(str::to_string),
        domain: trimmed.to_ascii_lowercase(),
        labels,
        tld,
        valid: errs.is_empty(),
        reasons: errs.iter().map(|e| e.message()).collect(),
        errors: errs,
    }
}
