use std::sync::LazyLock;

use regex::Regex;

use super::settings::{MAX_TLD_LENGTH, MIN_TLD_LENGTH};
use super::types::DomainError;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("static numeric regex"));
// pas d'underscore dans le TLD
static TLD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static tld regex"));

/// Règles propres au TLD, en plus de `check_label` qui s'applique aussi.
pub(crate) fn check_tld(tld: &str) -> Vec<DomainError> {
    let mut errs = Vec::new();
    if NUMERIC.is_match(tld) {
        errs.push(DomainError::TopNumerical);
    }
    if !TLD_CHARS.is_match(tld) {
        errs.push(DomainError::TopIllegalChars);
    }
    let len = tld.chars().count();
    if !(MIN_TLD_LENGTH..=MAX_TLD_LENGTH).contains(&len) {
        errs.push(DomainError::BogusTld);
    }
    errs
}
