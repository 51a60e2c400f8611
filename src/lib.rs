#![forbid(unsafe_code)]
//! domaincheck_lib — validation syntaxique de noms de domaine ASCII

pub mod validator;
pub use validator::{
    DomainError,
    NormalizedDomain,
    UnknownCodeError,
    ValidationReport,
    errors,
    is_valid,
    normalize_domain,
    settings,
    validate_domain,
};
