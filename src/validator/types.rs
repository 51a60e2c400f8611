use std::str::FromStr;

use phf::phf_map;
use thiserror::Error;

/// Violation codes. `Display` renders the fixed human-readable message,
/// `code()` the stable snake_case name.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "snake_case"))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainError {
    #[error("Zero-length domain name")]
    ZeroSize,
    #[error("Maximum domain length of 253 exceeded")]
    MaxDomainSize,
    #[error("Maximum domain level limit of 127 exceeded")]
    MaxLevelSize,
    #[error("Minimum domain level limit of 2 not achieved")]
    MinLevelSize,
    #[error("No domain name may start with a period")]
    IllegalStart,
    #[error("Maximum domain label length of 63 exceeded")]
    MaxLabelSize,
    #[error("No domain label may begin with a dash")]
    LabelDashBegin,
    #[error("No domain label may end with a dash")]
    LabelDashEnd,
    #[error("Domain label contains an illegal character")]
    IllegalChars,
    #[error("The top-level domain (TLD) cannot be numerical")]
    TopNumerical,
    #[error("The top-level domain (TLD) must only contain a-z 0-9 and -")]
    TopIllegalChars,
    #[error("Malformed TLD: Could not possibly match any valid TLD")]
    BogusTld,
}

const CODES: phf::Map<&'static str, DomainError> = phf_map! {
    "zero_size" => DomainError::ZeroSize,
    "max_domain_size" => DomainError::MaxDomainSize,
    "max_level_size" => DomainError::MaxLevelSize,
    "min_level_size" => DomainError::MinLevelSize,
    "illegal_start" => DomainError::IllegalStart,
    "max_label_size" => DomainError::MaxLabelSize,
    "label_dash_begin" => DomainError::LabelDashBegin,
    "label_dash_end" => DomainError::LabelDashEnd,
    "illegal_chars" => DomainError::IllegalChars,
    "top_numerical" => DomainError::TopNumerical,
    "top_illegal_chars" => DomainError::TopIllegalChars,
    "bogus_tld" => DomainError::BogusTld,
};

impl DomainError {
    /// Registry order, matching the order of the checks in the pipeline.
    pub const ALL: [DomainError; 12] = [
        DomainError::ZeroSize,
        DomainError::MaxDomainSize,
        DomainError::MaxLevelSize,
        DomainError::MinLevelSize,
        DomainError::IllegalStart,
        DomainError::MaxLabelSize,
        DomainError::LabelDashBegin,
        DomainError::LabelDashEnd,
        DomainError::IllegalChars,
        DomainError::TopNumerical,
        DomainError::TopIllegalChars,
        DomainError::BogusTld,
    ];

    /// Nom stable du code, tel qu'exposé en JSON/CSV (`zero_size`, ...).
    pub fn code(self) -> &'static str {
        match self {
            DomainError::ZeroSize => "zero_size",
            DomainError::MaxDomainSize => "max_domain_size",
            DomainError::MaxLevelSize => "max_level_size",
            DomainError::MinLevelSize => "min_level_size",
            DomainError::IllegalStart => "illegal_start",
            DomainError::MaxLabelSize => "max_label_size",
            DomainError::LabelDashBegin => "label_dash_begin",
            DomainError::LabelDashEnd => "label_dash_end",
            DomainError::IllegalChars => "illegal_chars",
            DomainError::TopNumerical => "top_numerical",
            DomainError::TopIllegalChars => "top_illegal_chars",
            DomainError::BogusTld => "bogus_tld",
        }
    }

    pub fn message(self) -> String {
        self.to_string()
    }

    /// Recherche exacte par nom de code ; pas de trim ni de changement de casse.
    pub fn from_code(code: &str) -> Option<DomainError> {
        CODES.get(code).copied()
    }
}

impl FromStr for DomainError {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DomainError::from_code(s).ok_or_else(|| UnknownCodeError(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown violation code '{0}'")]
pub struct UnknownCodeError(pub String);

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub reasons: Vec<String>,
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDomain {
    pub original: Option<String>,
    /// trimmed + lowercased, vide si l'entrée est absente/blanche
    pub domain: String,
    pub labels: Vec<String>,
    pub tld: Option<String>,
    pub valid: bool,
    pub errors: Vec<DomainError>,
    pub reasons: Vec<String>,
}
