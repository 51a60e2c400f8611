//! Limites fixes appliquées par le validateur.

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;
pub const MAX_LEVELS: usize = 127;
pub const MIN_LEVELS: usize = 2;
pub const MAX_TLD_LENGTH: usize = 63;
pub const MIN_TLD_LENGTH: usize = 2;
