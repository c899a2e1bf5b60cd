//! Error definitions

use anchor_lang::prelude::*;

#[error_code]
pub enum PositionTokenError {
    #[msg("Invalid ledger configuration")]
    InvalidConfiguration,

    #[msg("Ledger has already received position custody")]
    AlreadyInitialized,

    #[msg("Ledger has not yet received position custody")]
    NotInitialized,

    #[msg("Mint would raise total shares above the cap")]
    CapExceeded,

    #[msg("Burn amount exceeds outstanding shares")]
    InsufficientShares,

    #[msg("Signer is not authorized for this operation")]
    Unauthorized,

    #[msg("Math overflow")]
    MathOverflow,
}
