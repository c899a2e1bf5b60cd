use anchor_lang::prelude::*;

use crate::state::PositionVariant;

#[event]
pub struct LedgerInitialized {
    pub position_id: [u8; 32],
    pub variant: PositionVariant,
    pub owner: Pubkey,
    pub margin_protocol: Pubkey,
    pub initial_holder: Pubkey,
    pub share_mint: Pubkey,
    pub cap: u64,
    pub trusted_late_closer: Pubkey,
}

#[event]
pub struct CustodyReceived {
    pub position_id: [u8; 32],
    pub reported_size: u64,
    pub initial_holder: Pubkey,
}

#[event]
pub struct PositionIncreased {
    pub position_id: [u8; 32],
    pub added_size: u64,
    pub acting_trader: Pubkey,
    pub total_shares: u64,
}

#[event]
pub struct PositionDecreased {
    pub position_id: [u8; 32],
    pub removed_size: u64,
    pub recipient: Pubkey,
    pub total_shares: u64,
}

#[event]
pub struct CapUpdated {
    pub position_id: [u8; 32],
    pub old_cap: u64,
    pub new_cap: u64,
    pub total_shares: u64,
}
