//! Position share ledger state
//!
//! Binds one external margin position to one SPL share mint and keeps
//! `total_shares` in lockstep with the position size reported by the
//! margin protocol's lifecycle callbacks.

use anchor_lang::prelude::*;

use crate::error::PositionTokenError;
use crate::state::AllowListRegistry;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const SHARE_MINT_SEED: &[u8] = b"shares";

/// Invalid sentinel for the external position identifier
pub const ZERO_POSITION_ID: [u8; 32] = [0u8; 32];

/// Side of the tokenized margin position.
///
/// Metadata only: both sides share the same accounting rules, so a tag
/// replaces the long/short contract split of older designs.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionVariant {
    Long,
    Short,
}

#[account]
#[derive(InitSpace)]
pub struct PositionShareLedger {
    /// External position identifier; fixed for the ledger's lifetime
    pub position_id: [u8; 32],
    pub variant: PositionVariant,
    /// Only signer accepted for lifecycle callbacks
    pub margin_protocol: Pubkey,
    /// Only signer accepted for `set_cap`
    pub owner: Pubkey,
    /// Credited with the first mint on custody receipt
    pub initial_holder: Pubkey,
    /// SPL mint mirroring `total_shares`; authority is this ledger PDA
    pub share_mint: Pubkey,
    /// Outstanding shares; authoritative for all cap math
    pub total_shares: u64,
    /// Mint-time ceiling; never consulted on burns
    pub cap: u64,
    /// True once the first custody receipt has minted
    pub initialized: bool,
    /// Canonical bump, stored so mint CPIs can sign without recomputation
    pub bump: u8,
    pub allow_list: AllowListRegistry,
}

impl PositionShareLedger {
    /// Constructor-time check: the zero id is the invalid sentinel and
    /// can never bind a ledger.
    pub fn validate_position_id(position_id: &[u8; 32]) -> Result<()> {
        require!(
            *position_id != ZERO_POSITION_ID,
            PositionTokenError::InvalidConfiguration
        );
        Ok(())
    }

    /// First mint, triggered by the protocol handing the position over.
    /// All-or-nothing: a cap violation leaves supply at zero and the
    /// ledger uninitialized so the hand-off itself fails.
    pub fn record_custody(&mut self, reported_size: u64) -> Result<()> {
        require!(!self.initialized, PositionTokenError::AlreadyInitialized);
        require!(reported_size <= self.cap, PositionTokenError::CapExceeded);

        self.total_shares = reported_size;
        self.initialized = true;
        Ok(())
    }

    /// Mint accompanying a protocol-driven position increase.
    pub fn record_increase(&mut self, added_size: u64) -> Result<()> {
        require!(self.initialized, PositionTokenError::NotInitialized);

        let new_total = self
            .total_shares
            .checked_add(added_size)
            .ok_or(PositionTokenError::MathOverflow)?;
        require!(new_total <= self.cap, PositionTokenError::CapExceeded);

        self.total_shares = new_total;
        Ok(())
    }

    /// Burn accompanying a position decrease or close. Deliberately not
    /// cap-checked: supply may rest above a cap that was lowered after
    /// mint, and closing must never be blockable by that cap.
    pub fn record_decrease(&mut self, removed_size: u64) -> Result<()> {
        require!(self.initialized, PositionTokenError::NotInitialized);
        require!(
            removed_size <= self.total_shares,
            PositionTokenError::InsufficientShares
        );

        self.total_shares -= removed_size;
        Ok(())
    }

    /// Replace the cap unconditionally. Setting it below `total_shares`
    /// only blocks future mints; it never forces a burn.
    pub fn update_cap(&mut self, new_cap: u64) {
        self.cap = new_cap;
    }

    pub fn current_cap(&self) -> u64 {
        self.cap
    }

    /// Shares still mintable before hitting the cap
    pub fn remaining_capacity(&self) -> u64 {
        self.cap.saturating_sub(self.total_shares)
    }

    pub fn is_trusted_recipient(&self, address: &Pubkey) -> bool {
        self.allow_list.is_trusted_recipient(address)
    }

    pub fn is_trusted_withdrawer(&self, address: &Pubkey) -> bool {
        self.allow_list.is_trusted_withdrawer(address)
    }

    pub fn can_late_close(&self, address: &Pubkey) -> bool {
        self.allow_list.can_late_close(address)
    }
}
