#![allow(deprecated)]
#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
#[cfg(test)]
mod tests;

use instructions::*;
use state::PositionVariant;

declare_id!("32CjktGnAfdqPPbEsn1BrGRs1mrMBBhD5t9rFw13RtWb");

#[program]
pub mod position_token {
    use super::*;

    /// Create the share ledger and its mint for one external position
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
        position_id: [u8; 32],
        variant: PositionVariant,
        margin_protocol: Pubkey,
        initial_holder: Pubkey,
        trusted_recipients: Vec<Pubkey>,
        trusted_withdrawers: Vec<Pubkey>,
        token_cap: u64,
        trusted_late_closer: Pubkey,
    ) -> Result<()> {
        instructions::initialize_ledger(
            ctx,
            position_id,
            variant,
            margin_protocol,
            initial_holder,
            trusted_recipients,
            trusted_withdrawers,
            token_cap,
            trusted_late_closer,
        )
    }

    /// Accept position custody from the margin protocol; first mint
    pub fn receive_custody(ctx: Context<ReceiveCustody>, reported_size: u64) -> Result<()> {
        instructions::receive_custody(ctx, reported_size)
    }

    /// Mint shares for a protocol-driven position increase
    pub fn increase_position(
        ctx: Context<IncreasePosition>,
        added_size: u64,
        acting_trader: Pubkey,
    ) -> Result<()> {
        instructions::increase_position(ctx, added_size, acting_trader)
    }

    /// Burn shares for a protocol-driven decrease or close
    pub fn decrease_position(
        ctx: Context<DecreasePosition>,
        removed_size: u64,
        recipient: Pubkey,
    ) -> Result<()> {
        instructions::decrease_position(ctx, removed_size, recipient)
    }

    /// Replace the mint ceiling; owner only
    pub fn set_cap(ctx: Context<SetCap>, new_cap: u64) -> Result<()> {
        instructions::set_cap(ctx, new_cap)
    }
}
