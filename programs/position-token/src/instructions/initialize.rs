use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{
    events::LedgerInitialized,
    state::{AllowListRegistry, PositionShareLedger, PositionVariant, LEDGER_SEED, SHARE_MINT_SEED},
};

#[derive(Accounts)]
#[instruction(position_id: [u8; 32])]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + PositionShareLedger::INIT_SPACE,
        seeds = [LEDGER_SEED, position_id.as_ref()],
        bump
    )]
    pub ledger: Account<'info, PositionShareLedger>,

    /// Share mint; the ledger PDA is the only mint authority, so supply
    /// can only move through ledger instructions
    #[account(
        init,
        payer = payer,
        seeds = [SHARE_MINT_SEED, position_id.as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = ledger,
    )]
    pub share_mint: Account<'info, Mint>,

    /// Deployer; becomes the cap owner
    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[allow(clippy::too_many_arguments)]
pub fn initialize_ledger(
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
    PositionShareLedger::validate_position_id(&position_id)?;

    let allow_list =
        AllowListRegistry::new(trusted_recipients, trusted_withdrawers, trusted_late_closer)?;

    let share_mint_key = ctx.accounts.share_mint.key();
    let owner_key = ctx.accounts.payer.key();

    let ledger = &mut ctx.accounts.ledger;
    ledger.position_id = position_id;
    ledger.variant = variant;
    ledger.margin_protocol = margin_protocol;
    ledger.owner = owner_key;
    ledger.initial_holder = initial_holder;
    ledger.share_mint = share_mint_key;
    ledger.total_shares = 0;
    ledger.cap = token_cap;
    ledger.initialized = false;
    ledger.bump = ctx.bumps.ledger;
    ledger.allow_list = allow_list;

    emit!(LedgerInitialized {
        position_id,
        variant,
        owner: owner_key,
        margin_protocol,
        initial_holder,
        share_mint: share_mint_key,
        cap: token_cap,
        trusted_late_closer,
    });

    Ok(())
}
