use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::{
    error::PositionTokenError,
    events::PositionDecreased,
    state::{PositionShareLedger, LEDGER_SEED},
};

#[derive(Accounts)]
pub struct DecreasePosition<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.position_id.as_ref()],
        bump = ledger.bump,
        has_one = margin_protocol @ PositionTokenError::Unauthorized,
        has_one = share_mint,
    )]
    pub ledger: Account<'info, PositionShareLedger>,

    #[account(mut)]
    pub share_mint: Account<'info, Mint>,

    /// Holder surrendering shares against the closed principal
    pub holder: Signer<'info>,

    #[account(
        mut,
        token::mint = share_mint,
        token::authority = holder,
    )]
    pub holder_share_account: Account<'info, TokenAccount>,

    pub margin_protocol: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Burn shares for a protocol-driven decrease or close.
///
/// Never cap-checked: the remaining supply may rest above a cap that was
/// lowered after mint, and an exit must never be blockable by that cap.
pub fn decrease_position(
    ctx: Context<DecreasePosition>,
    removed_size: u64,
    recipient: Pubkey,
) -> Result<()> {
    let position_id = ctx.accounts.ledger.position_id;

    ctx.accounts.ledger.record_decrease(removed_size)?;

    let cpi_accounts = Burn {
        mint: ctx.accounts.share_mint.to_account_info(),
        from: ctx.accounts.holder_share_account.to_account_info(),
        authority: ctx.accounts.holder.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::burn(cpi_ctx, removed_size)?;

    emit!(PositionDecreased {
        position_id,
        removed_size,
        recipient,
        total_shares: ctx.accounts.ledger.total_shares,
    });

    Ok(())
}
