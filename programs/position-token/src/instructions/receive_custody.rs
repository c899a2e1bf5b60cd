use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    error::PositionTokenError,
    events::CustodyReceived,
    state::{PositionShareLedger, LEDGER_SEED},
};

#[derive(Accounts)]
pub struct ReceiveCustody<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.position_id.as_ref()],
        bump = ledger.bump,
        has_one = margin_protocol @ PositionTokenError::Unauthorized,
        has_one = share_mint,
        has_one = initial_holder,
    )]
    pub ledger: Account<'info, PositionShareLedger>,

    #[account(mut)]
    pub share_mint: Account<'info, Mint>,

    /// First token holder, credited with the full reported size
    /// CHECK: validated against the ledger via has_one
    pub initial_holder: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = margin_protocol,
        associated_token::mint = share_mint,
        associated_token::authority = initial_holder,
    )]
    pub initial_holder_share_account: Account<'info, TokenAccount>,

    /// Margin protocol handing the position over
    #[account(mut)]
    pub margin_protocol: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Accept custody of the position and mint the first shares.
///
/// Invoked exactly once per ledger. A cap violation rejects the whole
/// hand-off so the protocol sees a failed transfer, never a partial one.
pub fn receive_custody(ctx: Context<ReceiveCustody>, reported_size: u64) -> Result<()> {
    let position_id = ctx.accounts.ledger.position_id;
    let bump = ctx.accounts.ledger.bump;

    ctx.accounts.ledger.record_custody(reported_size)?;

    let seeds = &[LEDGER_SEED, position_id.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.share_mint.to_account_info(),
        to: ctx.accounts.initial_holder_share_account.to_account_info(),
        authority: ctx.accounts.ledger.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::mint_to(cpi_ctx, reported_size)?;

    msg!(
        "Received custody of position, minted {} shares to {}",
        reported_size,
        ctx.accounts.initial_holder.key()
    );

    emit!(CustodyReceived {
        position_id,
        reported_size,
        initial_holder: ctx.accounts.initial_holder.key(),
    });

    Ok(())
}
