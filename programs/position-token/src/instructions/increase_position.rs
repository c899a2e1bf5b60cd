use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::{
    error::PositionTokenError,
    events::PositionIncreased,
    state::{PositionShareLedger, LEDGER_SEED},
};

#[derive(Accounts)]
pub struct IncreasePosition<'info> {
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

    /// The ledger's own share balance. Increases credit the ledger
    /// itself: it is the registered position owner from the protocol's
    /// perspective
    #[account(
        init_if_needed,
        payer = margin_protocol,
        associated_token::mint = share_mint,
        associated_token::authority = ledger,
    )]
    pub ledger_share_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub margin_protocol: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Mint shares for a protocol-driven position increase.
///
/// All-or-nothing: a cap violation aborts here, which in turn fails the
/// protocol's position-size change that triggered the callback.
pub fn increase_position(
    ctx: Context<IncreasePosition>,
    added_size: u64,
    acting_trader: Pubkey,
) -> Result<()> {
    let position_id = ctx.accounts.ledger.position_id;
    let bump = ctx.accounts.ledger.bump;

    ctx.accounts.ledger.record_increase(added_size)?;

    let seeds = &[LEDGER_SEED, position_id.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.share_mint.to_account_info(),
        to: ctx.accounts.ledger_share_account.to_account_info(),
        authority: ctx.accounts.ledger.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token::mint_to(cpi_ctx, added_size)?;

    emit!(PositionIncreased {
        position_id,
        added_size,
        acting_trader,
        total_shares: ctx.accounts.ledger.total_shares,
    });

    Ok(())
}
