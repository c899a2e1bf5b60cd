use anchor_lang::prelude::*;

use crate::{
    error::PositionTokenError,
    events::CapUpdated,
    state::{PositionShareLedger, LEDGER_SEED},
};

#[derive(Accounts)]
pub struct SetCap<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.position_id.as_ref()],
        bump = ledger.bump,
        has_one = owner @ PositionTokenError::Unauthorized,
    )]
    pub ledger: Account<'info, PositionShareLedger>,

    pub owner: Signer<'info>,
}

/// Replace the mint ceiling. May be set below the outstanding supply;
/// that only blocks future mints and never forces a burn.
pub fn set_cap(ctx: Context<SetCap>, new_cap: u64) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;

    let old_cap = ledger.current_cap();
    ledger.update_cap(new_cap);

    emit!(CapUpdated {
        position_id: ledger.position_id,
        old_cap,
        new_cap,
        total_shares: ledger.total_shares,
    });

    Ok(())
}
