pub mod cap_properties;

use anchor_lang::prelude::*;

use crate::error::PositionTokenError;
use crate::state::{AllowListRegistry, PositionShareLedger, PositionVariant};

/// Fresh uninitialized ledger with the given cap and empty trust sets
pub fn ledger_with_cap(cap: u64) -> PositionShareLedger {
    ledger_with(cap, AllowListRegistry::new(vec![], vec![], Pubkey::default()).unwrap())
}

pub fn ledger_with(cap: u64, allow_list: AllowListRegistry) -> PositionShareLedger {
    PositionShareLedger {
        position_id: [7u8; 32],
        variant: PositionVariant::Long,
        margin_protocol: Pubkey::new_unique(),
        owner: Pubkey::new_unique(),
        initial_holder: Pubkey::new_unique(),
        share_mint: Pubkey::new_unique(),
        total_shares: 0,
        cap,
        initialized: false,
        bump: 255,
        allow_list,
    }
}

#[track_caller]
pub fn assert_ledger_err(res: Result<()>, expected: PositionTokenError) {
    let actual = res.expect_err("expected the operation to fail");
    let expected: Error = expected.into();
    assert_eq!(error_name(actual), error_name(expected));
}

fn error_name(err: Error) -> String {
    match err {
        Error::AnchorError(e) => e.error_name.clone(),
        Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
    }
}
