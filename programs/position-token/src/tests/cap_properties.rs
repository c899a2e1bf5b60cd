//! Property tests for the cap asymmetry: mints are all-or-nothing against
//! the cap, burns never consult it.

use proptest::prelude::*;

use crate::tests::ledger_with_cap;

/// Ledger already holding `supply` shares under `cap`, regardless of
/// whether that state would still pass the mint-time cap check
fn initialized_ledger(supply: u64, cap: u64) -> crate::state::PositionShareLedger {
    let mut ledger = ledger_with_cap(cap);
    ledger.total_shares = supply;
    ledger.initialized = true;
    ledger
}

proptest! {
    #[test]
    fn increase_is_all_or_nothing(
        supply in 0u64..=1_000_000,
        cap in 0u64..=1_000_000,
        added in 0u64..=1_000_000,
    ) {
        let mut ledger = initialized_ledger(supply, cap);

        let res = ledger.record_increase(added);

        if supply + added <= cap {
            prop_assert!(res.is_ok());
            prop_assert_eq!(ledger.total_shares, supply + added);
        } else {
            prop_assert!(res.is_err());
            prop_assert_eq!(ledger.total_shares, supply);
        }
    }

    #[test]
    fn decrease_never_consults_the_cap(
        supply in 0u64..=1_000_000,
        cap in 0u64..=1_000_000,
        removed in 0u64..=1_000_000,
    ) {
        let mut ledger = initialized_ledger(supply, cap);

        let res = ledger.record_decrease(removed);

        if removed <= supply {
            prop_assert!(res.is_ok());
            prop_assert_eq!(ledger.total_shares, supply - removed);
        } else {
            prop_assert!(res.is_err());
            prop_assert_eq!(ledger.total_shares, supply);
        }
    }

    #[test]
    fn cap_update_preserves_supply(
        supply in 0u64..=1_000_000,
        old_cap in 0u64..=1_000_000,
        new_cap in 0u64..=1_000_000,
    ) {
        let mut ledger = initialized_ledger(supply, old_cap);

        ledger.update_cap(new_cap);

        prop_assert_eq!(ledger.total_shares, supply);
        prop_assert_eq!(ledger.current_cap(), new_cap);
    }

    #[test]
    fn custody_leaves_supply_zero_on_failure(
        cap in 0u64..=1_000_000,
        reported in 0u64..=1_000_000,
    ) {
        let mut ledger = ledger_with_cap(cap);

        let res = ledger.record_custody(reported);

        if reported <= cap {
            prop_assert!(res.is_ok());
            prop_assert_eq!(ledger.total_shares, reported);
            prop_assert!(ledger.initialized);
        } else {
            prop_assert!(res.is_err());
            prop_assert_eq!(ledger.total_shares, 0);
            prop_assert!(!ledger.initialized);
        }
    }
}
