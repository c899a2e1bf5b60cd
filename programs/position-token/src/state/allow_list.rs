//! Allow-list registry
//!
//! Two trust sets plus a single late-closer address, all fixed when the
//! ledger is created. There is deliberately no mutation API: trust
//! relationships cannot be altered after deployment.

use anchor_lang::prelude::*;

use crate::error::PositionTokenError;

/// Upper bound on each trust set; keeps the ledger account a fixed size
pub const MAX_TRUSTED_ADDRESSES: usize = 8;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct AllowListRegistry {
    /// Addresses allowed to receive the position outright, bypassing
    /// normal share-transfer semantics
    #[max_len(MAX_TRUSTED_ADDRESSES)]
    pub trusted_recipients: Vec<Pubkey>,
    /// Addresses allowed to trigger early withdrawal/closing on behalf
    /// of any share-holder
    #[max_len(MAX_TRUSTED_ADDRESSES)]
    pub trusted_withdrawers: Vec<Pubkey>,
    /// Single address allowed to close after the position's validity
    /// window has elapsed
    pub trusted_late_closer: Pubkey,
}

impl AllowListRegistry {
    pub fn new(
        trusted_recipients: Vec<Pubkey>,
        trusted_withdrawers: Vec<Pubkey>,
        trusted_late_closer: Pubkey,
    ) -> Result<Self> {
        require!(
            trusted_recipients.len() <= MAX_TRUSTED_ADDRESSES
                && trusted_withdrawers.len() <= MAX_TRUSTED_ADDRESSES,
            PositionTokenError::InvalidConfiguration
        );

        Ok(Self {
            trusted_recipients,
            trusted_withdrawers,
            trusted_late_closer,
        })
    }

    pub fn is_trusted_recipient(&self, address: &Pubkey) -> bool {
        self.trusted_recipients.contains(address)
    }

    pub fn is_trusted_withdrawer(&self, address: &Pubkey) -> bool {
        self.trusted_withdrawers.contains(address)
    }

    pub fn can_late_close(&self, address: &Pubkey) -> bool {
        *address == self.trusted_late_closer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_ledger_err;

    #[test]
    fn membership_queries_are_disjoint() {
        let recipient = Pubkey::new_unique();
        let withdrawer = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let late_closer = Pubkey::new_unique();

        let registry =
            AllowListRegistry::new(vec![recipient], vec![withdrawer], late_closer).unwrap();

        assert!(registry.is_trusted_recipient(&recipient));
        assert!(!registry.is_trusted_recipient(&withdrawer));
        assert!(!registry.is_trusted_recipient(&stranger));

        assert!(!registry.is_trusted_withdrawer(&recipient));
        assert!(registry.is_trusted_withdrawer(&withdrawer));
        assert!(!registry.is_trusted_withdrawer(&stranger));
    }

    #[test]
    fn only_the_late_closer_can_late_close() {
        let late_closer = Pubkey::new_unique();
        let withdrawer = Pubkey::new_unique();

        let registry = AllowListRegistry::new(vec![], vec![withdrawer], late_closer).unwrap();

        assert!(registry.can_late_close(&late_closer));
        assert!(!registry.can_late_close(&withdrawer));
        assert!(!registry.can_late_close(&Pubkey::new_unique()));
    }

    #[test]
    fn oversized_trust_set_rejected() {
        let too_many: Vec<Pubkey> = (0..=MAX_TRUSTED_ADDRESSES)
            .map(|_| Pubkey::new_unique())
            .collect();

        let res = AllowListRegistry::new(too_many, vec![], Pubkey::new_unique());

        assert_ledger_err(res.map(|_| ()), PositionTokenError::InvalidConfiguration);
    }

    #[test]
    fn empty_trust_sets_are_legal() {
        let registry =
            AllowListRegistry::new(vec![], vec![], Pubkey::default()).unwrap();

        assert!(!registry.is_trusted_recipient(&Pubkey::new_unique()));
        assert!(!registry.is_trusted_withdrawer(&Pubkey::new_unique()));
    }
}
