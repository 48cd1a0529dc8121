use anchor_lang::prelude::*;

pub const DONOR_SEED: &[u8] = b"donor";

#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct DonorRecord {
    pub ledger: Pubkey,     // Parent ledger
    pub donor: Pubkey,      // Contributor's wallet
    pub total_donated: u64, // Cumulative, never decreases
    pub bump: u8,           // PDA bump
}

impl Space for DonorRecord {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // ledger: Pubkey
        + 32    // donor: Pubkey
        + 8     // total_donated: u64
        + 1;    // bump: u8
}

impl DonorRecord {
    /// Fresh record for a donor's first contribution.
    pub fn open(ledger: Pubkey, donor: Pubkey, bump: u8) -> Self {
        Self {
            ledger,
            donor,
            total_donated: 0,
            bump,
        }
    }

    /// `init_if_needed` hands back a zeroed account on first use.
    pub fn is_vacant(&self) -> bool {
        self.donor == Pubkey::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_record_is_vacant_until_opened() {
        let zeroed = DonorRecord::open(Pubkey::default(), Pubkey::default(), 0);
        assert!(zeroed.is_vacant());

        let opened = DonorRecord::open(Pubkey::new_unique(), Pubkey::new_unique(), 254);
        assert!(!opened.is_vacant());
        assert_eq!(opened.total_donated, 0);
    }
}
