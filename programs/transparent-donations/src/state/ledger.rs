use anchor_lang::prelude::*;

use crate::state::DonorRecord;
use crate::transfer::ValueTransfer;

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const VAULT_SEED: &[u8] = b"vault";

/// Custodial ledger: who may pay out, who gets paid, and how much has moved.
///
/// The custodial balance is never stored; it is always
/// `total_donations_received - total_disbursed`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct DonationLedger {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub total_donations_received: u64,
    pub total_disbursed: u64,
    pub created_at: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Space for DonationLedger {
    const INIT_SPACE: usize = 8      // Discriminator
        + 32    // owner: Pubkey
        + 32    // beneficiary: Pubkey
        + 8     // total_donations_received: u64
        + 8     // total_disbursed: u64
        + 8     // created_at: i64
        + 1     // bump: u8
        + 1;    // vault_bump: u8
}

impl DonationLedger {
    pub fn open(
        owner: Pubkey,
        beneficiary: Pubkey,
        created_at: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Result<Self> {
        require!(
            beneficiary != Pubkey::default() && beneficiary != owner,
            DonationError::InvalidBeneficiary
        );

        Ok(Self {
            owner,
            beneficiary,
            total_donations_received: 0,
            total_disbursed: 0,
            created_at,
            bump,
            vault_bump,
        })
    }

    pub fn custodial_balance(&self) -> Result<u64> {
        let balance = self
            .total_donations_received
            .checked_sub(self.total_disbursed)
            .ok_or(DonationError::MathOverflow)?;
        Ok(balance)
    }

    /// Pull `amount` from the record's donor into `custody` and credit both
    /// the ledger total and the donor's running total.
    ///
    /// Counters are computed before the transfer and committed only after it
    /// succeeds, so a failed transfer leaves `self` and `record` untouched.
    pub fn donate<T: ValueTransfer>(
        &mut self,
        record: &mut DonorRecord,
        custody: Pubkey,
        amount: u64,
        bank: &mut T,
    ) -> Result<()> {
        require!(amount > 0, DonationError::InvalidAmount);

        let total_received = self
            .total_donations_received
            .checked_add(amount)
            .ok_or(DonationError::MathOverflow)?;
        let donor_total = record
            .total_donated
            .checked_add(amount)
            .ok_or(DonationError::MathOverflow)?;

        bank.transfer(amount, record.donor, custody)?;

        self.total_donations_received = total_received;
        record.total_donated = donor_total;
        Ok(())
    }

    /// Pay `amount` out of `custody` to the stored beneficiary. Only the owner
    /// may trigger this; the destination is never caller-supplied.
    pub fn withdraw<T: ValueTransfer>(
        &mut self,
        caller: Pubkey,
        custody: Pubkey,
        amount: u64,
        bank: &mut T,
    ) -> Result<()> {
        require_keys_eq!(caller, self.owner, DonationError::Unauthorized);
        require!(amount > 0, DonationError::InvalidAmount);

        let available = self.custodial_balance()?;
        require!(amount <= available, DonationError::InsufficientFunds);

        let total_disbursed = self
            .total_disbursed
            .checked_add(amount)
            .ok_or(DonationError::MathOverflow)?;

        bank.transfer(amount, custody, self.beneficiary)?;

        self.total_disbursed = total_disbursed;
        Ok(())
    }
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub vault: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DonationReceived {
    pub ledger: Pubkey,
    pub donor: Pubkey,
    pub amount: u64,
    pub donor_total: u64,
    pub total_donations_received: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundsDisbursed {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_disbursed: u64,
    pub remaining_balance: u64,
    pub timestamp: i64,
}

// Clients see these as 6000 + discriminant. Anchor's own framework errors
// also start at 100, so the codes only stay distinct above the default offset.
#[error_code]
pub enum DonationError {
    #[msg("Only the ledger owner may withdraw")]
    Unauthorized = 100,

    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    #[msg("Math overflow error")]
    MathOverflow,

    #[msg("Insufficient custodial funds")]
    InsufficientFunds,

    #[msg("Beneficiary must be set and differ from the owner")]
    InvalidBeneficiary,

    #[msg("Transfer account was not supplied")]
    UnknownTransferParty,
}
