use anchor_lang::prelude::*;

use crate::state::{DonationLedger, DonorRecord, DONOR_SEED, LEDGER_SEED};

#[derive(Accounts)]
pub struct LedgerView<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.owner.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,
}

#[derive(Accounts)]
#[instruction(donor: Pubkey)]
pub struct DonationLookup<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.owner.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    /// CHECK: Address pinned by seeds; an unused address means the donor never gave
    #[account(
        seeds = [DONOR_SEED, ledger.key().as_ref(), donor.as_ref()],
        bump
    )]
    pub donor_record: UncheckedAccount<'info>,
}

impl<'info> DonationLookup<'info> {
    pub fn donation_by_address(&self) -> Result<u64> {
        recorded_total(&self.donor_record.to_account_info())
    }
}

/// Cumulative total held by a donor record address, 0 while nothing lives there.
pub fn recorded_total(info: &AccountInfo) -> Result<u64> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(0);
    }

    let data = info.try_borrow_data()?;
    let record = DonorRecord::try_deserialize(&mut &data[..])?;
    Ok(record.total_donated)
}
