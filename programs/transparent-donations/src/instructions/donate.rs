use anchor_lang::prelude::*;

use crate::state::{
    DonationLedger, DonationReceived, DonorRecord, DONOR_SEED, LEDGER_SEED, VAULT_SEED,
};
use crate::transfer::SystemTransfer;

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(mut)]
    pub donor: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.owner.as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = donor,
        space = DonorRecord::INIT_SPACE,
        seeds = [DONOR_SEED, ledger.key().as_ref(), donor.key().as_ref()],
        bump
    )]
    pub donor_record: Account<'info, DonorRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> Donate<'info> {
    pub fn donate(&mut self, amount: u64, bumps: &DonateBumps) -> Result<()> {
        let ledger_key = self.ledger.key();
        let donor = self.donor.key();
        let vault = self.vault.key();

        if self.donor_record.is_vacant() {
            self.donor_record
                .set_inner(DonorRecord::open(ledger_key, donor, bumps.donor_record));
        }

        let mut bank = SystemTransfer::new(
            self.system_program.to_account_info(),
            vec![self.donor.to_account_info(), self.vault.to_account_info()],
        );
        self.ledger
            .donate(&mut self.donor_record, vault, amount, &mut bank)?;

        emit!(DonationReceived {
            ledger: ledger_key,
            donor,
            amount,
            donor_total: self.donor_record.total_donated,
            total_donations_received: self.ledger.total_donations_received,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }
}
