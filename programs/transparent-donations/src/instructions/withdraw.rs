use anchor_lang::prelude::*;

use crate::state::{DonationLedger, FundsDisbursed, LEDGER_SEED, VAULT_SEED};
use crate::transfer::SystemTransfer;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Anyone may submit; the ledger itself rejects non-owners.
    pub caller: Signer<'info>,

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

    /// CHECK: Payout goes to `ledger.beneficiary`; any other key here fails the transfer
    #[account(mut)]
    pub beneficiary: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        let ledger_key = self.ledger.key();
        let caller = self.caller.key();
        let vault = self.vault.key();

        let vault_bump = [self.ledger.vault_bump];
        let vault_seeds: &[&[u8]] = &[VAULT_SEED, ledger_key.as_ref(), &vault_bump];
        let signer = &[vault_seeds];

        let mut bank = SystemTransfer::new(
            self.system_program.to_account_info(),
            vec![self.vault.to_account_info(), self.beneficiary.to_account_info()],
        )
        .with_signer(signer);
        self.ledger.withdraw(caller, vault, amount, &mut bank)?;

        let remaining_balance = self.ledger.custodial_balance()?;
        msg!("Disbursed {} lamports, {} remain in custody", amount, remaining_balance);

        emit!(FundsDisbursed {
            ledger: ledger_key,
            beneficiary: self.ledger.beneficiary,
            amount,
            total_disbursed: self.ledger.total_disbursed,
            remaining_balance,
            timestamp: Clock::get()?.unix_timestamp
        });
        Ok(())
    }
}
