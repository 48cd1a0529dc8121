use anchor_lang::prelude::*;

use crate::state::{DonationLedger, LedgerInitialized, LEDGER_SEED, VAULT_SEED};
use crate::transfer::{SystemTransfer, ValueTransfer};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = DonationLedger::INIT_SPACE,
        seeds = [LEDGER_SEED, owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, DonationLedger>,

    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, beneficiary: Pubkey, bumps: &InitializeBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        self.ledger.set_inner(DonationLedger::open(
            self.owner.key(),
            beneficiary,
            now,
            bumps.ledger,
            bumps.vault,
        )?);

        // The vault must stay rent exempt; this reserve is never counted as custody.
        let reserve = Rent::get()?
            .minimum_balance(0)
            .saturating_sub(self.vault.lamports());
        if reserve > 0 {
            msg!("Funding vault rent reserve: {} lamports", reserve);
            let mut bank = SystemTransfer::new(
                self.system_program.to_account_info(),
                vec![self.owner.to_account_info(), self.vault.to_account_info()],
            );
            bank.transfer(reserve, self.owner.key(), self.vault.key())?;
        }

        emit!(LedgerInitialized {
            ledger: self.ledger.key(),
            owner: self.owner.key(),
            beneficiary,
            vault: self.vault.key(),
            timestamp: now,
        });
        Ok(())
    }
}
