use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer as system_transfer, Transfer};

use crate::state::DonationError;

/// Moves native value between two identities.
///
/// The ledger never holds custody itself; it decides *whether* value may move
/// and records the outcome, while an implementation of this trait performs the
/// movement. A returned error aborts the calling operation before any counter
/// is touched.
pub trait ValueTransfer {
    fn transfer(&mut self, amount: u64, from: Pubkey, to: Pubkey) -> Result<()>;
}

/// System program CPI over a fixed set of candidate accounts.
///
/// `from`/`to` are resolved by key against `parties`, so a caller that supplies
/// an account other than the one the ledger asks for gets
/// `UnknownTransferParty` instead of a payout.
pub struct SystemTransfer<'a, 'info> {
    system_program: AccountInfo<'info>,
    parties: Vec<AccountInfo<'info>>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SystemTransfer<'a, 'info> {
    pub fn new(system_program: AccountInfo<'info>, parties: Vec<AccountInfo<'info>>) -> Self {
        Self {
            system_program,
            parties,
            signer_seeds: &[],
        }
    }

    /// Sign the CPI with PDA seeds, needed when `from` is the vault.
    pub fn with_signer(mut self, signer_seeds: &'a [&'a [&'a [u8]]]) -> Self {
        self.signer_seeds = signer_seeds;
        self
    }

    fn party(&self, key: &Pubkey) -> Result<AccountInfo<'info>> {
        self.parties
            .iter()
            .find(|info| info.key == key)
            .cloned()
            .ok_or_else(|| error!(DonationError::UnknownTransferParty))
    }
}

impl ValueTransfer for SystemTransfer<'_, '_> {
    fn transfer(&mut self, amount: u64, from: Pubkey, to: Pubkey) -> Result<()> {
        let cpi_accounts = Transfer {
            from: self.party(&from)?,
            to: self.party(&to)?,
        };

        let cpi_ctx = CpiContext::new_with_signer(
            self.system_program.clone(),
            cpi_accounts,
            self.signer_seeds,
        );
        system_transfer(cpi_ctx, amount)
    }
}
