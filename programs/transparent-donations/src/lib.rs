#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod instructions;
pub mod state;
pub mod transfer;

use crate::instructions::*;

declare_id!("81Zvsh4c3TsvaMmarHKhwipPiYWBYiXtr1Gb7WUSSNRN");

#[program]
pub mod transparent_donations {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, beneficiary: Pubkey) -> Result<()> {
        ctx.accounts.initialize(beneficiary, &ctx.bumps)?;
        Ok(())
    }

    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        ctx.accounts.donate(amount, &ctx.bumps)?;
        Ok(())
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)?;
        Ok(())
    }

    pub fn get_total_donations_received(ctx: Context<LedgerView>) -> Result<u64> {
        Ok(ctx.accounts.ledger.total_donations_received)
    }

    pub fn get_total_disbursed(ctx: Context<LedgerView>) -> Result<u64> {
        Ok(ctx.accounts.ledger.total_disbursed)
    }

    pub fn get_custodial_balance(ctx: Context<LedgerView>) -> Result<u64> {
        ctx.accounts.ledger.custodial_balance()
    }

    pub fn get_donation_by_address(ctx: Context<DonationLookup>, _donor: Pubkey) -> Result<u64> {
        ctx.accounts.donation_by_address()
    }
}
