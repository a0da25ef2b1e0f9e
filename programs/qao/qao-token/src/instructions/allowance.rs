// Allowance Instructions
//
// approve / increase_allowance / decrease_allowance over the token
// account's single delegate. Approving a new spender replaces the old one.

use anchor_lang::{prelude::*, solana_program::program_option::COption};
use anchor_spl::token::{approve, Approve, Token, TokenAccount};

use crate::{errors::*, events::*};

#[derive(Accounts)]
pub struct ManageAllowance<'info> {
    pub owner: Signer<'info>,

    #[account(mut, token::authority = owner)]
    pub source: Account<'info, TokenAccount>,

    /// CHECK: any address may be approved as spender
    #[account(constraint = spender.key() != Pubkey::default() @ TokenError::InvalidRecipient)]
    pub spender: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> ManageAllowance<'info> {
    // Allowance currently granted to this spender
    fn current_allowance(&self) -> u64 {
        if self.source.delegate == COption::Some(self.spender.key()) {
            self.source.delegated_amount
        } else {
            0
        }
    }

    pub fn approve(&mut self, amount: u64) -> Result<()> {
        self.set_allowance(amount)
    }

    pub fn increase_allowance(&mut self, added: u64) -> Result<()> {
        let allowance = self
            .current_allowance()
            .checked_add(added)
            .ok_or(TokenError::Overflow)?;
        self.set_allowance(allowance)
    }

    pub fn decrease_allowance(&mut self, subtracted: u64) -> Result<()> {
        let allowance = self
            .current_allowance()
            .checked_sub(subtracted)
            .ok_or(TokenError::AllowanceUnderflow)?;
        self.set_allowance(allowance)
    }

    fn set_allowance(&mut self, amount: u64) -> Result<()> {
        approve(
            CpiContext::new(
                self.token_program.to_account_info(),
                Approve {
                    to: self.source.to_account_info(),
                    delegate: self.spender.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
        )?;

        emit!(AllowanceApproved {
            owner: self.owner.key(),
            spender: self.spender.key(),
            amount,
        });

        Ok(())
    }
}
