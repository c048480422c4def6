use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for closing a claim record
 *
 * Lets a beneficiary reclaim the rent paid when its claim record was
 * created, once the mint has closed. Closed is terminal for claims, so
 * deleting the record can no longer enable a second claim on its index.
 *
 * Access Control: Only the recorded beneficiary, after the mint closes
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CloseClaimRecord<'info> {
    /// The controller the record belongs to, checked for the Closed phase
    pub controller: Account<'info, MintController>,

    /// ClaimRecord to be closed, rent returned to the beneficiary
    /// - Derived from: ["claim", controller_key, index_le_bytes]
    #[account(
        mut,
        close = beneficiary,
        seeds = [CLAIM_SEED.as_bytes(), controller.key().as_ref(), claim_record.index.to_le_bytes().as_ref()],
        bump,
        constraint = claim_record.beneficiary == beneficiary.key() @ AllowlistMintError::NotBeneficiary
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// The beneficiary who originally paid for the record
    #[account(mut)]
    pub beneficiary: Signer<'info>,
}

/**
 * Closes a claim record and returns its rent to the beneficiary
 *
 * @param ctx - The account context containing the record and beneficiary
 */
pub fn handle_close_claim_record(ctx: Context<CloseClaimRecord>) -> Result<()> {
    require!(
        ctx.accounts.controller.phase == MintPhase::Closed,
        AllowlistMintError::MintingNotClosed
    );

    emit_cpi!(ClaimRecordClosed {
        controller: ctx.accounts.controller.key(),
        beneficiary: ctx.accounts.beneficiary.key(),
        index: ctx.accounts.claim_record.index,
    });

    Ok(())
}
