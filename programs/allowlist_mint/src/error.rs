use anchor_lang::prelude::*;

#[error_code]
pub enum AllowlistMintError {
    // Access control errors
    #[msg("Only operator can perform this action")]
    OnlyOperator,
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Invalid operator account")]
    InvalidOperator,

    // Phase machine errors
    #[msg("Minting is not active")]
    NotActive,
    #[msg("Setup has already completed")]
    SetupComplete,
    #[msg("Allowlist root not set")]
    RootNotSet,
    #[msg("Allowlist root already set")]
    RootAlreadySet,
    #[msg("Contributors not configured")]
    ContributorsNotConfigured,
    #[msg("Contributors already configured")]
    ContributorsAlreadyConfigured,
    #[msg("Minting has not closed yet")]
    MintingNotClosed,

    // Merkle proof errors
    #[msg("Invalid allowlist root")]
    InvalidRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Eligibility index already claimed")]
    AlreadyClaimed,
    #[msg("Only the claim beneficiary can close this record")]
    NotBeneficiary,

    // Allowlist builder errors
    #[msg("Allowlist must contain at least one entry")]
    EmptyAllowlist,
    #[msg("Entry index must match its position in the allowlist")]
    MisnumberedAllowlist,
    #[msg("Eligibility index outside the tree")]
    IndexOutOfRange,

    // Contributor ledger errors
    #[msg("Contributor shares must sum to 10000 basis points")]
    InvalidShareTotal,
    #[msg("Too many contributors, or none")]
    TooManyContributors,
    #[msg("Duplicate contributor address")]
    DuplicateContributor,
    #[msg("Not a configured contributor")]
    UnknownContributor,
    #[msg("Nothing owed to this contributor")]
    NothingOwed,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Asset mint does not match controller's asset mint")]
    AssetMintMismatch,
    #[msg("Payment mint does not match controller's payment mint")]
    PaymentMintMismatch,
}
