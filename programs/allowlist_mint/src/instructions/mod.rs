pub mod create_minter;
pub mod set_allowlist_root;
pub mod configure_contributors;
pub mod activate;
pub mod claim;
pub mod deposit;
pub mod withdraw;
pub mod close_minting;
pub mod withdraw_remaining;
pub mod sweep_dust;
pub mod close_claim_record;

pub use create_minter::*;
pub use set_allowlist_root::*;
pub use configure_contributors::*;
pub use activate::*;
pub use claim::*;
pub use deposit::*;
pub use withdraw::*;
pub use close_minting::*;
pub use withdraw_remaining::*;
pub use sweep_dust::*;
pub use close_claim_record::*;
