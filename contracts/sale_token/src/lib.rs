#![no_std]

mod config;
mod events;
mod guard;
mod ledger;
mod sale;
mod settlement;
mod storage;
mod validation;
mod voting;

pub mod types;

pub mod hardened;
pub mod token;
pub mod transferable;
pub mod vulnerable;

pub use hardened::{HardenedSaleToken, HardenedSaleTokenClient};
pub use token::{SaleToken, SaleTokenClient};
pub use transferable::{TransferableSaleToken, TransferableSaleTokenClient};
pub use types::{OpenVotePolicy, TokenError, TransferPolicy, VotingInfo};
pub use vulnerable::{VulnerableSaleToken, VulnerableSaleTokenClient};
