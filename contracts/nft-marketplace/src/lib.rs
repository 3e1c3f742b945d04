//! It exposes functions for listing NFTs, buying listed NFTs and
//! withdrawing the accumulated sale revenue.
//!
//! # Description
//! The marketplace never takes custody of tokens. A seller keeps the token
//! and only enables the marketplace as a CIS2 operator on the token
//! contract, so that the token can be transferred to a buyer once the asking
//! price is paid. Sale revenue is not pushed to sellers either: every
//! successful buy credits an internal per-seller balance which the seller
//! withdraws with `withdrawProceeds`.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod events;
mod external;
mod nft;
mod state;
