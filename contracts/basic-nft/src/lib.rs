//! A minimal NFT smart contract implementing the Concordium Token Standard
//! CIS2.
//!
//! # Description
//! Tokens are minted one at a time through the `mint` function, which assigns
//! the next sequential token ID to the caller and returns it. Ownership is
//! kept in contract state and can change hands through the standard CIS2
//! `transfer` function, either by the owner or by an operator the owner
//! enabled with `updateOperator`. The standard queries `balanceOf`,
//! `operatorOf` and `tokenMetadata` are provided along with `ownerOf` and
//! `getTokenCounter` views.
#![cfg_attr(not(feature = "std"), no_std)]

mod contract;
mod external;
mod state;
