use commons::{Authority, ContractError, ContractResult};
use concordium_cis2::*;
use concordium_std::*;
use core::ops::DerefMut;

use crate::external::{ContractTokenAmount, ContractTokenId};

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Addresses authorized to update and maintain the contract.
    pub authority: Authority<S>,
    /// Number of minted tokens. The next minted token gets this number as
    /// its ID.
    pub token_counter: u32,
    /// Owner of each minted token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// Operators for each address.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Contracts implementing related standards.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(state_builder: &mut StateBuilder<S>, origin: AccountAddress) -> Self {
        Self {
            authority: Authority::new(state_builder, Address::Account(origin)),
            token_counter: 0,
            tokens: state_builder.new_map(),
            operators: state_builder.new_map(),
            implementors: state_builder.new_map(),
        }
    }

    /// Mint the next sequential token to `owner` and return the fresh token
    /// ID.
    pub fn mint(&mut self, owner: Address) -> ContractTokenId {
        let token_id = TokenIdU32(self.token_counter);
        self.tokens.insert(token_id, owner);
        self.token_counter += 1;
        token_id
    }

    /// Owner of the given token, if it was minted.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> Option<Address> {
        self.tokens.get(token_id).map(|owner| *owner)
    }

    /// Balance of `address` for the given token: 1 for the owner, 0 for
    /// everyone else. Fails with `InvalidTokenId` for unminted tokens.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let owner = self
            .tokens
            .get(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        let balance = if *owner == *address { 1 } else { 0 };
        Ok(balance.into())
    }

    /// Move token ownership from `from` to `to`.
    ///
    /// A zero amount only requires the token to exist. An amount of 1
    /// requires `from` to be the owner; anything above 1 can never be
    /// covered by an NFT balance.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: &Address,
    ) -> ContractResult<()> {
        let mut owner = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;
        if amount == 0.into() {
            return Ok(());
        }
        ensure!(amount == 1.into(), ContractError::InsufficientFunds);
        ensure!(*owner == *from, ContractError::InsufficientFunds);
        *owner = *to;
        Ok(())
    }

    /// Add a new operator for the given address.
    ///
    /// Succeeds even if `operator` already is an operator for `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Remove an operator for the given address.
    ///
    /// Succeeds even if `operator` is _not_ an operator for `owner`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, owner: &Address, address: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        contracts: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, contracts);
    }

    /// Check support for the specified standard.
    pub fn have_implementors(&self, id: &StandardIdentifierOwned) -> SupportResult {
        if let Some(addresses) = self.implementors.get(id) {
            SupportResult::SupportBy(addresses.to_vec())
        } else {
            SupportResult::NoSupport
        }
    }
}
