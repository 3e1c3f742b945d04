use commons::{Authority, CustomContractError, Token};
use concordium_std::*;

/// Data of an active listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SchemaType)]
pub struct Listing {
    /// Account that listed the token and owns it.
    pub seller: AccountAddress,
    /// Asking price.
    pub price: Amount,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// Contract maintainance rights.
    pub authority: Authority<S>,
    /// Active listings.
    pub listings: StateMap<Token, Listing, S>,
    /// Accumulated sale revenue per seller, withdrawable on demand.
    pub proceeds: StateMap<AccountAddress, Amount, S>,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no listings and no proceeds.
    pub fn new(state_builder: &mut StateBuilder<S>, origin: AccountAddress) -> Self {
        State {
            authority: Authority::new(state_builder, Address::Account(origin)),
            listings: state_builder.new_map(),
            proceeds: state_builder.new_map(),
        }
    }

    /// Insert a new listing. The caller is responsible for rejecting
    /// duplicates beforehand.
    pub fn list(&mut self, token: Token, listing: Listing) {
        self.listings.insert(token, listing);
    }

    /// Look up the listing of a token.
    pub fn listing(&self, token: &Token) -> Option<Listing> {
        self.listings.get(token).map(|listing| listing.clone())
    }

    /// Remove a listing and fail with `NotListed` if the token has none.
    /// Returns the removed listing.
    pub fn unlist(&mut self, token: &Token) -> Result<Listing, CustomContractError> {
        self.listings
            .remove_and_get(token)
            .ok_or(CustomContractError::NotListed)
    }

    /// Change the asking price of an existing listing.
    ///
    /// Fails with `NotListed` if the token has no listing, `NotOwner` if
    /// `seller` did not create it and `InvalidPrice` on a zero price.
    pub fn update_price(
        &mut self,
        token: &Token,
        seller: &AccountAddress,
        new_price: Amount,
    ) -> Result<(), CustomContractError> {
        let mut listing = self
            .listings
            .get_mut(token)
            .ok_or(CustomContractError::NotListed)?;
        ensure!(listing.seller == *seller, CustomContractError::NotOwner);
        ensure!(
            new_price > Amount::zero(),
            CustomContractError::InvalidPrice
        );
        listing.price = new_price;
        Ok(())
    }

    /// Credit sale revenue to the seller's withdrawable balance.
    pub fn credit(&mut self, seller: AccountAddress, amount: Amount) {
        let updated = self
            .proceeds
            .get(&seller)
            .map(|balance| *balance + amount)
            .unwrap_or(amount);
        self.proceeds.insert(seller, updated);
    }

    /// Take the entire proceeds balance of an account, failing with
    /// `NoProceeds` when there is nothing to withdraw.
    pub fn take_proceeds(&mut self, account: &AccountAddress) -> Result<Amount, CustomContractError> {
        let amount = self
            .proceeds
            .remove_and_get(account)
            .ok_or(CustomContractError::NoProceeds)?;
        ensure!(amount > Amount::zero(), CustomContractError::NoProceeds);
        Ok(amount)
    }

    /// Current proceeds balance of an account.
    pub fn proceeds(&self, account: &AccountAddress) -> Amount {
        self.proceeds
            .get(account)
            .map(|amount| *amount)
            .unwrap_or_else(Amount::zero)
    }
}
