use commons::Token;
use concordium_std::*;

/// Parameter for the `listItem` function.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct ListItemParams {
    /// Token to put up for sale.
    pub token: Token,
    /// Asking price.
    pub price: Amount,
}

/// Parameter for the `updateListing` function.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct UpdateListingParams {
    /// Listed token to reprice.
    pub token: Token,
    /// New asking price.
    pub new_price: Amount,
}
