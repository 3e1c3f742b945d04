use commons::{
    ContractTokenId, ITEM_BOUGHT_TAG, ITEM_LISTED_TAG, LISTING_CANCELLED_TAG,
    PROCEEDS_WITHDRAWN_TAG,
};
use concordium_std::*;

/// Token listing event data. Also logged when a listing is repriced.
#[derive(Debug, Serial)]
pub struct ItemListedEvent<'a> {
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// Account selling the token.
    pub seller: &'a AccountAddress,
    /// Asking price.
    pub price: Amount,
}

/// Token sale event data.
#[derive(Debug, Serial)]
pub struct ItemBoughtEvent<'a> {
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// Account that listed the token.
    pub seller: &'a AccountAddress,
    /// New token owner.
    pub buyer: &'a AccountAddress,
    /// Asking price at the time of sale.
    pub price: Amount,
}

/// Listing cancellation event data.
#[derive(Debug, Serial)]
pub struct ListingCancelledEvent<'a> {
    /// Token contract address.
    pub contract: &'a ContractAddress,
    /// Token identifier.
    pub id: &'a ContractTokenId,
    /// Account that listed the token.
    pub seller: &'a AccountAddress,
}

/// Proceeds withdrawal event data.
#[derive(Debug, Serial)]
pub struct ProceedsWithdrawnEvent<'a> {
    /// Account withdrawing its sale revenue.
    pub account: &'a AccountAddress,
    /// Withdrawn amount.
    pub amount: Amount,
}

/// Tagged custom event to be serialized for the event log.
#[derive(Debug)]
pub enum MarketplaceEvent<'a> {
    /// Token was listed or repriced.
    Listed(ItemListedEvent<'a>),
    /// Listed token was sold.
    Bought(ItemBoughtEvent<'a>),
    /// Listing was cancelled by the seller.
    Cancelled(ListingCancelledEvent<'a>),
    /// Seller withdrew accumulated sale revenue.
    Withdrawn(ProceedsWithdrawnEvent<'a>),
}

impl<'a> MarketplaceEvent<'a> {
    pub fn listed(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Listed(ItemListedEvent {
            contract,
            id,
            seller,
            price,
        })
    }

    pub fn bought(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        seller: &'a AccountAddress,
        buyer: &'a AccountAddress,
        price: Amount,
    ) -> Self {
        Self::Bought(ItemBoughtEvent {
            contract,
            id,
            seller,
            buyer,
            price,
        })
    }

    pub fn cancelled(
        contract: &'a ContractAddress,
        id: &'a ContractTokenId,
        seller: &'a AccountAddress,
    ) -> Self {
        Self::Cancelled(ListingCancelledEvent {
            contract,
            id,
            seller,
        })
    }

    pub fn withdrawn(account: &'a AccountAddress, amount: Amount) -> Self {
        Self::Withdrawn(ProceedsWithdrawnEvent { account, amount })
    }
}

impl<'a> Serial for MarketplaceEvent<'a> {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketplaceEvent::Listed(event) => {
                out.write_u8(ITEM_LISTED_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::Bought(event) => {
                out.write_u8(ITEM_BOUGHT_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::Cancelled(event) => {
                out.write_u8(LISTING_CANCELLED_TAG)?;
                event.serial(out)
            }
            MarketplaceEvent::Withdrawn(event) => {
                out.write_u8(PROCEEDS_WITHDRAWN_TAG)?;
                event.serial(out)
            }
        }
    }
}
