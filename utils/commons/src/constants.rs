/// Tag for the custom ItemListed event.
pub const ITEM_LISTED_TAG: u8 = u8::MAX - 5;

/// Tag for the custom ItemBought event.
pub const ITEM_BOUGHT_TAG: u8 = u8::MAX - 6;

/// Tag for the custom ListingCancelled event.
pub const LISTING_CANCELLED_TAG: u8 = u8::MAX - 7;

/// Tag for the custom ProceedsWithdrawn event.
pub const PROCEEDS_WITHDRAWN_TAG: u8 = u8::MAX - 8;
