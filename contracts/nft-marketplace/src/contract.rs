use commons::{AuthorityUpdateParams, AuthorityViewParams, CustomContractError, Token};
use concordium_std::*;

use crate::events::*;
use crate::external::*;
use crate::nft;
use crate::state::{Listing, State};

/// Initialize the marketplace with no listings and no proceeds.
#[init(contract = "NftMarketplace")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder, ctx.init_origin()))
}

/// Put an owned NFT up for sale.
///
/// The token stays with the seller. The marketplace only has to be enabled
/// as an operator for the seller on the token contract, so that the token
/// can be transferred once a buyer pays.
///
/// It rejects if:
/// - Fails to parse `ListItemParams` parameters.
/// - Sender is a contract.
/// - Price is zero.
/// - Token already has an active listing.
/// - Sender does not own the token.
/// - Marketplace is not an operator for the sender.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "listItem",
    parameter = "ListItemParams",
    enable_logger
)]
fn list_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = ListItemParams::deserial(&mut ctx.parameter_cursor())?;

    let seller = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    ensure!(
        params.price > Amount::zero(),
        CustomContractError::InvalidPrice.into()
    );

    ensure!(
        host.state().listing(&params.token).is_none(),
        CustomContractError::AlreadyListed.into()
    );

    // The seller must hold the token being listed.
    let balance = nft::balance_of(host, &params.token, Address::Account(seller))?;
    ensure!(balance == 1.into(), CustomContractError::NotOwner.into());

    // The marketplace must be able to transfer the token once it sells.
    let approved = nft::is_operator_of(
        host,
        &params.token,
        Address::Account(seller),
        Address::Contract(ctx.self_address()),
    )?;
    ensure!(approved, CustomContractError::NotApproved.into());

    // Log NFT list event.
    logger.log(&MarketplaceEvent::listed(
        &params.token.contract,
        &params.token.id,
        &seller,
        params.price,
    ))?;

    host.state_mut().list(
        params.token,
        Listing {
            seller,
            price: params.price,
        },
    );

    Ok(())
}

/// Buy a listed NFT by attaching at least the asking price.
///
/// The entire attached amount is credited to the seller and can be
/// withdrawn with `withdrawProceeds`. The token is transferred to the buyer
/// through the marketplace's operator rights on the token contract; a failed
/// transfer rejects the whole update, listing included.
///
/// It rejects if:
/// - Fails to parse `Token` parameters.
/// - Sender is a contract.
/// - Token is not listed.
/// - Attached amount is below the asking price.
/// - Token transfer to the buyer fails.
#[receive(
    mutable,
    payable,
    contract = "NftMarketplace",
    name = "buyItem",
    parameter = "Token",
    enable_logger
)]
fn buy_item<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let buyer = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let listing = host.state_mut().unlist(&token)?;
    ensure!(
        amount >= listing.price,
        CustomContractError::PriceTooLow.into()
    );

    // The full attached amount becomes seller revenue, overpayment included.
    host.state_mut().credit(listing.seller, amount);

    // Log NFT buy event.
    logger.log(&MarketplaceEvent::bought(
        &token.contract,
        &token.id,
        &listing.seller,
        &buyer,
        listing.price,
    ))?;

    // Move the token to the buyer.
    nft::transfer(host, &token, listing.seller, buyer)?;

    Ok(())
}

/// Take a listed NFT off the market.
///
/// It rejects if:
/// - Fails to parse `Token` parameters.
/// - Token is not listed.
/// - Sender is not the seller of the listing.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "cancelListing",
    parameter = "Token",
    enable_logger
)]
fn cancel_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;

    let listing = host.state_mut().unlist(&token)?;

    ensure_eq!(
        ctx.sender(),
        Address::Account(listing.seller),
        CustomContractError::NotOwner.into()
    );

    // Log NFT unlist event.
    logger.log(&MarketplaceEvent::cancelled(
        &token.contract,
        &token.id,
        &listing.seller,
    ))?;

    Ok(())
}

/// Change the asking price of an active listing. An update is a re-listing,
/// so the listing event is logged again with the new price.
///
/// It rejects if:
/// - Fails to parse `UpdateListingParams` parameters.
/// - Sender is a contract.
/// - Token is not listed.
/// - Sender is not the seller of the listing.
/// - New price is zero.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "updateListing",
    parameter = "UpdateListingParams",
    enable_logger
)]
fn update_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let params = UpdateListingParams::deserial(&mut ctx.parameter_cursor())?;

    let seller = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    host.state_mut()
        .update_price(&params.token, &seller, params.new_price)?;

    // Log NFT list event with the new price.
    logger.log(&MarketplaceEvent::listed(
        &params.token.contract,
        &params.token.id,
        &seller,
        params.new_price,
    ))?;

    Ok(())
}

/// Withdraw the caller's accumulated sale revenue.
///
/// The balance is cleared before the transfer is invoked, so a repeated
/// withdrawal finds nothing to take.
///
/// It rejects if:
/// - Sender is a contract.
/// - Caller has no proceeds.
/// - The payout transfer fails.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "withdrawProceeds",
    enable_logger
)]
fn withdraw_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ReceiveResult<()> {
    let account = match ctx.sender() {
        Address::Account(account) => account,
        Address::Contract(_) => bail!(CustomContractError::OnlyAccountAddress.into()),
    };

    let amount = host.state_mut().take_proceeds(&account)?;

    // Log proceeds withdrawal event.
    logger.log(&MarketplaceEvent::withdrawn(&account, amount))?;

    host.invoke_transfer(&account, amount)?;

    Ok(())
}

/// View the listing of a token, if it has one.
#[receive(
    contract = "NftMarketplace",
    name = "getListing",
    parameter = "Token",
    return_value = "Option<Listing>"
)]
fn get_listing<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Option<Listing>> {
    let token = Token::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().listing(&token))
}

/// View the withdrawable sale revenue of an account.
#[receive(
    contract = "NftMarketplace",
    name = "getProceeds",
    parameter = "AccountAddress",
    return_value = "Amount"
)]
fn get_proceeds<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    let account = AccountAddress::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().proceeds(&account))
}

/// Function to manage addresses that are allowed to maintain and modify the
/// state of the contract.
///
///  It rejects if:
///  - Fails to parse `AuthorityUpdateParams` parameters.
///  - If sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "NftMarketplace",
    name = "updateAuthority",
    parameter = "AuthorityUpdateParams"
)]
fn update_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<()> {
    let state = host.state_mut();
    let params = AuthorityUpdateParams::deserial(&mut ctx.parameter_cursor())?;
    let sender = ctx.sender();
    state.authority.handle_update(sender, params)
}

/// Function to view addresses that are allowed to maintain and modify the
/// state of the contract.
#[receive(
    contract = "NftMarketplace",
    name = "viewAuthority",
    parameter = "AuthorityViewParams",
    return_value = "Vec<Address>"
)]
fn view_authority<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<Address>> {
    let params = AuthorityViewParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().authority.handle_view(params))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use commons::{ContractBalanceOfQueryParams, ContractTokenAmount, TransferParameter};
    use concordium_cis2::*;
    use concordium_std::test_infrastructure::*;

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };
    const MARKETPLACE: ContractAddress = ContractAddress {
        index: 10,
        subindex: 0,
    };

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const SELLER: AccountAddress = AccountAddress([16; 32]);
    const BUYER: AccountAddress = AccountAddress([17; 32]);

    const PRICE: Amount = Amount::from_ccd(100);
    const NEW_PRICE: Amount = Amount::from_ccd(250);

    fn test_token() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![0, 0, 0, 0]),
        }
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);
        let mut state_builder = TestStateBuilder::new();
        let state =
            init(&ctx, &mut state_builder).expect_report("Failed during init_NftMarketplace");
        TestHost::new(state, state_builder)
    }

    /// Mock the NFT contract reporting `owner` as the holder of every token.
    fn mock_nft_owner(host: &mut TestHost<State<TestStateApi>>, owner: AccountAddress) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("balanceOf")),
            parse_and_map_mock(move |params: &ContractBalanceOfQueryParams| {
                let amounts: Vec<ContractTokenAmount> = params
                    .queries
                    .iter()
                    .map(|query| {
                        if query.address == Address::Account(owner) {
                            1.into()
                        } else {
                            0.into()
                        }
                    })
                    .collect();
                Some(BalanceOfQueryResponse::from(amounts))
            }),
        );
    }

    /// Mock the NFT contract reporting the marketplace operator approval.
    fn mock_nft_approval(host: &mut TestHost<State<TestStateApi>>, approved: bool) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("operatorOf")),
            parse_and_ok_mock::<OperatorOfQueryParams, _>(OperatorOfQueryResponse::from(vec![
                approved,
            ])),
        );
    }

    /// Mock the NFT contract accepting a single transfer from the seller to
    /// the buyer.
    fn mock_nft_transfer(
        host: &mut TestHost<State<TestStateApi>>,
        seller: AccountAddress,
        buyer: AccountAddress,
    ) {
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            parse_and_check_mock::<TransferParameter, _>(
                move |TransferParams(transfers)| {
                    transfers.len() == 1
                        && transfers[0].from == Address::Account(seller)
                        && matches!(&transfers[0].to, Receiver::Account(to) if *to == buyer)
                },
                (),
            ),
        );
    }

    fn try_list_item(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        price: Amount,
    ) -> ReceiveResult<()> {
        let params = ListItemParams {
            token: test_token(),
            price,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        list_item(&ctx, host, &mut logger)
    }

    fn try_buy_item(
        host: &mut TestHost<State<TestStateApi>>,
        sender: AccountAddress,
        amount: Amount,
    ) -> ReceiveResult<()> {
        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(sender))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        buy_item(&ctx, host, amount, &mut logger)
    }

    /// Fixture with the test token already listed by SELLER for PRICE.
    fn listed_host() -> TestHost<State<TestStateApi>> {
        let mut host = default_host();
        mock_nft_owner(&mut host, SELLER);
        mock_nft_approval(&mut host, true);
        let result = try_list_item(&mut host, SELLER, PRICE);
        claim_eq!(result, Ok(()));
        host
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.listing(&test_token()), None);
        claim_eq!(state.proceeds(&SELLER), Amount::zero());
        claim!(state.authority.has_admin_rights(&Address::Account(ADMIN)));
    }

    #[concordium_test]
    fn test_list_item() {
        let mut host = default_host();
        mock_nft_owner(&mut host, SELLER);
        mock_nft_approval(&mut host, true);

        let params = ListItemParams {
            token: test_token(),
            price: PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_self_address(MARKETPLACE)
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = list_item(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().listing(&test_token()),
            Some(Listing {
                seller: SELLER,
                price: PRICE,
            })
        );

        let token = test_token();
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::listed(
                &token.contract,
                &token.id,
                &SELLER,
                PRICE
            ))
        );
    }

    #[concordium_test]
    fn test_list_item_already_listed() {
        let mut host = listed_host();

        let result = try_list_item(&mut host, SELLER, PRICE);

        claim_eq!(result, Err(CustomContractError::AlreadyListed.into()));
    }

    #[concordium_test]
    fn test_list_item_not_owner() {
        let mut host = default_host();
        mock_nft_owner(&mut host, SELLER);
        mock_nft_approval(&mut host, true);

        let result = try_list_item(&mut host, BUYER, PRICE);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_list_item_zero_price() {
        let mut host = default_host();
        mock_nft_owner(&mut host, SELLER);
        mock_nft_approval(&mut host, true);

        let result = try_list_item(&mut host, SELLER, Amount::zero());

        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));
    }

    #[concordium_test]
    fn test_list_item_not_approved() {
        let mut host = default_host();
        mock_nft_owner(&mut host, SELLER);
        mock_nft_approval(&mut host, false);

        let result = try_list_item(&mut host, SELLER, PRICE);

        claim_eq!(result, Err(CustomContractError::NotApproved.into()));
    }

    #[concordium_test]
    fn test_get_listing() {
        let host = listed_host();

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);

        let listing = get_listing(&ctx, &host).expect_report("Query failed");

        claim_eq!(
            listing,
            Some(Listing {
                seller: SELLER,
                price: PRICE,
            })
        );
    }

    #[concordium_test]
    fn test_buy_item() {
        let mut host = listed_host();
        mock_nft_transfer(&mut host, SELLER, BUYER);

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = buy_item(&ctx, &mut host, PRICE, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().listing(&test_token()), None);
        claim_eq!(host.state().proceeds(&SELLER), PRICE);

        let token = test_token();
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::bought(
                &token.contract,
                &token.id,
                &SELLER,
                &BUYER,
                PRICE
            ))
        );
    }

    #[concordium_test]
    fn test_buy_item_not_listed() {
        let mut host = default_host();

        let result = try_buy_item(&mut host, BUYER, PRICE);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_buy_item_price_too_low() {
        let mut host = listed_host();

        let result = try_buy_item(&mut host, BUYER, Amount::from_ccd(5));

        claim_eq!(result, Err(CustomContractError::PriceTooLow.into()));
    }

    #[concordium_test]
    fn test_buy_item_overpayment_goes_to_seller() {
        let mut host = listed_host();
        mock_nft_transfer(&mut host, SELLER, BUYER);

        let paid = PRICE + Amount::from_ccd(7);
        let result = try_buy_item(&mut host, BUYER, paid);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().proceeds(&SELLER), paid);
    }

    #[concordium_test]
    fn test_buy_item_transfer_failure_rejects() {
        let mut host = listed_host();
        // Transfer attempts trap, as they would if the seller revoked the
        // operator approval after listing.
        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            parse_and_check_mock::<TransferParameter, _>(|_| false, ()),
        );

        let result = try_buy_item(&mut host, BUYER, PRICE);

        claim!(result.is_err());
    }

    #[concordium_test]
    fn test_cancel_listing() {
        let mut host = listed_host();

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().listing(&test_token()), None);

        let token = test_token();
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::cancelled(
                &token.contract,
                &token.id,
                &SELLER
            ))
        );
    }

    #[concordium_test]
    fn test_cancel_listing_not_owner() {
        let mut host = listed_host();

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_cancel_listing_not_listed() {
        let mut host = default_host();

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = cancel_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_relist_after_cancel() {
        let mut host = listed_host();

        let bytes = to_bytes(&test_token());
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        cancel_listing(&ctx, &mut host, &mut logger).expect_report("Cancelling failed");

        let result = try_list_item(&mut host, SELLER, NEW_PRICE);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().listing(&test_token()),
            Some(Listing {
                seller: SELLER,
                price: NEW_PRICE,
            })
        );
    }

    #[concordium_test]
    fn test_update_listing() {
        let mut host = listed_host();

        let params = UpdateListingParams {
            token: test_token(),
            new_price: NEW_PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().listing(&test_token()),
            Some(Listing {
                seller: SELLER,
                price: NEW_PRICE,
            })
        );

        let token = test_token();
        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::listed(
                &token.contract,
                &token.id,
                &SELLER,
                NEW_PRICE
            ))
        );
    }

    #[concordium_test]
    fn test_update_listing_not_listed() {
        let mut host = default_host();

        let params = UpdateListingParams {
            token: test_token(),
            new_price: NEW_PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotListed.into()));
    }

    #[concordium_test]
    fn test_update_listing_not_owner() {
        let mut host = listed_host();

        let params = UpdateListingParams {
            token: test_token(),
            new_price: NEW_PRICE,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(BUYER)).set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NotOwner.into()));
    }

    #[concordium_test]
    fn test_update_listing_zero_price() {
        let mut host = listed_host();

        let params = UpdateListingParams {
            token: test_token(),
            new_price: Amount::zero(),
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = update_listing(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::InvalidPrice.into()));
    }

    #[concordium_test]
    fn test_withdraw_proceeds() {
        let mut host = listed_host();
        mock_nft_transfer(&mut host, SELLER, BUYER);
        try_buy_item(&mut host, BUYER, PRICE).expect_report("Buying failed");

        // The contract holds the buyer's payment.
        host.set_self_balance(PRICE);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        let mut logger = TestLogger::init();

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim!(host.transfer_occurred(&SELLER, PRICE));
        claim_eq!(host.state().proceeds(&SELLER), Amount::zero());

        claim_eq!(logger.logs.len(), 1);
        claim_eq!(
            logger.logs[0],
            to_bytes(&MarketplaceEvent::withdrawn(&SELLER, PRICE))
        );
    }

    #[concordium_test]
    fn test_withdraw_proceeds_twice() {
        let mut host = listed_host();
        mock_nft_transfer(&mut host, SELLER, BUYER);
        try_buy_item(&mut host, BUYER, PRICE).expect_report("Buying failed");
        host.set_self_balance(PRICE);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        let mut logger = TestLogger::init();
        withdraw_proceeds(&ctx, &mut host, &mut logger).expect_report("Withdrawal failed");

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NoProceeds.into()));
    }

    #[concordium_test]
    fn test_withdraw_no_proceeds() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER));
        let mut logger = TestLogger::init();

        let result = withdraw_proceeds(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(CustomContractError::NoProceeds.into()));
    }

    #[concordium_test]
    fn test_get_proceeds() {
        let mut host = listed_host();
        mock_nft_transfer(&mut host, SELLER, BUYER);
        try_buy_item(&mut host, BUYER, PRICE).expect_report("Buying failed");

        let bytes = to_bytes(&SELLER);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SELLER))
            .set_parameter(&bytes);

        let proceeds = get_proceeds(&ctx, &host).expect_report("Query failed");

        claim_eq!(proceeds, PRICE);
    }
}
