use commons::{
    AuthorityUpdateParams, AuthorityViewParams, ContractError, ContractResult,
    CustomContractError,
};
use concordium_cis2::*;
use concordium_std::*;

use crate::external::*;
use crate::state::State;

/// Base URL for token metadata. The token ID in hex gets appended to form
/// the full URL.
const TOKEN_METADATA_BASE_URL: &str = "https://some.example/token/";

/// Standards supported by this contract.
const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];

/// Build the metadata URL for a token.
fn build_token_metadata_url(token_id: &ContractTokenId) -> String {
    let mut token_metadata_url = String::from(TOKEN_METADATA_BASE_URL);
    token_metadata_url.push_str(&token_id.to_string());
    token_metadata_url
}

/// Initialize the contract with no tokens.
#[init(contract = "BasicNft")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    Ok(State::new(state_builder, ctx.init_origin()))
}

/// Mint the next sequential token to the sender.
///
/// Logs a `Mint` and a `TokenMetadata` event for the fresh token and returns
/// its ID, so callers learn which token they received.
///
/// It rejects if:
/// - Fails to log `Mint` event.
/// - Fails to log `TokenMetadata` event.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "mint",
    return_value = "ContractTokenId",
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<ContractTokenId> {
    let owner = ctx.sender();

    let token_id = host.state_mut().mint(owner);

    // Event for the minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
        TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: build_token_metadata_url(&token_id),
                hash: None,
            },
        },
    ))?;

    Ok(token_id)
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event and invokes a receive hook function for each
/// transfer in the list.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is neither the owner nor an operator of the owner.
///     - The token is not owned by the `from` address.
/// - Fails to log event.
/// - Any of the receive hook function calls rejects.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "transfer",
    parameter = "TransferParameter",
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();

    for Transfer {
        token_id,
        amount,
        from,
        to,
        data,
    } in transfers
    {
        // Authenticate the sender for this transfer.
        ensure!(
            from == sender || host.state().is_operator(&from, &sender),
            ContractError::Unauthorized
        );
        let to_address = to.address();
        host.state_mut().transfer(&token_id, amount, &from, &to_address)?;

        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id,
            amount,
            from,
            to: to_address,
        }))?;

        // If the receiver is a contract, invoke its receive hook function.
        if let Receiver::Contract(address, function) = to {
            let parameter = OnReceivingCis2Params {
                token_id,
                amount,
                from,
                data,
            };
            host.invoke_contract(
                &address,
                &parameter,
                function.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }
    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
///
/// Logs an `UpdateOperator` event for each update.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let (state, state_builder) = host.state_and_builder();

    for param in params {
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Get the balances of a list of token ID and address pairs.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        let amount = host.state().balance(&query.token_id, &query.address)?;
        response.push(amount);
    }
    Ok(BalanceOfQueryResponse::from(response))
}

/// Check if the given addresses are operators of the queried owners.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "BasicNft",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for query in params.queries {
        response.push(host.state().is_operator(&query.owner, &query.address));
    }
    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the metadata URLs of a list of token IDs.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for token_id in params.queries {
        ensure!(
            host.state().owner_of(&token_id).is_some(),
            ContractError::InvalidTokenId
        );
        response.push(MetadataUrl {
            url: build_token_metadata_url(&token_id),
            hash: None,
        });
    }
    Ok(TokenMetadataQueryResponse::from(response))
}

/// Get the owner of a token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The queried `token_id` does not exist.
#[receive(
    contract = "BasicNft",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state()
        .owner_of(&token_id)
        .ok_or(ContractError::InvalidTokenId)
}

/// Get the number of minted tokens.
#[receive(contract = "BasicNft", name = "getTokenCounter", return_value = "u32")]
fn get_token_counter<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u32> {
    Ok(host.state().token_counter)
}

/// Get the supported standards or addresses of standard implementations.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "BasicNft",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;
    let mut response = Vec::with_capacity(params.queries.len());
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(host.state().have_implementors(&std_id));
        }
    }
    Ok(SupportsQueryResponse::from(response))
}

/// Set the addresses of contracts implementing the given standard.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "BasicNft",
    name = "setImplementors",
    parameter = "SetImplementorsParams"
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        host.state().authority.has_maintainer_rights(&ctx.sender()),
        CustomContractError::Unauthorized.into()
    );
    let params: SetImplementorsParams = ctx.parameter_cursor().get()?;
    host.state_mut()
        .set_implementors(params.id, params.implementors);
    Ok(())
}

/// Function to manage addresses that are allowed to maintain and modify the
/// state of the contract.
///
///  It rejects if:
///  - Fails to parse `AuthorityUpdateParams` parameters.
///  - If sender is neither one of the admins nor one of the maintainers.
#[receive(
    mutable,
    contract = "BasicNft",
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
    contract = "BasicNft",
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
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);

    const TOKEN_0: ContractTokenId = TokenIdU32(0);
    const TOKEN_1: ContractTokenId = TokenIdU32(1);

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        ctx.set_init_origin(ADMIN);
        let mut state_builder = TestStateBuilder::new();
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_BasicNft");
        TestHost::new(state, state_builder)
    }

    fn mint_to(host: &mut TestHost<State<TestStateApi>>, owner: AccountAddress) -> ContractTokenId {
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(owner));
        let mut logger = TestLogger::init();
        mint(&ctx, host, &mut logger).expect_report("Minting failed")
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.token_counter, 0);
        claim_eq!(state.owner_of(&TOKEN_0), None);
        claim!(state.authority.has_admin_rights(&Address::Account(ADMIN)));
    }

    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1));
        let mut logger = TestLogger::init();

        let token_id = mint(&ctx, &mut host, &mut logger).expect_report("Minting failed");

        claim_eq!(token_id, TOKEN_0);
        claim_eq!(host.state().token_counter, 1);
        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Some(Address::Account(USER_1))
        );
        claim_eq!(
            host.state().balance(&TOKEN_0, &Address::Account(USER_1)),
            Ok(1.into())
        );
        claim_eq!(
            host.state().balance(&TOKEN_0, &Address::Account(USER_2)),
            Ok(0.into())
        );

        claim_eq!(logger.logs.len(), 2);
        claim!(logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
            token_id: TOKEN_0,
            amount: ContractTokenAmount::from(1),
            owner: Address::Account(USER_1),
        }))));
        claim!(logger.logs.contains(&to_bytes(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::TokenMetadata(
                TokenMetadataEvent {
                    token_id: TOKEN_0,
                    metadata_url: MetadataUrl {
                        url: build_token_metadata_url(&TOKEN_0),
                        hash: None,
                    },
                }
            )
        )));
    }

    #[concordium_test]
    fn test_mint_sequential_ids() {
        let mut host = default_host();

        let first = mint_to(&mut host, USER_1);
        let second = mint_to(&mut host, USER_2);

        claim_eq!(first, TOKEN_0);
        claim_eq!(second, TOKEN_1);
        claim_eq!(host.state().token_counter, 2);
        claim_eq!(
            host.state().owner_of(&TOKEN_1),
            Some(Address::Account(USER_2))
        );
    }

    #[concordium_test]
    fn test_transfer() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);

        let params = TransferParams::from(vec![Transfer {
            token_id: TOKEN_0,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(USER_1),
            to: Receiver::Account(USER_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Some(Address::Account(USER_2))
        );
        claim_eq!(
            host.state().balance(&TOKEN_0, &Address::Account(USER_1)),
            Ok(0.into())
        );
        claim!(logger
            .logs
            .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                token_id: TOKEN_0,
                amount: ContractTokenAmount::from(1),
                from: Address::Account(USER_1),
                to: Address::Account(USER_2),
            }))));
    }

    #[concordium_test]
    fn test_transfer_unauthorized() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);

        let params = TransferParams::from(vec![Transfer {
            token_id: TOKEN_0,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(USER_1),
            to: Receiver::Account(USER_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_2))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(ContractError::Unauthorized));
    }

    #[concordium_test]
    fn test_transfer_from_non_owner() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);

        let params = TransferParams::from(vec![Transfer {
            token_id: TOKEN_0,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(USER_2),
            to: Receiver::Account(USER_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_2))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Err(ContractError::InsufficientFunds));
    }

    #[concordium_test]
    fn test_operator_can_transfer() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);

        // USER_1 enables USER_2 as operator.
        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(USER_2),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let result = update_operator(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim!(host.state().is_operator(
            &Address::Account(USER_1),
            &Address::Account(USER_2)
        ));

        // USER_2 moves the token on behalf of USER_1.
        let params = TransferParams::from(vec![Transfer {
            token_id: TOKEN_0,
            amount: ContractTokenAmount::from(1),
            from: Address::Account(USER_1),
            to: Receiver::Account(USER_2),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_2))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();

        let result = transfer(&ctx, &mut host, &mut logger);

        claim_eq!(result, Ok(()));
        claim_eq!(
            host.state().owner_of(&TOKEN_0),
            Some(Address::Account(USER_2))
        );
    }

    #[concordium_test]
    fn test_operator_of_query() {
        let mut host = default_host();

        let params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: Address::Account(USER_2),
        }]);
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let mut logger = TestLogger::init();
        update_operator(&ctx, &mut host, &mut logger).expect_report("Operator update failed");

        let query = OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: Address::Account(USER_1),
                    address: Address::Account(USER_2),
                },
                OperatorOfQuery {
                    owner: Address::Account(USER_2),
                    address: Address::Account(USER_1),
                },
            ],
        };
        let bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);

        let response = operator_of(&ctx, &host).expect_report("Query failed");

        claim_eq!(response.0, vec![true, false]);
    }

    #[concordium_test]
    fn test_token_metadata() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);

        let query = TokenMetadataQueryParams {
            queries: vec![TOKEN_0],
        };
        let bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);

        let response = token_metadata(&ctx, &host).expect_report("Query failed");

        claim_eq!(response.0.len(), 1);
        claim_eq!(response.0[0].url, build_token_metadata_url(&TOKEN_0));
        claim_eq!(response.0[0].hash, None);
    }

    #[concordium_test]
    fn test_token_metadata_unknown_token() {
        let host = default_host();

        let query = TokenMetadataQueryParams {
            queries: vec![TOKEN_0],
        };
        let bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);

        let err = token_metadata(&ctx, &host).expect_err_report("Expected rejection");

        claim_eq!(err, ContractError::InvalidTokenId);
    }

    #[concordium_test]
    fn test_owner_of_unknown_token() {
        let host = default_host();

        let bytes = to_bytes(&TOKEN_0);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);

        let result = owner_of(&ctx, &host);

        claim_eq!(result, Err(ContractError::InvalidTokenId));
    }

    #[concordium_test]
    fn test_supports() {
        let host = default_host();

        let query = SupportsQueryParams {
            queries: vec![
                CIS0_STANDARD_IDENTIFIER.to_owned(),
                CIS2_STANDARD_IDENTIFIER.to_owned(),
                StandardIdentifierOwned::new_unchecked("CIS-99".to_string()),
            ],
        };
        let bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);

        let response = supports(&ctx, &host).expect_report("Query failed");

        claim_eq!(response.results.len(), 3);
        claim!(matches!(response.results[0], SupportResult::Support));
        claim!(matches!(response.results[1], SupportResult::Support));
        claim!(matches!(response.results[2], SupportResult::NoSupport));
    }

    #[concordium_test]
    fn test_set_implementors_requires_authority() {
        let mut host = default_host();

        let params = SetImplementorsParams {
            id: StandardIdentifierOwned::new_unchecked("CIS-99".to_string()),
            implementors: vec![ContractAddress {
                index: 5,
                subindex: 0,
            }],
        };
        let bytes = to_bytes(&params);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let result = set_implementors(&ctx, &mut host);
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(ADMIN))
            .set_parameter(&bytes);
        let result = set_implementors(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        let query = SupportsQueryParams {
            queries: vec![StandardIdentifierOwned::new_unchecked(
                "CIS-99".to_string(),
            )],
        };
        let bytes = to_bytes(&query);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(USER_1))
            .set_parameter(&bytes);
        let response = supports(&ctx, &host).expect_report("Query failed");
        claim!(matches!(
            &response.results[0],
            SupportResult::SupportBy(addresses) if addresses.len() == 1
        ));
    }

    #[concordium_test]
    fn test_get_token_counter() {
        let mut host = default_host();
        mint_to(&mut host, USER_1);
        mint_to(&mut host, USER_1);

        let ctx = TestReceiveContext::empty();
        let counter = get_token_counter(&ctx, &host).expect_report("Query failed");

        claim_eq!(counter, 2);
    }
}
