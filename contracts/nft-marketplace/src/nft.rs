use commons::{
    ContractBalanceOfQueryResponse, ContractTokenAmount, CustomContractError, Token,
    TransferParameter,
};
use concordium_cis2::*;
use concordium_std::*;

/// Query the balance of `owner` for the token on its CIS2 contract.
pub fn balance_of<T>(
    host: &impl HasHost<T>,
    token: &Token,
    owner: Address,
) -> ReceiveResult<ContractTokenAmount> {
    let parameter = BalanceOfQueryParams {
        queries: vec![BalanceOfQuery {
            token_id: token.id.clone(),
            address: owner,
        }],
    };
    let mut response = host
        .invoke_contract_read_only(
            &token.contract,
            &parameter,
            EntrypointName::new_unchecked("balanceOf"),
            Amount::zero(),
        )
        .map_err(handle_call_error)?
        .ok_or(CustomContractError::Incompatible)?;
    let amounts = ContractBalanceOfQueryResponse::deserial(&mut response)
        .map_err(|_| CustomContractError::Incompatible)?;
    amounts
        .0
        .first()
        .copied()
        .ok_or_else(|| CustomContractError::Incompatible.into())
}

/// Query whether `address` is an operator for `owner` on the token contract.
pub fn is_operator_of<T>(
    host: &impl HasHost<T>,
    token: &Token,
    owner: Address,
    address: Address,
) -> ReceiveResult<bool> {
    let parameter = OperatorOfQueryParams {
        queries: vec![OperatorOfQuery { owner, address }],
    };
    let mut response = host
        .invoke_contract_read_only(
            &token.contract,
            &parameter,
            EntrypointName::new_unchecked("operatorOf"),
            Amount::zero(),
        )
        .map_err(handle_call_error)?
        .ok_or(CustomContractError::Incompatible)?;
    let operators = OperatorOfQueryResponse::deserial(&mut response)
        .map_err(|_| CustomContractError::Incompatible)?;
    operators
        .0
        .first()
        .copied()
        .ok_or_else(|| CustomContractError::Incompatible.into())
}

/// Transfer the token from the seller to the buyer through the CIS2
/// `transfer` function, using the operator rights the seller granted to this
/// contract.
pub fn transfer<T>(
    host: &mut impl HasHost<T>,
    token: &Token,
    from: AccountAddress,
    to: AccountAddress,
) -> ReceiveResult<()> {
    let parameter: TransferParameter = TransferParams::from(vec![Transfer {
        token_id: token.id.clone(),
        amount: 1.into(),
        from: Address::Account(from),
        to: Receiver::Account(to),
        data: AdditionalData::empty(),
    }]);
    host.invoke_contract(
        &token.contract,
        &parameter,
        EntrypointName::new_unchecked("transfer"),
        Amount::zero(),
    )
    .map_err(handle_call_error)?;

    Ok(())
}

fn handle_call_error<R>(error: CallContractError<R>) -> Reject {
    match error {
        CallContractError::MissingEntrypoint | CallContractError::MessageFailed => {
            CustomContractError::Incompatible.into()
        }
        CallContractError::LogicReject { .. } => CustomContractError::InvokeContractError.into(),
        e => e.into(),
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use commons::test::*;
    use commons::ContractBalanceOfQueryParams;
    use concordium_std::test_infrastructure::*;

    const NFT_CONTRACT: ContractAddress = ContractAddress {
        index: 1,
        subindex: 0,
    };

    const USER_1: AccountAddress = AccountAddress([16; 32]);
    const USER_2: AccountAddress = AccountAddress([17; 32]);

    fn test_token() -> Token {
        Token {
            contract: NFT_CONTRACT,
            id: TokenIdVec(vec![0, 0, 0, 0]),
        }
    }

    #[concordium_test]
    fn test_balance_of() {
        let state_builder = TestStateBuilder::new();
        let mut host = TestHost::new((), state_builder);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("balanceOf")),
            parse_and_map_mock(|params: &ContractBalanceOfQueryParams| {
                let amounts: Vec<ContractTokenAmount> = params
                    .queries
                    .iter()
                    .map(|query| {
                        if query.address == Address::Account(USER_1) {
                            1.into()
                        } else {
                            0.into()
                        }
                    })
                    .collect();
                Some(BalanceOfQueryResponse::from(amounts))
            }),
        );

        let response = balance_of(&host, &test_token(), Address::Account(USER_1));
        claim_eq!(response, Ok(1.into()));

        let response = balance_of(&host, &test_token(), Address::Account(USER_2));
        claim_eq!(response, Ok(0.into()));
    }

    #[concordium_test]
    fn test_is_operator_of() {
        let state_builder = TestStateBuilder::new();
        let mut host = TestHost::new((), state_builder);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("operatorOf")),
            parse_and_ok_mock::<OperatorOfQueryParams, _>(OperatorOfQueryResponse::from(vec![
                true,
            ])),
        );

        let response = is_operator_of(
            &host,
            &test_token(),
            Address::Account(USER_1),
            Address::Contract(NFT_CONTRACT),
        );
        claim_eq!(response, Ok(true));
    }

    #[concordium_test]
    fn test_transfer() {
        let state_builder = TestStateBuilder::new();
        let mut host = TestHost::new((), state_builder);

        host.setup_mock_entrypoint(
            NFT_CONTRACT,
            OwnedEntrypointName::new_unchecked(String::from("transfer")),
            parse_and_check_mock::<TransferParameter, _>(
                |TransferParams(transfers)| {
                    transfers.len() == 1
                        && transfers[0].from == Address::Account(USER_1)
                        && matches!(&transfers[0].to, Receiver::Account(to) if *to == USER_2)
                },
                (),
            ),
        );

        let response = transfer(&mut host, &test_token(), USER_1, USER_2);
        claim_eq!(response, Ok(()));
    }
}
