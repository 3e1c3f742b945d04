use super::*;

/// The custom errors the contracts can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Token already has an active listing (Error code: -4).
    AlreadyListed,
    /// Sender does not own the token (Error code: -5).
    NotOwner,
    /// Listing price must be above zero (Error code: -6).
    InvalidPrice,
    /// Marketplace is not approved to transfer the token (Error code: -7).
    NotApproved,
    /// Token is not listed for sale (Error code: -8).
    NotListed,
    /// Attached amount is below the asking price (Error code: -9).
    PriceTooLow,
    /// No proceeds to withdraw (Error code: -10).
    NoProceeds,
    /// Only account addresses can call this function (Error code: -11).
    OnlyAccountAddress,
    /// Unauthorized (Error code: -12).
    Unauthorized,
    /// Incompatible contract (Error code: -13).
    Incompatible,
    /// Failed to invoke a contract (Error code: -14).
    InvokeContractError,
    /// Failed to invoke a transfer (Error code: -15).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping errors related to contract invocations to CustomContractError.
impl<T> From<CallContractError<T>> for CustomContractError {
    fn from(_cce: CallContractError<T>) -> Self {
        Self::InvokeContractError
    }
}

/// Mapping errors related to CCD transfers to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}

/// Mapping CustomContractError to ContractError.
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}
