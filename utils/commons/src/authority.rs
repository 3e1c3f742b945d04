use crate::CustomContractError;
use concordium_std::*;

/// Addresses that are allowed to maintain and administer a contract.
///
/// Admins manage both address lists, maintainers only the maintainer list.
/// Admin rights imply maintainer rights.
#[derive(Debug, Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct Authority<S: HasStateApi> {
    admins: StateSet<Address, S>,
    maintainers: StateSet<Address, S>,
}

impl<S: HasStateApi> Authority<S> {
    /// Create a new authority with `admin` as the only admin.
    pub fn new(state_builder: &mut StateBuilder<S>, admin: Address) -> Self {
        let mut admins = state_builder.new_set();
        admins.insert(admin);
        Self {
            admins,
            maintainers: state_builder.new_set(),
        }
    }

    pub fn has_admin_rights(&self, address: &Address) -> bool {
        self.admins.contains(address)
    }

    pub fn has_maintainer_rights(&self, address: &Address) -> bool {
        self.maintainers.contains(address) || self.has_admin_rights(address)
    }

    /// Apply an authority update on behalf of `sender`.
    ///
    /// Rejects with `Unauthorized` if `sender` lacks the rights over the
    /// targeted list. Adding a present address or removing an absent one is
    /// not an error.
    pub fn handle_update(
        &mut self,
        sender: Address,
        update: AuthorityUpdateParams,
    ) -> Result<(), Reject> {
        let allowed = match update.field {
            AuthorityField::Maintainer => self.has_maintainer_rights(&sender),
            AuthorityField::Admin => self.has_admin_rights(&sender),
        };
        ensure!(allowed, CustomContractError::Unauthorized.into());

        let address_list = match update.field {
            AuthorityField::Maintainer => &mut self.maintainers,
            AuthorityField::Admin => &mut self.admins,
        };
        match update.kind {
            AuthorityUpdateKind::Remove => {
                address_list.remove(&update.address);
            }
            AuthorityUpdateKind::Add => {
                address_list.insert(update.address);
            }
        }

        Ok(())
    }

    /// View a page of the requested address list.
    pub fn handle_view(&self, view: AuthorityViewParams) -> Vec<Address> {
        let address_list = match view.field {
            AuthorityField::Maintainer => &self.maintainers,
            AuthorityField::Admin => &self.admins,
        };

        address_list
            .iter()
            .skip(view.skip as usize)
            .take(view.show as usize)
            .map(|a| *a)
            .collect()
    }
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityField {
    Maintainer,
    Admin,
}

#[derive(Debug, SchemaType, Serialize)]
pub enum AuthorityUpdateKind {
    Remove,
    Add,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityUpdateParams {
    pub field: AuthorityField,
    pub kind: AuthorityUpdateKind,
    pub address: Address,
}

#[derive(Debug, SchemaType, Serialize)]
pub struct AuthorityViewParams {
    pub field: AuthorityField,
    pub skip: u32,
    pub show: u32,
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use concordium_std::test_infrastructure::*;

    const ADMIN: AccountAddress = AccountAddress([1; 32]);
    const MAINTAINER: AccountAddress = AccountAddress([2; 32]);
    const USER: AccountAddress = AccountAddress([16; 32]);

    fn default_authority() -> Authority<TestStateApi> {
        let mut state_builder = TestStateBuilder::new();
        let mut authority = Authority::new(&mut state_builder, Address::Account(ADMIN));
        authority.maintainers.insert(Address::Account(MAINTAINER));
        authority
    }

    #[concordium_test]
    fn test_initial_rights() {
        let authority = default_authority();

        claim!(authority.has_admin_rights(&Address::Account(ADMIN)));
        claim!(authority.has_maintainer_rights(&Address::Account(ADMIN)));
        claim!(!authority.has_admin_rights(&Address::Account(MAINTAINER)));
        claim!(authority.has_maintainer_rights(&Address::Account(MAINTAINER)));
        claim!(!authority.has_maintainer_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_admin_manages_admins() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(ADMIN),
            AuthorityUpdateParams {
                field: AuthorityField::Admin,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_admin_rights(&Address::Account(USER)));
        claim!(authority.has_maintainer_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_maintainer_cannot_manage_admins() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            AuthorityUpdateParams {
                field: AuthorityField::Admin,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
        claim!(!authority.has_admin_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_maintainer_manages_maintainers() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(authority.has_maintainer_rights(&Address::Account(USER)));

        let result = authority.handle_update(
            Address::Account(MAINTAINER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Remove,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Ok(()));
        claim!(!authority.has_maintainer_rights(&Address::Account(USER)));
    }

    #[concordium_test]
    fn test_user_cannot_update() {
        let mut authority = default_authority();

        let result = authority.handle_update(
            Address::Account(USER),
            AuthorityUpdateParams {
                field: AuthorityField::Maintainer,
                kind: AuthorityUpdateKind::Add,
                address: Address::Account(USER),
            },
        );
        claim_eq!(result, Err(CustomContractError::Unauthorized.into()));
    }

    #[concordium_test]
    fn test_view_paging() {
        let authority = default_authority();

        let all = authority.handle_view(AuthorityViewParams {
            field: AuthorityField::Maintainer,
            skip: 0,
            show: 10,
        });
        claim_eq!(all, vec![Address::Account(MAINTAINER)]);

        let none = authority.handle_view(AuthorityViewParams {
            field: AuthorityField::Maintainer,
            skip: 1,
            show: 10,
        });
        claim!(none.is_empty());
    }
}
