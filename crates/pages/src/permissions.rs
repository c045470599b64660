//! Capability flags for the current group.
//!
//! The store hands over whatever flags it knows about; any flag that is
//! missing, `null`, or belongs to a context that is not loaded yet counts as
//! `false`.

use serde::Deserialize;

macro_rules! capabilities {
    ($($variant:ident => $field:ident),* $(,)?) => {
        /// One gate a page can check.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Capability {
            $($variant,)*
        }

        impl Capability {
            pub const ALL: &'static [Capability] = &[$(Capability::$variant,)*];
        }

        /// Flags of the current group as stored client-side.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct GroupPermissions {
            $(pub $field: Option<bool>,)*
        }

        impl GroupPermissions {
            pub fn flag(&self, capability: Capability) -> Option<bool> {
                match capability {
                    $(Capability::$variant => self.$field,)*
                }
            }

            pub fn set(&mut self, capability: Capability, value: bool) {
                match capability {
                    $(Capability::$variant => self.$field = Some(value),)*
                }
            }
        }
    };
}

capabilities! {
    ViewAccounts => can_view_accounts,
    ManageAccounts => can_manage_accounts,
    CreateTransactions => can_create_transactions,
    ManageOwnTransactions => can_manage_own_transactions,
    ManageAllTransactions => can_manage_all_transactions,
    ViewBudgets => can_view_budgets,
    ManageBudgets => can_manage_budgets,
    ManageCategories => can_manage_categories,
    ManageCelulas => can_manage_celulas,
    ManageOwnCelula => can_manage_own_celula,
    ManageMembers => can_manage_members,
    MultiplyCelulas => can_multiply_celulas,
    ViewReports => can_view_reports,
    SubmitReports => can_submit_reports,
    ManagePermissions => can_manage_permissions,
    InviteMembers => can_invite_members,
}

impl GroupPermissions {
    /// Context with the listed capabilities granted and nothing else set.
    pub fn granting(capabilities: &[Capability]) -> Self {
        let mut perms = Self::default();
        for cap in capabilities {
            perms.set(*cap, true);
        }
        perms
    }
}

/// Whether `capability` is granted. Unset context or unset flag is `false`.
pub fn allows(permissions: Option<&GroupPermissions>, capability: Capability) -> bool {
    permissions
        .and_then(|p| p.flag(capability))
        .unwrap_or(false)
}
