//! Accounts, transactions, budgets and categories.

use crate::permissions::Capability;
use crate::{may_manage, Page, PageContext};

pub struct CategoriesPage;

/// The user's own categories, outside any group.
pub struct PersonalCategoriesPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoriesProps {
    /// `None` lists personal categories.
    pub group_id: Option<i64>,
    pub can_manage: bool,
}

impl Page for CategoriesPage {
    const ROUTE: &'static str = "/groups/:groupId/categories";
    type Props = CategoriesProps;

    fn resolve(ctx: &PageContext<'_>) -> CategoriesProps {
        CategoriesProps {
            group_id: ctx.id("groupId"),
            can_manage: ctx.allows(Capability::ManageCategories),
        }
    }
}

impl Page for PersonalCategoriesPage {
    const ROUTE: &'static str = "/categories";
    type Props = CategoriesProps;

    // personal categories belong to the session user, no group flag applies
    fn resolve(ctx: &PageContext<'_>) -> CategoriesProps {
        CategoriesProps { group_id: None, can_manage: ctx.current_user_id().is_some() }
    }
}

pub struct AccountsPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountsProps {
    pub group_id: Option<i64>,
    pub can_view: bool,
    pub can_manage: bool,
}

impl Page for AccountsPage {
    const ROUTE: &'static str = "/groups/:groupId/accounts";
    type Props = AccountsProps;

    fn resolve(ctx: &PageContext<'_>) -> AccountsProps {
        AccountsProps {
            group_id: ctx.id("groupId"),
            can_view: ctx.allows(Capability::ViewAccounts),
            can_manage: ctx.allows(Capability::ManageAccounts),
        }
    }
}

pub struct TransactionsPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionsProps {
    pub group_id: Option<i64>,
    pub account_id: Option<i64>,
    pub current_user_id: Option<i64>,
    pub can_create: bool,
    pub can_manage_own: bool,
    pub can_manage_all: bool,
}

impl TransactionsProps {
    /// Whether a transaction created by `owner_id` may be edited or removed.
    pub fn can_manage_record(&self, owner_id: Option<i64>) -> bool {
        may_manage(self.can_manage_all, self.can_manage_own, self.current_user_id, owner_id)
    }
}

impl Page for TransactionsPage {
    const ROUTE: &'static str = "/groups/:groupId/accounts/:accountId/transactions";
    type Props = TransactionsProps;

    fn resolve(ctx: &PageContext<'_>) -> TransactionsProps {
        TransactionsProps {
            group_id: ctx.id("groupId"),
            account_id: ctx.id("accountId"),
            current_user_id: ctx.current_user_id(),
            can_create: ctx.allows(Capability::CreateTransactions),
            can_manage_own: ctx.allows(Capability::ManageOwnTransactions),
            can_manage_all: ctx.allows(Capability::ManageAllTransactions),
        }
    }
}

pub struct BudgetPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetProps {
    pub group_id: Option<i64>,
    pub year: Option<i32>,
    pub can_view: bool,
    pub can_manage: bool,
}

impl BudgetProps {
    /// Value for the `year` filter of the expenses listing.
    pub fn year_filter(&self) -> Option<String> {
        self.year.map(|y| y.to_string())
    }
}

impl Page for BudgetPage {
    const ROUTE: &'static str = "/groups/:groupId/budget/:year";
    type Props = BudgetProps;

    fn resolve(ctx: &PageContext<'_>) -> BudgetProps {
        BudgetProps {
            group_id: ctx.id("groupId"),
            year: ctx.id("year").and_then(|y| i32::try_from(y).ok()),
            can_view: ctx.allows(Capability::ViewBudgets),
            can_manage: ctx.allows(Capability::ManageBudgets),
        }
    }
}
