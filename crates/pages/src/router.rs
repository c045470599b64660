//! Route table: concrete path -> page props.

use tracing::debug;

use crate::admin::{InvitationsPage, InvitationsProps, PermissionsPage, PermissionsProps, ProfilePage, ProfileProps};
use crate::celulas::{
    CelulaDetailPage, CelulaDetailProps, CelulaReportsPage, CelulaReportsProps, CelulasPage, CelulasProps,
    MonthlyReportPage, MonthlyReportProps,
};
use crate::finance::{
    AccountsPage, AccountsProps, BudgetPage, BudgetProps, CategoriesPage, CategoriesProps, PersonalCategoriesPage,
    TransactionsPage, TransactionsProps,
};
use crate::permissions::GroupPermissions;
use crate::route::RouteParams;
use crate::session::SessionUser;
use crate::{Page, PageContext};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageProps {
    Categories(CategoriesProps),
    Accounts(AccountsProps),
    Transactions(TransactionsProps),
    Budget(BudgetProps),
    Celulas(CelulasProps),
    CelulaDetail(CelulaDetailProps),
    CelulaReports(CelulaReportsProps),
    MonthlyReport(MonthlyReportProps),
    Permissions(PermissionsProps),
    Invitations(InvitationsProps),
    Profile(ProfileProps),
}

pub const ROUTES: &[&str] = &[
    CategoriesPage::ROUTE,
    PersonalCategoriesPage::ROUTE,
    AccountsPage::ROUTE,
    TransactionsPage::ROUTE,
    BudgetPage::ROUTE,
    CelulasPage::ROUTE,
    CelulaDetailPage::ROUTE,
    CelulaReportsPage::ROUTE,
    MonthlyReportPage::ROUTE,
    PermissionsPage::ROUTE,
    InvitationsPage::ROUTE,
    ProfilePage::ROUTE,
];

fn attempt<P: Page>(
    path: &str,
    permissions: Option<&GroupPermissions>,
    session: Option<&SessionUser>,
    wrap: fn(P::Props) -> PageProps,
) -> Option<PageProps> {
    let params = RouteParams::match_template(P::ROUTE, path)?;
    let ctx = PageContext::new(&params).with_permissions(permissions).with_session(session);
    Some(wrap(P::resolve(&ctx)))
}

/// Resolve the props of whichever page `path` routes to.
pub fn resolve_path(
    path: &str,
    permissions: Option<&GroupPermissions>,
    session: Option<&SessionUser>,
) -> Option<PageProps> {
    let resolved = attempt::<CategoriesPage>(path, permissions, session, PageProps::Categories)
        .or_else(|| attempt::<PersonalCategoriesPage>(path, permissions, session, PageProps::Categories))
        .or_else(|| attempt::<AccountsPage>(path, permissions, session, PageProps::Accounts))
        .or_else(|| attempt::<TransactionsPage>(path, permissions, session, PageProps::Transactions))
        .or_else(|| attempt::<BudgetPage>(path, permissions, session, PageProps::Budget))
        .or_else(|| attempt::<CelulasPage>(path, permissions, session, PageProps::Celulas))
        .or_else(|| attempt::<CelulaDetailPage>(path, permissions, session, PageProps::CelulaDetail))
        .or_else(|| attempt::<CelulaReportsPage>(path, permissions, session, PageProps::CelulaReports))
        .or_else(|| attempt::<MonthlyReportPage>(path, permissions, session, PageProps::MonthlyReport))
        .or_else(|| attempt::<PermissionsPage>(path, permissions, session, PageProps::Permissions))
        .or_else(|| attempt::<InvitationsPage>(path, permissions, session, PageProps::Invitations))
        .or_else(|| attempt::<ProfilePage>(path, permissions, session, PageProps::Profile));
    if resolved.is_none() {
        debug!(%path, "no page for path");
    }
    resolved
}
