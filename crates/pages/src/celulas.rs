//! Cell groups, members and attendance reports.

use crate::permissions::Capability;
use crate::{may_manage, Page, PageContext};

pub struct CelulasPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CelulasProps {
    pub current_user_id: Option<i64>,
    pub can_create: bool,
    pub can_manage_all: bool,
    pub can_manage_own: bool,
}

impl CelulasProps {
    /// Whether the celula led by `leader_user_id` may be edited.
    pub fn can_manage_celula(&self, leader_user_id: Option<i64>) -> bool {
        may_manage(self.can_manage_all, self.can_manage_own, self.current_user_id, leader_user_id)
    }
}

impl Page for CelulasPage {
    const ROUTE: &'static str = "/celulas";
    type Props = CelulasProps;

    fn resolve(ctx: &PageContext<'_>) -> CelulasProps {
        let manage_all = ctx.allows(Capability::ManageCelulas);
        CelulasProps {
            current_user_id: ctx.current_user_id(),
            can_create: manage_all,
            can_manage_all: manage_all,
            can_manage_own: ctx.allows(Capability::ManageOwnCelula),
        }
    }
}

pub struct CelulaDetailPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CelulaDetailProps {
    pub celula_id: Option<i64>,
    pub current_user_id: Option<i64>,
    pub can_edit: bool,
    pub can_manage_own: bool,
    pub can_manage_members: bool,
    pub can_multiply: bool,
}

impl Page for CelulaDetailPage {
    const ROUTE: &'static str = "/celulas/:celulaId";
    type Props = CelulaDetailProps;

    fn resolve(ctx: &PageContext<'_>) -> CelulaDetailProps {
        CelulaDetailProps {
            celula_id: ctx.id("celulaId"),
            current_user_id: ctx.current_user_id(),
            can_edit: ctx.allows(Capability::ManageCelulas),
            can_manage_own: ctx.allows(Capability::ManageOwnCelula),
            can_manage_members: ctx.allows(Capability::ManageMembers),
            can_multiply: ctx.allows(Capability::MultiplyCelulas),
        }
    }
}

pub struct CelulaReportsPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CelulaReportsProps {
    pub celula_id: Option<i64>,
    pub can_view: bool,
    pub can_submit: bool,
}

impl Page for CelulaReportsPage {
    const ROUTE: &'static str = "/celulas/:celulaId/reports";
    type Props = CelulaReportsProps;

    fn resolve(ctx: &PageContext<'_>) -> CelulaReportsProps {
        CelulaReportsProps {
            celula_id: ctx.id("celulaId"),
            can_view: ctx.allows(Capability::ViewReports),
            can_submit: ctx.allows(Capability::SubmitReports),
        }
    }
}

pub struct MonthlyReportPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlyReportProps {
    pub celula_id: Option<i64>,
    pub year: Option<i32>,
    /// 1..=12; anything else resolves to `None`.
    pub month: Option<u32>,
    pub can_view: bool,
}

impl MonthlyReportProps {
    /// Arguments for the by-month report call, only when all three resolved.
    pub fn request(&self) -> Option<(i64, i32, u32)> {
        Some((self.celula_id?, self.year?, self.month?))
    }
}

impl Page for MonthlyReportPage {
    const ROUTE: &'static str = "/celulas/:celulaId/reports/:year/:month";
    type Props = MonthlyReportProps;

    fn resolve(ctx: &PageContext<'_>) -> MonthlyReportProps {
        MonthlyReportProps {
            celula_id: ctx.id("celulaId"),
            year: ctx.id("year").and_then(|y| i32::try_from(y).ok()),
            month: ctx
                .id("month")
                .and_then(|m| u32::try_from(m).ok())
                .filter(|m| (1..=12).contains(m)),
            can_view: ctx.allows(Capability::ViewReports),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::GroupPermissions;
    use crate::route::RouteParams;
    use crate::session::SessionUser;

    #[test]
    fn leader_manages_own_celula_only() {
        let params = RouteParams::new();
        let perms = GroupPermissions::granting(&[Capability::ManageOwnCelula]);
        let me = SessionUser { id: 4, email: "lider@igreja.org".into() };
        let props = CelulasPage::resolve(&PageContext::new(&params).with_permissions(Some(&perms)).with_session(Some(&me)));
        assert!(!props.can_create);
        assert!(props.can_manage_celula(Some(4)));
        assert!(!props.can_manage_celula(Some(5)));
        assert!(!props.can_manage_celula(None));
    }

    #[test]
    fn detail_page_reads_celula_id() {
        let params = RouteParams::new().with("celulaId", "12");
        let perms = GroupPermissions::granting(&[Capability::ManageMembers, Capability::MultiplyCelulas]);
        let props = CelulaDetailPage::resolve(&PageContext::new(&params).with_permissions(Some(&perms)));
        assert_eq!(props.celula_id, Some(12));
        assert!(props.can_manage_members && props.can_multiply);
        assert!(!props.can_edit && !props.can_manage_own);
        assert_eq!(props.current_user_id, None);
    }

    #[test]
    fn reports_page_defaults() {
        let params = RouteParams::new().with("celulaId", "");
        let props = CelulaReportsPage::resolve(&PageContext::new(&params));
        assert_eq!(props, CelulaReportsProps { celula_id: None, can_view: false, can_submit: false });
    }

    #[test]
    fn monthly_request_needs_every_part() {
        let params = RouteParams::new().with("celulaId", "5").with("year", "2024").with("month", "3");
        let props = MonthlyReportPage::resolve(&PageContext::new(&params));
        assert_eq!(props.request(), Some((5, 2024, 3)));

        let params = RouteParams::new().with("celulaId", "5").with("year", "2024").with("month", "13");
        let props = MonthlyReportPage::resolve(&PageContext::new(&params));
        assert_eq!(props.month, None);
        assert_eq!(props.request(), None);

        let params = RouteParams::new().with("year", "2024").with("month", "3");
        assert_eq!(MonthlyReportPage::resolve(&PageContext::new(&params)).request(), None);
    }
}
