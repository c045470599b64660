//! Page-level parameter and permission resolution.
//! - Route parameters become identifiers via one `parse_route_id` rule.
//! - Capability flags come from the current group's permissions and default
//!   to `false`.
//! - Each page is a pure `PageContext -> Props` mapping; the props are handed
//!   to the feature component unchanged.

pub mod route;
pub mod permissions;
pub mod session;
pub mod finance;
pub mod celulas;
pub mod admin;
pub mod router;

use std::fmt::Debug;

use permissions::{allows, Capability, GroupPermissions};
use route::RouteParams;
use session::SessionUser;

/// Explicit inputs of a page: route parameters, the current group's
/// permissions and the session user. Each may be absent.
#[derive(Clone, Copy, Debug)]
pub struct PageContext<'a> {
    pub params: &'a RouteParams,
    pub permissions: Option<&'a GroupPermissions>,
    pub session: Option<&'a SessionUser>,
}

impl<'a> PageContext<'a> {
    pub fn new(params: &'a RouteParams) -> Self {
        Self { params, permissions: None, session: None }
    }

    pub fn with_permissions(mut self, permissions: Option<&'a GroupPermissions>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_session(mut self, session: Option<&'a SessionUser>) -> Self {
        self.session = session;
        self
    }

    pub fn id(&self, name: &str) -> Option<i64> {
        self.params.id(name)
    }

    pub fn allows(&self, capability: Capability) -> bool {
        allows(self.permissions, capability)
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.session.map(|s| s.id)
    }
}

/// A routed page.
pub trait Page {
    /// Route template with `:name` parameters.
    const ROUTE: &'static str;
    type Props: Clone + PartialEq + Debug;

    fn resolve(ctx: &PageContext<'_>) -> Self::Props;
}

/// "Own records" vs "all records" tiers: the all-tier wins, the own-tier
/// needs a known user who owns the record.
pub(crate) fn may_manage(all: bool, own: bool, current_user_id: Option<i64>, owner_id: Option<i64>) -> bool {
    if all {
        return true;
    }
    match (current_user_id, owner_id) {
        (Some(me), Some(owner)) => own && me == owner,
        _ => false,
    }
}
