//! Permission grants, invitations and the user's own profile.

use crate::permissions::Capability;
use crate::{Page, PageContext};

pub struct PermissionsPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionsProps {
    pub can_manage: bool,
}

impl Page for PermissionsPage {
    const ROUTE: &'static str = "/permissions";
    type Props = PermissionsProps;

    fn resolve(ctx: &PageContext<'_>) -> PermissionsProps {
        PermissionsProps { can_manage: ctx.allows(Capability::ManagePermissions) }
    }
}

pub struct InvitationsPage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvitationsProps {
    pub group_id: Option<i64>,
    pub can_invite: bool,
}

impl Page for InvitationsPage {
    const ROUTE: &'static str = "/groups/:groupId/invitations";
    type Props = InvitationsProps;

    fn resolve(ctx: &PageContext<'_>) -> InvitationsProps {
        InvitationsProps {
            group_id: ctx.id("groupId"),
            can_invite: ctx.allows(Capability::InviteMembers),
        }
    }
}

pub struct ProfilePage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileProps {
    pub current_user_id: Option<i64>,
}

impl Page for ProfilePage {
    const ROUTE: &'static str = "/profile";
    type Props = ProfileProps;

    fn resolve(ctx: &PageContext<'_>) -> ProfileProps {
        ProfileProps { current_user_id: ctx.current_user_id() }
    }
}
