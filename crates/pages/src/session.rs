use models::user::User;

/// What the session provider exposes about the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self { id: user.id, email: user.email.clone() }
    }
}
