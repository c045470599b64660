use common::ApiClient;
use models::user::{LocaleUpdate, ProfileUpdate, RegisterUser, User};
use tracing::instrument;

use crate::errors::ServiceError;

#[instrument(skip(client, input), fields(email = %input.email))]
pub async fn register(client: &ApiClient, input: &RegisterUser) -> Result<User, ServiceError> {
    Ok(client.post("/users/register", input).await?)
}

#[instrument(skip(client, input), fields(locale = %input.locale))]
pub async fn update_locale(client: &ApiClient, input: &LocaleUpdate) -> Result<User, ServiceError> {
    Ok(client.patch("/users/locale", input).await?)
}

pub async fn update_profile(client: &ApiClient, input: &ProfileUpdate) -> Result<User, ServiceError> {
    Ok(client.patch("/users/profile", input).await?)
}

/// The user behind the current session.
pub async fn me(client: &ApiClient) -> Result<User, ServiceError> {
    Ok(client.get("/users/me").await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingTransport;
    use common::CoreError;
    use serde_json::json;

    fn user() -> serde_json::Value {
        json!({
            "id": 12,
            "email": "maria@example.com",
            "firstName": "Maria",
            "lastName": "Souza",
            "firstAccess": false,
            "locale": "pt-BR",
            "timezone": "America/Sao_Paulo",
            "createdAt": "2024-01-02T03:04:05Z"
        })
    }

    #[tokio::test]
    async fn register_posts_to_register() -> anyhow::Result<()> {
        let (client, t) = RecordingTransport::replying(user());
        let input = RegisterUser {
            email: "maria@example.com".into(),
            password: "s3nha-forte".into(),
            first_name: "Maria".into(),
            last_name: "Souza".into(),
            phone_number: None,
            locale: Some("pt-BR".into()),
            invite_token: None,
        };
        let u = register(&client, &input).await?;
        assert_eq!(u.id, 12);
        let req = t.only_request();
        assert_eq!((req.method.as_str(), req.target().as_str()), ("POST", "/users/register"));
        assert!(req.body.unwrap().get("inviteToken").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn profile_and_locale_are_patches() -> anyhow::Result<()> {
        let (client, t) = RecordingTransport::replying(user());
        update_locale(&client, &LocaleUpdate { locale: "en-US".into(), timezone: None }).await?;
        let req = t.only_request();
        assert_eq!((req.method.as_str(), req.target().as_str()), ("PATCH", "/users/locale"));
        assert_eq!(req.body, Some(json!({"locale": "en-US"})));

        let (client, t) = RecordingTransport::replying(user());
        update_profile(&client, &ProfileUpdate { first_access: Some(false), ..Default::default() }).await?;
        let req = t.only_request();
        assert_eq!((req.method.as_str(), req.target().as_str()), ("PATCH", "/users/profile"));
        assert_eq!(req.body, Some(json!({"firstAccess": false})));
        Ok(())
    }

    #[tokio::test]
    async fn me_reads_session_user() -> anyhow::Result<()> {
        let (client, t) = RecordingTransport::replying(user());
        let u = me(&client).await?;
        assert_eq!(u.timezone.as_deref(), Some("America/Sao_Paulo"));
        assert_eq!(t.only_request().target(), "/users/me");
        Ok(())
    }

    #[tokio::test]
    async fn unauthenticated_me_fails() {
        let (client, _t) = RecordingTransport::failing(CoreError::Status { status: 401, body: String::new() });
        assert_eq!(me(&client).await.unwrap_err().status(), Some(401));
    }
}
