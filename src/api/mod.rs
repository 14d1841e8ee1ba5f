//! Typed resource client for the Haven backend.
//!
//! One method per server operation, each performing exactly one HTTP
//! call through the shared [`ApiSession`]. Transport failures and
//! non-2xx replies propagate unchanged to the caller; there is no
//! retry logic and no client-side caching. This facade is the only
//! sanctioned way for UI code to reach the backend.

pub mod models;

pub use models::{
    Article, Contact, ContactDraft, DataEnvelope, DeleteUserResponse, Hotline, LoginResponse,
    MessageResponse, Shelter, SignupResponse, User,
};

use crate::client::{send_json, ApiSession};
use crate::error::ApiError;
use reqwest::Method;

/// Resource API facade over the authenticated session.
pub struct ApiClient {
    session: ApiSession,
}

impl ApiClient {
    pub fn new(session: ApiSession) -> Self {
        Self { session }
    }

    // ── Read-only resources ──────────────────────────────────────

    /// `GET /hotlines`, optionally filtered by a free-text search term.
    pub async fn hotlines(&self, search: Option<&str>) -> Result<Vec<Hotline>, ApiError> {
        let mut req = self.session.request(Method::GET, "/hotlines").await?;
        if let Some(term) = search {
            req = req.query(&[("searchTerm", term)]);
        }
        send_json(req).await
    }

    /// `GET /shelters`. The server wraps the list in a `data` envelope.
    pub async fn shelters(&self) -> Result<DataEnvelope<Vec<Shelter>>, ApiError> {
        let req = self.session.request(Method::GET, "/shelters").await?;
        send_json(req).await
    }

    /// `GET /articles`. The server wraps the list in a `data` envelope.
    pub async fn articles(&self) -> Result<DataEnvelope<Vec<Article>>, ApiError> {
        let req = self.session.request(Method::GET, "/articles").await?;
        send_json(req).await
    }

    /// `GET /articles/{id}`. The server returns a one-element list
    /// inside the same `data` envelope as the bulk fetch.
    pub async fn article_by_id(&self, id: &str) -> Result<DataEnvelope<Vec<Article>>, ApiError> {
        let req = self
            .session
            .request(Method::GET, &format!("/articles/{id}"))
            .await?;
        send_json(req).await
    }

    // ── Account operations ───────────────────────────────────────

    /// `POST /login` with `{email, password}`.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = self
            .session
            .request(Method::POST, "/login")
            .await?
            .json(&serde_json::json!({ "email": email, "password": password }));
        send_json(req).await
    }

    /// `POST /signup` with `{email, password, username}`.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<SignupResponse, ApiError> {
        let req = self
            .session
            .request(Method::POST, "/signup")
            .await?
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "username": username,
            }));
        send_json(req).await
    }

    /// `DELETE /deleteUser?username=...`.
    pub async fn delete_user(&self, username: &str) -> Result<DeleteUserResponse, ApiError> {
        let req = self
            .session
            .request(Method::DELETE, "/deleteUser")
            .await?
            .query(&[("username", username)]);
        send_json(req).await
    }

    /// `POST /changePassword` with `{email, oldPassword, password}`.
    pub async fn change_password(
        &self,
        email: &str,
        old_password: &str,
        password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let req = self
            .session
            .request(Method::POST, "/changePassword")
            .await?
            .json(&serde_json::json!({
                "email": email,
                "oldPassword": old_password,
                "password": password,
            }));
        send_json(req).await
    }

    // ── SOS contacts ─────────────────────────────────────────────

    /// `GET /users/{username}/contacts` — the bare contact list,
    /// returned in server order.
    pub async fn sos_contacts(&self, username: &str) -> Result<Vec<Contact>, ApiError> {
        let req = self
            .session
            .request(Method::GET, &format!("/users/{username}/contacts"))
            .await?;
        send_json(req).await
    }

    /// `DELETE /users/{username}/contacts/{id}` — returns the remaining
    /// list (possibly empty). A repeat delete surfaces whatever the
    /// server replies; the client adds nothing.
    pub async fn delete_sos_contact(
        &self,
        username: &str,
        id: &str,
    ) -> Result<Vec<Contact>, ApiError> {
        let req = self
            .session
            .request(Method::DELETE, &format!("/users/{username}/contacts/{id}"))
            .await?;
        send_json(req).await
    }

    /// `PATCH /users/{username}/contacts/` — creates a contact and
    /// returns the list containing it with its server-assigned id.
    /// The trailing slash is part of the server route.
    pub async fn add_sos_contact(
        &self,
        username: &str,
        draft: &ContactDraft,
    ) -> Result<Vec<Contact>, ApiError> {
        let req = self
            .session
            .request(Method::PATCH, &format!("/users/{username}/contacts/"))
            .await?
            .json(draft);
        send_json(req).await
    }

    /// `PATCH /users/{username}/contacts/{id}` — returns the updated contact.
    pub async fn edit_sos_contact(
        &self,
        username: &str,
        draft: &ContactDraft,
        id: &str,
    ) -> Result<Contact, ApiError> {
        let req = self
            .session
            .request(Method::PATCH, &format!("/users/{username}/contacts/{id}"))
            .await?
            .json(draft);
        send_json(req).await
    }
}
