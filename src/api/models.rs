//! Wire-format data models for the Haven API.
//!
//! Field names mirror the server exactly (`_id`, `locs`, camelCase
//! request keys). The response envelope is inconsistent across
//! endpoints — hotlines and contacts come back bare, shelters and
//! articles wrapped in `{ "data": ... }` — and that asymmetry is kept
//! as-is rather than normalized away from observed server behavior.

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by login/signup/delete responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    pub role: String,
}

/// An SOS contact, scoped to a username. Identity is the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// Contact fields without the server-assigned id, for create/edit bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub message: String,
}

/// A support hotline. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotline {
    #[serde(rename = "_id")]
    pub id: String,
    pub city: String,
    pub country: String,
    pub organisation_name: String,
    pub phone: String,
    pub website: String,
    pub description: String,
}

/// A shelter location. Read-only. Coordinates arrive as `locs: [lng, lat]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    pub place_name: String,
    pub address: String,
    pub contact_person: String,
    pub phone: String,
    #[serde(rename = "locs")]
    pub coordinates: [f64; 2],
}

/// An informational article tagged with violence-type categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub author: String,
    pub text: String,
    pub violence_type: Vec<String>,
    pub url_to_image: String,
}

/// `{ "data": ... }` wrapper used by the shelter and article endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Response of `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: User,
}

/// Response of `POST /signup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    pub token: String,
    pub user: User,
}

/// Response of `DELETE /deleteUser`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
    pub user: User,
}

/// Bare `{ "message": ... }` response (password change).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
