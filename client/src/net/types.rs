//! Wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads. Optional fields default so
//! older or leaner backend builds still deserialize; status strings the client
//! does not recognize are preserved for display instead of failing the parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Upper-cased first character of the username, for avatars.
    #[must_use]
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

fn default_true() -> bool {
    true
}

/// OAuth2 password-flow response from `POST /auth/token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
}

/// Body for `POST /users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Lifecycle status of a generated model or generation job.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    /// A status string this client does not know, kept verbatim.
    Other(String),
}

impl ModelStatus {
    /// `completed` and `failed` end a generation job.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for ModelStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(raw),
        }
    }
}

impl From<ModelStatus> for String {
    fn from(status: ModelStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated-model record from `GET /models/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBModel {
    pub id: String,
    pub name: String,
    pub prompt: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub status: ModelStatus,
    #[serde(default)]
    pub preview_url: Option<String>,
}

impl BBModel {
    /// Suggested filename for downloads.
    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{}.bbmodel", self.name)
    }
}

/// Job-status envelope from `POST /models/generate` and `GET /models/status/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBModelResponse {
    pub model_id: String,
    pub status: ModelStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Kind of model to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelType {
    #[default]
    Character,
    Animal,
    Vehicle,
    Prop,
    Environment,
}

impl ModelType {
    pub const ALL: [Self; 5] = [Self::Character, Self::Animal, Self::Vehicle, Self::Prop, Self::Environment];

    /// Value sent in the `model_type` form field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Animal => "animal",
            Self::Vehicle => "vehicle",
            Self::Prop => "prop",
            Self::Environment => "environment",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Animal => "Animal",
            Self::Vehicle => "Vehicle",
            Self::Prop => "Prop",
            Self::Environment => "Environment",
        }
    }

    /// Parse a `<select>` value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Optional animation to generate alongside the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationType {
    Walk,
    Idle,
    Attack,
    Custom,
}

impl AnimationType {
    pub const ALL: [Self; 4] = [Self::Walk, Self::Idle, Self::Attack, Self::Custom];

    /// Value sent in the `animation_type` form field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Idle => "idle",
            Self::Attack => "attack",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Walk => "Walking",
            Self::Idle => "Idle",
            Self::Attack => "Attack",
            Self::Custom => "Custom",
        }
    }

    /// Parse a `<select>` value; the empty string means no animation.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// A validated generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub model_type: ModelType,
    pub animation_type: Option<AnimationType>,
}

impl GenerateRequest {
    /// Multipart fields in submission order. `animation_type` is omitted when unset.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("prompt", self.prompt.clone()), ("model_type", self.model_type.as_str().to_owned())];
        if let Some(animation) = self.animation_type {
            fields.push(("animation_type", animation.as_str().to_owned()));
        }
        fields
    }
}
