//! User account and role types for the admin views.
//!
//! Accounts are never created locally (registration posts to the backend);
//! this module only models what `GET /users` returns and what the
//! permissions update sends back.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Category names a curator account can be restricted to.
pub const CATEGORY_OPTIONS: [&str; 3] = [
    "MANEJO ECOFISIOLÓGICO E NUTRICIONAL DA CITRICULTURA DE ALTA PERFORMANCE",
    "MANEJO DE NUTRIENTES E AGUA",
    "BIOINSUMOS",
];

/// Access role carried in the JWT and on each account row. The backend
/// has grown roles over time, so unknown values are preserved verbatim
/// rather than rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Cientometria,
    CuradoriaCitrosCana,
    CuradoriaSolos,
    Other(String),
}

impl Role {
    /// Wire spelling of this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Cientometria => "cientometria",
            Self::CuradoriaCitrosCana => "curadoria_citros_cana",
            Self::CuradoriaSolos => "curadoria_solos",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a wire spelling; never fails, unknown roles round-trip.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "cientometria" => Self::Cientometria,
            "curadoria_citros_cana" => Self::CuradoriaCitrosCana,
            "curadoria_solos" => Self::CuradoriaSolos,
            other => Self::Other(other.to_owned()),
        }
    }

    /// User-facing label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Admin => "Admin",
            Self::Cientometria => "Cientometria",
            Self::CuradoriaCitrosCana => "Curador Citros e Cana",
            Self::CuradoriaSolos => "Curador Solos",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this role grants the admin surfaces (registration, user
    /// management, AI logs).
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Roles offered by the registration and permissions forms.
    #[must_use]
    pub fn options() -> [Self; 4] {
        [
            Self::Cientometria,
            Self::CuradoriaCitrosCana,
            Self::CuradoriaSolos,
            Self::Admin,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(raw) => Ok(Self::parse(&raw)),
            other => Err(D::Error::custom(format!(
                "expected role string, got {other}"
            ))),
        }
    }
}

/// One account row from `GET /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    /// Categories this account may curate. Empty means global access.
    #[serde(default, deserialize_with = "crate::wire::string_list")]
    pub allowed_categories: Vec<String>,
}

impl UserAccount {
    /// Display form of the category restriction.
    #[must_use]
    pub fn categories_label(&self) -> String {
        if self.allowed_categories.is_empty() {
            "Todas (Global)".to_owned()
        } else {
            self.allowed_categories.join(", ")
        }
    }
}

fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    crate::wire::opt_string_id(deserializer)?
        .ok_or_else(|| D::Error::custom("missing account id"))
}
