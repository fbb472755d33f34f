//! Account Model
//!
//! One `account` table holds all three role variants, distinguished by the
//! [`Role`] tag. Email is unique across the whole table, so an identity
//! resolves without any cross-collection probe order.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::auth::Role;
use shared::client::UserInfo;

/// Account ID type
pub type AccountId = RecordId;

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Terminated,
}

impl Default for EmploymentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl EmploymentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "On Leave" => Some(Self::OnLeave),
            "Terminated" => Some(Self::Terminated),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }
}

/// Account model matching the document schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AccountId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub status: EmploymentStatus,
    #[serde(default)]
    pub department: String,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub profile_picture: Option<String>,
    /// Manager only: employee references (non-exclusive)
    #[serde(default, with = "serde_helpers::vec_record_id")]
    pub team: Vec<RecordId>,
    /// HR only: permission tags embedded into session claims
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: i64,
}

/// Create account payload (validated registration input)
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    pub phone: Option<String>,
    pub team: Vec<RecordId>,
    pub permissions: Vec<String>,
}

/// Self-service profile update
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub profile_picture: Option<String>,
}

impl Account {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }

    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|t| t.to_string()).unwrap_or_default()
    }
}

impl From<Account> for UserInfo {
    fn from(account: Account) -> Self {
        let id = account.id_string();
        Self {
            id,
            email: account.email,
            name: account.name,
            role: account.role.as_str().to_string(),
            status: account.status.as_str().to_string(),
            department: account.department,
            phone: account.phone,
            emergency_contact: account.emergency_contact,
            profile_picture: account.profile_picture,
            permissions: account.permissions,
            team: account.team.iter().map(|t| t.to_string()).collect(),
            created_at: account.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = Account::hash_password("s3cret-pass").unwrap();
        let account = Account {
            id: None,
            email: "a@x.com".into(),
            hash_pass: hash,
            name: "A".into(),
            role: Role::Employee,
            status: EmploymentStatus::Active,
            department: "Eng".into(),
            phone: None,
            emergency_contact: None,
            profile_picture: None,
            team: vec![],
            permissions: vec![],
            created_at: 0,
        };
        assert!(account.verify_password("s3cret-pass").unwrap());
        assert!(!account.verify_password("wrong").unwrap());
    }

    #[test]
    fn test_hash_never_serialized() {
        let account = Account {
            id: None,
            email: "a@x.com".into(),
            hash_pass: "argon2-hash".into(),
            name: "A".into(),
            role: Role::Hr,
            status: EmploymentStatus::Active,
            department: "People".into(),
            phone: None,
            emergency_contact: None,
            profile_picture: None,
            team: vec![],
            permissions: vec![],
            created_at: 0,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("argon2-hash"));
        assert!(!json.contains("hashPass"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(EmploymentStatus::parse("On Leave"), Some(EmploymentStatus::OnLeave));
        assert_eq!(EmploymentStatus::parse("Retired"), None);
    }
}
