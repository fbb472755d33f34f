//! Account Repository
//!
//! Identity resolution is one indexed lookup against the single `account`
//! table — no per-role collection probing, no priority order.

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Account, AccountCreate, EmploymentStatus, ProfileUpdate};

const TABLE: &str = "account";

#[derive(Clone)]
pub struct AccountRepository {
    base: BaseRepository,
}

impl AccountRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Resolve an identity by email across all role variants
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Account>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM account WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let accounts: Vec<Account> = result.take(0)?;
        Ok(accounts.into_iter().next())
    }

    /// Find account by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Account>> {
        let thing = self.base.parse_id(id, TABLE)?;
        let account: Option<Account> = self.base.db().select(thing).await?;
        Ok(account)
    }

    /// List all employee accounts (the directory)
    pub async fn find_all_employees(&self) -> RepoResult<Vec<Account>> {
        let employees: Vec<Account> = self
            .base
            .db()
            .query("SELECT * FROM account WHERE role = 'employee' ORDER BY name")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Create a new account
    ///
    /// The email must be unique across every role variant; a unique index on
    /// the table backs this check against concurrent registrations.
    pub async fn create(&self, data: AccountCreate) -> RepoResult<Account> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' is already registered",
                data.email
            )));
        }

        let hash_pass = Account::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE account SET
                    email = $email,
                    hashPass = $hash_pass,
                    name = $name,
                    role = $role,
                    status = 'Active',
                    department = $department,
                    phone = $phone,
                    emergencyContact = NONE,
                    profilePicture = NONE,
                    team = $team,
                    permissions = $permissions,
                    createdAt = $created_at
                RETURN AFTER"#,
            )
            .bind(("email", data.email))
            .bind(("hash_pass", hash_pass))
            .bind(("name", data.name))
            .bind(("role", data.role))
            .bind(("department", data.department))
            .bind(("phone", data.phone))
            .bind(("team", data.team))
            .bind(("permissions", data.permissions))
            .bind(("created_at", shared::util::now_millis()))
            .await?;

        let created: Option<Account> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create account".to_string()))
    }

    /// Update the caller's own profile fields
    pub async fn update_profile(&self, id: &str, data: ProfileUpdate) -> RepoResult<Account> {
        let thing = self.base.parse_id(id, TABLE)?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    phone = IF $has_phone THEN $phone ELSE phone END,
                    emergencyContact = IF $has_emergency THEN $emergency ELSE emergencyContact END,
                    profilePicture = IF $has_picture THEN $picture ELSE profilePicture END
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("has_phone", data.phone.is_some()))
            .bind(("phone", data.phone))
            .bind(("has_emergency", data.emergency_contact.is_some()))
            .bind(("emergency", data.emergency_contact))
            .bind(("has_picture", data.profile_picture.is_some()))
            .bind(("picture", data.profile_picture))
            .await?;

        result
            .take::<Option<Account>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", id)))
    }

    /// Set an employee's employment status
    ///
    /// Only employee accounts are valid targets; a manager/hr id comes back
    /// not-found rather than silently changing a non-employee record.
    pub async fn update_status(
        &self,
        id: &str,
        status: EmploymentStatus,
    ) -> RepoResult<Account> {
        let thing = self.base.parse_id(id, TABLE)?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status WHERE role = 'employee' RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?;

        result
            .take::<Option<Account>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// A manager's team as typed record ids
    pub async fn team_of(&self, manager_id: &str) -> RepoResult<Vec<RecordId>> {
        let manager = self
            .find_by_id(manager_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Account {} not found", manager_id)))?;
        Ok(manager.team)
    }
}
