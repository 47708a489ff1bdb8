//! In-memory user store standing in for PostgreSQL in integration tests.

use async_trait::async_trait;
use chrono::Utc;
use identity_core::{NewUser, Role, StoreError, User, UserStore, UserWithRole};
use std::sync::Mutex;

pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    roles: Vec<Role>,
}

impl MemoryUserStore {
    pub fn new(roles: Vec<Role>) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            roles,
        }
    }

    pub fn with_user(self, user: User) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    fn role(&self, id: i32) -> Option<Role> {
        self.roles.iter().find(|role| role.id == id).cloned()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserWithRole>, StoreError> {
        let users = self.users.lock().unwrap();
        let Some(user) = users.iter().find(|user| user.email == email).cloned() else {
            return Ok(None);
        };
        // The role reference must resolve; a dangling id is a store fault.
        let role = self.role(user.id_role).ok_or(sqlx::Error::RowNotFound)?;
        Ok(Some(UserWithRole { user, role }))
    }

    async fn create(&self, user: &NewUser) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let id = i32::try_from(users.len()).unwrap() + 1;
        users.push(User {
            id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            phone: user.phone.clone(),
            question: user.question.clone(),
            answer: user.answer.clone(),
            sign_up_date: Some(Utc::now()),
            last_login_date: None,
            id_role: user.id_role,
            id_status: user.id_status,
            email_verification: false,
        });
        Ok(())
    }
}
