use serde::{Deserialize, Serialize};

use crate::domain::common::lenient;

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Customer,
    Technician,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Customer, Role::Technician];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
            Role::Technician => "technician",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Customer => "Customer",
            Role::Technician => "Technician",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Set for customer accounts.
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub customer_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Please enter email and password".into());
        }
        Ok(())
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err("Please fill in name, email and password".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangePasswordResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Change-password form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn validate(&self) -> Result<ChangePasswordRequest, String> {
        if self.current_password.is_empty() {
            return Err("Please enter your current password".into());
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }
        if self.new_password != self.confirm_password {
            return Err("New password and confirmation do not match".into());
        }
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_from_login() {
        let res: LoginResponse = serde_json::from_str(
            r#"{"token": "abc", "user": {"id": 4, "name": "Somchai", "email": "s@x.io", "role": "customer", "customer_id": "7"}}"#,
        )
        .unwrap();
        assert_eq!(res.user.role, Role::Customer);
        assert_eq!(res.user.customer_id, Some(7));
    }

    #[test]
    fn test_change_password_rules() {
        let mut form = ChangePasswordForm::default();
        assert!(form.validate().is_err());
        form.current_password = "old".into();
        form.new_password = "short".into();
        assert_eq!(
            form.validate().unwrap_err(),
            "New password must be at least 8 characters"
        );
        form.new_password = "longenough".into();
        form.confirm_password = "different".into();
        assert!(form.validate().is_err());
        form.confirm_password = "longenough".into();
        let req = form.validate().unwrap();
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"currentPassword": "old", "newPassword": "longenough"})
        );
    }

    #[test]
    fn test_register_defaults_to_customer() {
        assert_eq!(Role::default(), Role::Customer);
        assert_eq!(Role::from_str_or_default("technician"), Role::Technician);
        assert_eq!(Role::from_str_or_default("root"), Role::Customer);
    }
}
