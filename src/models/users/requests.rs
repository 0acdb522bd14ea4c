use crate::errors::Result;
use crate::utils::validate::FieldErrors;
use serde::Deserialize;

// 用户创建请求（password 为明文，存储前哈希）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.username("username", &self.username);
        // 邮箱可以留空，填写时必须合法
        if !self.email.is_empty() {
            errors.email("email", &self.email);
        }
        errors.check(
            "password",
            !self.password.is_empty(),
            "Password cannot be blank",
        );
        errors.into_result()
    }
}

// 用户更新请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if let Some(ref email) = self.email
            && !email.is_empty()
        {
            errors.email("email", email);
        }
        if let Some(ref password) = self.password {
            errors.check("password", !password.is_empty(), "Password cannot be blank");
        }
        errors.into_result()
    }
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
