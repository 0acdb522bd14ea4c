use super::entities::{AVATAR_MAX_LEN, DEFAULT_AVATAR};
use crate::errors::Result;
use crate::utils::validate::FieldErrors;
use serde::Deserialize;

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

// 创建用户资料请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub user_id: i64,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

impl CreateProfileRequest {
    /// 使用默认头像
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            avatar: default_avatar(),
        }
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.text("avatar", &self.avatar, AVATAR_MAX_LEN);
        errors.into_result()
    }
}

// 更新用户资料请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub avatar: Option<String>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if let Some(ref avatar) = self.avatar {
            errors.text("avatar", avatar, AVATAR_MAX_LEN);
        }
        errors.into_result()
    }
}
