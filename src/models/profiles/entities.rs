use serde::{Deserialize, Serialize};
use std::fmt;

/// 未设置头像时使用的默认路径
pub const DEFAULT_AVATAR: &str = "avatars/default.png";
pub const AVATAR_MAX_LEN: usize = 255;

// 用户资料实体（每个用户唯一）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub user_id: i64,
    // 所属用户的用户名，用于展示
    pub username: String,
    pub avatar: String,
}

impl Profile {
    pub const VERBOSE_NAME: &'static str = "Perfil";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Perfiles";
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile {}", self.username)
    }
}
