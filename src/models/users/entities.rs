use serde::{Deserialize, Serialize};
use std::fmt;

// 用户账号实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub const VERBOSE_NAME: &'static str = "Usuario";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Usuarios";

    /// 校验明文密码是否与存储的哈希匹配
    pub fn check_password(&self, password: &str) -> bool {
        crate::utils::password::verify_password(password, &self.password_hash)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_names() {
        assert_eq!(User::VERBOSE_NAME, "Usuario");
        assert_eq!(User::VERBOSE_NAME_PLURAL, "Usuarios");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "testuser".into(),
            email: "test@example.com".into(),
            password_hash: "$argon2id$secret".into(),
            is_active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert_eq!(user.to_string(), "testuser");
    }
}
