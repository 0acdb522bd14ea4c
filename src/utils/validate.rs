use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{EntidadesError, Result};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.@+-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const USERNAME_MAX_LEN: usize = 150;

pub fn validate_username(username: &str) -> std::result::Result<(), &'static str> {
    if username.is_empty() || username.chars().count() > USERNAME_MAX_LEN {
        return Err("Username length must be between 1 and 150 characters");
    }
    // 用户名格式校验：字母、数字以及 @ . + - _
    if !USERNAME_RE.is_match(username) {
        return Err("Username may contain only letters, numbers and @/./+/-/_ characters");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> std::result::Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 非空且不超过 `max_len` 个字符（按字符计数，而非字节）
pub fn validate_text(value: &str, max_len: usize) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("This field cannot be blank".to_string());
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(format!(
            "Ensure this value has at most {max_len} characters (it has {len})"
        ));
    }
    Ok(())
}

/// 字段校验结果，收集全部字段错误后一次性返回
#[derive(Debug, Default, Clone)]
pub struct FieldErrors {
    pub errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, field: &'static str, value: &str, max_len: usize) -> &mut Self {
        if let Err(msg) = validate_text(value, max_len) {
            self.errors.push((field, msg));
        }
        self
    }

    pub fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if let Err(msg) = validate_email(value) {
            self.errors.push((field, msg.to_string()));
        }
        self
    }

    pub fn username(&mut self, field: &'static str, value: &str) -> &mut Self {
        if let Err(msg) = validate_username(value) {
            self.errors.push((field, msg.to_string()));
        }
        self
    }

    pub fn check(&mut self, field: &'static str, ok: bool, msg: &str) -> &mut Self {
        if !ok {
            self.errors.push((field, msg.to_string()));
        }
        self
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_message(&self) -> String {
        self.errors
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EntidadesError::validation(self.error_message()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("maria@example.com").is_ok());
        assert!(validate_email("juan.perez+tp@uni.edu.ar").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("maria").is_err());
        assert!(validate_email("maria@").is_err());
        assert!(validate_email("maria@example").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_email("a@b.c|").is_err());
        assert!(validate_email("a@b.c|m").is_err());
    }

    #[test]
    fn test_text_counts_characters_not_bytes() {
        // 10 个字符，但超过 10 个字节
        assert!(validate_text("Fernández!", 10).is_ok());
        assert!(validate_text("Supercalifragilisticoespialidosamenteultracomplejo", 40).is_err());
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(validate_text("   ", 40).is_err());
        assert!(validate_text("", 40).is_err());
    }

    #[test]
    fn test_usernames() {
        assert!(validate_username("testuser").is_ok());
        assert!(validate_username("ana.m@uni+1").is_ok());
        assert!(validate_username("with space").is_err());
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_field_errors_collects_every_field() {
        let mut errors = FieldErrors::new();
        errors
            .text("first_name", "", 40)
            .text("last_name", "Pirulo", 40)
            .email("email", "nope");
        assert_eq!(errors.errors.len(), 2);
        let message = errors.error_message();
        assert!(message.contains("first_name"));
        assert!(message.contains("email"));

        let err = errors.into_result().unwrap_err();
        assert!(err.is_validation());
    }
}
