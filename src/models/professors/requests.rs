use super::entities::{NAME_MAX_LEN, PROFESSION_MAX_LEN};
use crate::errors::Result;
use crate::utils::validate::FieldErrors;
use serde::Deserialize;

// 创建教授请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfessorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profession: String,
}

impl CreateProfessorRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors
            .text("first_name", &self.first_name, NAME_MAX_LEN)
            .text("last_name", &self.last_name, NAME_MAX_LEN)
            .email("email", &self.email)
            .text("profession", &self.profession, PROFESSION_MAX_LEN);
        errors.into_result()
    }
}

// 更新教授请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfessorRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
}

impl UpdateProfessorRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if let Some(ref first_name) = self.first_name {
            errors.text("first_name", first_name, NAME_MAX_LEN);
        }
        if let Some(ref last_name) = self.last_name {
            errors.text("last_name", last_name, NAME_MAX_LEN);
        }
        if let Some(ref email) = self.email {
            errors.email("email", email);
        }
        if let Some(ref profession) = self.profession {
            errors.text("profession", profession, PROFESSION_MAX_LEN);
        }
        errors.into_result()
    }
}

// 教授列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfessorListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateProfessorRequest {
        CreateProfessorRequest {
            first_name: "Juan".into(),
            last_name: "Pérez".into(),
            email: "juan@example.com".into(),
            profession: "Ingeniero".into(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = request();
        req.email = "juan-at-example".into();
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateProfessorRequest::default().validate().is_ok());
    }
}
