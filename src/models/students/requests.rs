use super::entities::NAME_MAX_LEN;
use crate::errors::Result;
use crate::utils::validate::FieldErrors;
use serde::Deserialize;

// 创建学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors
            .text("first_name", &self.first_name, NAME_MAX_LEN)
            .text("last_name", &self.last_name, NAME_MAX_LEN)
            .email("email", &self.email);
        errors.into_result()
    }
}

// 更新学生请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateStudentRequest {
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
        errors.into_result()
    }
}

// 学生列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
