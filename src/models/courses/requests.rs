use super::entities::NAME_MAX_LEN;
use crate::errors::Result;
use crate::models::common::deserialize_double_option;
use crate::utils::validate::FieldErrors;
use serde::Deserialize;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub commission: i32,
    #[serde(default)]
    pub professor_id: Option<i64>,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors
            .text("name", &self.name, NAME_MAX_LEN)
            .check(
                "commission",
                self.commission > 0,
                "Commission must be a positive integer",
            );
        errors.into_result()
    }
}

// 更新课程请求
//
// professor_id: None 表示不修改，Some(None) 表示解除教授关联
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub commission: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub professor_id: Option<Option<i64>>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.name {
            errors.text("name", name, NAME_MAX_LEN);
        }
        if let Some(commission) = self.commission {
            errors.check(
                "commission",
                commission > 0,
                "Commission must be a positive integer",
            );
        }
        errors.into_result()
    }
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub professor_id: Option<i64>,
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_must_be_positive() {
        let req = CreateCourseRequest {
            name: "Django Básico".into(),
            commission: 0,
            professor_id: None,
        };
        let err = req.validate().unwrap_err();
        assert!(err.message().contains("commission"));
    }

    #[test]
    fn test_blank_name_rejected_on_update() {
        let req = UpdateCourseRequest {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
