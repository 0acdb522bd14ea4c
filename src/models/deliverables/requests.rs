use super::entities::NAME_MAX_LEN;
use crate::errors::Result;
use crate::utils::validate::FieldErrors;
use chrono::NaiveDate;
use serde::Deserialize;

// 创建交付物请求；delivered 默认为 false
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDeliverableRequest {
    pub name: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub delivered: bool,
}

impl CreateDeliverableRequest {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            due_date,
            delivered: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        errors.text("name", &self.name, NAME_MAX_LEN);
        errors.into_result()
    }
}

// 更新交付物请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDeliverableRequest {
    pub name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub delivered: Option<bool>,
}

impl UpdateDeliverableRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = FieldErrors::new();
        if let Some(ref name) = self.name {
            errors.text("name", name, NAME_MAX_LEN);
        }
        errors.into_result()
    }
}

// 交付物列表查询参数（用于存储层）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeliverableListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub delivered: Option<bool>,
    // 截止日期不晚于该日期
    pub due_before: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_not_delivered() {
        let req = CreateDeliverableRequest::new(
            "Trabajo Práctico 1",
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        assert!(!req.delivered);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_missing_flag_deserializes_as_false() {
        let req: CreateDeliverableRequest =
            serde_json::from_str(r#"{"name": "TP2", "due_date": "2025-03-01"}"#).unwrap();
        assert!(!req.delivered);
        assert_eq!(req.due_date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }
}
