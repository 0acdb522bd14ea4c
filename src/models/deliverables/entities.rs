use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_MAX_LEN: usize = 100;

// 作业交付物实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: i64,
    pub name: String,
    pub due_date: NaiveDate,
    pub delivered: bool,
}

impl Deliverable {
    pub const VERBOSE_NAME: &'static str = "Entregable";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Entregables";
}

// 展示格式: "<名称> - Entregado: True|False"
impl fmt::Display for Deliverable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.delivered { "True" } else { "False" };
        write!(f, "{} - Entregado: {}", self.name, flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_names() {
        assert_eq!(Deliverable::VERBOSE_NAME, "Entregable");
        assert_eq!(Deliverable::VERBOSE_NAME_PLURAL, "Entregables");
    }

    fn deliverable(delivered: bool) -> Deliverable {
        Deliverable {
            id: 1,
            name: "TP1".into(),
            due_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            delivered,
        }
    }

    #[test]
    fn test_display_pending() {
        assert_eq!(deliverable(false).to_string(), "TP1 - Entregado: False");
    }

    #[test]
    fn test_display_delivered() {
        assert_eq!(deliverable(true).to_string(), "TP1 - Entregado: True");
    }
}
