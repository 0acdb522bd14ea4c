use serde::{Deserialize, Serialize};
use std::fmt;

/// 名、姓的最大字符数；超出者在持久化之前即校验失败
pub const NAME_MAX_LEN: usize = 40;

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Student {
    pub const VERBOSE_NAME: &'static str = "Estudiante";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Estudiantes";
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
