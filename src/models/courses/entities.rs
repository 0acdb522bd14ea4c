use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_MAX_LEN: usize = 100;

// 课程实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    // 分班（comisión）编号
    pub commission: i32,
    // 负责教授，可为空
    pub professor_id: Option<i64>,
}

impl Course {
    pub const VERBOSE_NAME: &'static str = "Curso";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Cursos";
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_names() {
        assert_eq!(Course::VERBOSE_NAME, "Curso");
        assert_eq!(Course::VERBOSE_NAME_PLURAL, "Cursos");
    }

    #[test]
    fn test_display_is_name() {
        let course = Course {
            id: 1,
            name: "Python Avanzado".into(),
            commission: 101,
            professor_id: None,
        };
        assert_eq!(course.to_string(), "Python Avanzado");
    }
}
