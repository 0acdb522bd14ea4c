use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_MAX_LEN: usize = 40;
pub const PROFESSION_MAX_LEN: usize = 100;

// 教授实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub profession: String,
}

impl Professor {
    pub const VERBOSE_NAME: &'static str = "Profesor";
    pub const VERBOSE_NAME_PLURAL: &'static str = "Profesores";
}

impl fmt::Display for Professor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_full_name() {
        let professor = Professor {
            id: 1,
            first_name: "Ana".into(),
            last_name: "Martínez".into(),
            email: "ana@example.com".into(),
            profession: "Doctora en Ciencias".into(),
        };
        assert_eq!(professor.to_string(), "Ana Martínez");
    }

    #[test]
    fn test_verbose_names() {
        assert_eq!(Professor::VERBOSE_NAME, "Profesor");
        assert_eq!(Professor::VERBOSE_NAME_PLURAL, "Profesores");
    }
}
