//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_entidades_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum EntidadesError {
            $($variant(String),)*
        }

        impl EntidadesError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EntidadesError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EntidadesError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EntidadesError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EntidadesError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EntidadesError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_entidades_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    Integrity("E005", "Integrity Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    Password("E008", "Password Hashing Error"),
}

impl EntidadesError {
    /// 按数据库错误分类：约束冲突归为 Integrity，其余为 DatabaseOperation
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                EntidadesError::integrity(format!("{context}: 唯一约束冲突: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                EntidadesError::integrity(format!("{context}: 外键约束冲突: {detail}"))
            }
            _ => EntidadesError::database_operation(format!("{context}: {err}")),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EntidadesError::Validation(_))
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, EntidadesError::Integrity(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EntidadesError::NotFound(_))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EntidadesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EntidadesError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for EntidadesError {
    fn from(err: DbErr) -> Self {
        EntidadesError::from_db("数据库操作失败", err)
    }
}

impl From<serde_json::Error> for EntidadesError {
    fn from(err: serde_json::Error) -> Self {
        EntidadesError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EntidadesError>;
