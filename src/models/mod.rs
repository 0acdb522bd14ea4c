//! 业务数据模型
//!
//! 与 `entity` 模块中的数据库实体分离：这里定义业务记录、创建/更新请求、
//! 列表查询参数以及各实体的展示格式。

pub mod common;
pub mod courses;
pub mod deliverables;
pub mod professors;
pub mod profiles;
pub mod students;
pub mod users;

pub use common::{PaginatedResponse, PaginationInfo};
