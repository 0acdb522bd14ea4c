use super::entities::Student;
use crate::models::common::PaginatedResponse;

// 学生列表响应
pub type StudentListResponse = PaginatedResponse<Student>;
