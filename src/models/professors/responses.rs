use super::entities::Professor;
use crate::models::common::PaginatedResponse;

// 教授列表响应
pub type ProfessorListResponse = PaginatedResponse<Professor>;
