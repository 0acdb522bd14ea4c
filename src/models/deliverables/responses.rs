use super::entities::Deliverable;
use crate::models::common::PaginatedResponse;

// 交付物列表响应
pub type DeliverableListResponse = PaginatedResponse<Deliverable>;
