use super::entities::Profile;
use crate::models::users::entities::User;
use serde::Serialize;

// 用户及其资料（一对一反向访问）
#[derive(Debug, Clone, Serialize)]
pub struct UserWithProfile {
    pub user: User,
    pub profile: Option<Profile>,
}
