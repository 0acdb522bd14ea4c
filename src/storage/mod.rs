use std::sync::Arc;

use crate::models::{
    common::EntityCounts,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    deliverables::{
        entities::Deliverable,
        requests::{CreateDeliverableRequest, DeliverableListQuery, UpdateDeliverableRequest},
        responses::DeliverableListResponse,
    },
    professors::{
        entities::Professor,
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
    profiles::{
        entities::Profile,
        requests::{CreateProfileRequest, UpdateProfileRequest},
        responses::UserWithProfile,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 实体存储接口
///
/// - 创建前先做字段校验，失败返回 `Validation`，不会写入数据库
/// - 唯一约束、外键约束冲突返回 `Integrity`
/// - 按 ID 查询、更新、删除不存在的记录返回 `NotFound`
/// - 删除教授会在同一事务中删除其全部课程；删除用户会删除其资料
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教授管理方法
    // 创建教授
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor>;
    // 通过ID获取教授
    async fn get_professor_by_id(&self, id: i64) -> Result<Professor>;
    // 列出教授（按姓升序、名降序）
    async fn list_professors_with_pagination(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse>;
    // 更新教授信息
    async fn update_professor(&self, id: i64, update: UpdateProfessorRequest) -> Result<Professor>;
    // 删除教授（级联删除课程）
    async fn delete_professor(&self, id: i64) -> Result<()>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Course>;
    // 获取课程的负责教授
    async fn get_course_professor(&self, course_id: i64) -> Result<Option<Professor>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出教授名下的全部课程
    async fn list_professor_courses(&self, professor_id: i64) -> Result<Vec<Course>>;
    // 统计教授名下课程数量
    async fn count_professor_courses(&self, professor_id: i64) -> Result<u64>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Course>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<()>;

    /// 学生管理方法
    // 创建学生（先校验邮箱与姓名长度）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Student>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest) -> Result<Student>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<()>;

    /// 交付物管理方法
    // 创建交付物
    async fn create_deliverable(&self, deliverable: CreateDeliverableRequest)
    -> Result<Deliverable>;
    // 通过ID获取交付物
    async fn get_deliverable_by_id(&self, id: i64) -> Result<Deliverable>;
    // 列出交付物
    async fn list_deliverables_with_pagination(
        &self,
        query: DeliverableListQuery,
    ) -> Result<DeliverableListResponse>;
    // 更新交付物
    async fn update_deliverable(
        &self,
        id: i64,
        update: UpdateDeliverableRequest,
    ) -> Result<Deliverable>;
    // 设置是否已交付
    async fn mark_deliverable_delivered(&self, id: i64, delivered: bool) -> Result<Deliverable>;
    // 删除交付物
    async fn delete_deliverable(&self, id: i64) -> Result<()>;

    /// 用户管理方法
    // 创建用户（密码哈希后存储）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户
    async fn get_user_by_id(&self, id: i64) -> Result<User>;
    // 通过用户名获取用户
    async fn get_user_by_username(&self, username: &str) -> Result<User>;
    // 获取用户及其资料
    async fn get_user_with_profile(&self, id: i64) -> Result<UserWithProfile>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<User>;
    // 删除用户（级联删除资料）
    async fn delete_user(&self, id: i64) -> Result<()>;

    /// 用户资料管理方法
    // 创建用户资料（每个用户仅一份）
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile>;
    // 通过ID获取资料
    async fn get_profile_by_id(&self, id: i64) -> Result<Profile>;
    // 通过用户ID获取资料
    async fn get_profile_by_user_id(&self, user_id: i64) -> Result<Profile>;
    // 更新用户资料
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Profile>;
    // 删除用户资料
    async fn delete_profile(&self, id: i64) -> Result<()>;

    // 统计各实体数量
    async fn entity_counts(&self) -> Result<EntityCounts>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
