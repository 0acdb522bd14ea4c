//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod deliverables;
mod professors;
mod profiles;
mod students;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{EntidadesError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database.url, &config.database).await
    }

    /// 连接指定数据库并运行迁移
    pub async fn connect(url: &str, database: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, database).await?
        } else {
            Self::connect_generic(&db_url, database).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EntidadesError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    ///
    /// 内存数据库固定使用单个连接，保证所有操作看到同一个库。
    async fn connect_sqlite(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EntidadesError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory");
        }

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
                .max_connections(database.pool_size.max(1))
                .min_connections(1)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(database.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| EntidadesError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(database.timeout))
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EntidadesError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EntidadesError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教授模块
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor> {
        self.create_professor_impl(professor).await
    }

    async fn get_professor_by_id(&self, id: i64) -> Result<Professor> {
        self.get_professor_by_id_impl(id).await
    }

    async fn list_professors_with_pagination(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse> {
        self.list_professors_with_pagination_impl(query).await
    }

    async fn update_professor(&self, id: i64, update: UpdateProfessorRequest) -> Result<Professor> {
        self.update_professor_impl(id, update).await
    }

    async fn delete_professor(&self, id: i64) -> Result<()> {
        self.delete_professor_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Course> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_professor(&self, course_id: i64) -> Result<Option<Professor>> {
        self.get_course_professor_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_professor_courses(&self, professor_id: i64) -> Result<Vec<Course>> {
        self.list_professor_courses_impl(professor_id).await
    }

    async fn count_professor_courses(&self, professor_id: i64) -> Result<u64> {
        self.count_professor_courses_impl(professor_id).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Course> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        self.delete_course_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Student> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(&self, id: i64, update: UpdateStudentRequest) -> Result<Student> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete_student_impl(id).await
    }

    // 交付物模块
    async fn create_deliverable(
        &self,
        deliverable: CreateDeliverableRequest,
    ) -> Result<Deliverable> {
        self.create_deliverable_impl(deliverable).await
    }

    async fn get_deliverable_by_id(&self, id: i64) -> Result<Deliverable> {
        self.get_deliverable_by_id_impl(id).await
    }

    async fn list_deliverables_with_pagination(
        &self,
        query: DeliverableListQuery,
    ) -> Result<DeliverableListResponse> {
        self.list_deliverables_with_pagination_impl(query).await
    }

    async fn update_deliverable(
        &self,
        id: i64,
        update: UpdateDeliverableRequest,
    ) -> Result<Deliverable> {
        self.update_deliverable_impl(id, update).await
    }

    async fn mark_deliverable_delivered(&self, id: i64, delivered: bool) -> Result<Deliverable> {
        self.mark_deliverable_delivered_impl(id, delivered).await
    }

    async fn delete_deliverable(&self, id: i64) -> Result<()> {
        self.delete_deliverable_impl(id).await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<User> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_with_profile(&self, id: i64) -> Result<UserWithProfile> {
        self.get_user_with_profile_impl(id).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<User> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<()> {
        self.delete_user_impl(id).await
    }

    // 用户资料模块
    async fn create_profile(&self, profile: CreateProfileRequest) -> Result<Profile> {
        self.create_profile_impl(profile).await
    }

    async fn get_profile_by_id(&self, id: i64) -> Result<Profile> {
        self.get_profile_by_id_impl(id).await
    }

    async fn get_profile_by_user_id(&self, user_id: i64) -> Result<Profile> {
        self.get_profile_by_user_id_impl(user_id).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Profile> {
        self.update_profile_impl(id, update).await
    }

    async fn delete_profile(&self, id: i64) -> Result<()> {
        self.delete_profile_impl(id).await
    }

    async fn entity_counts(&self) -> Result<EntityCounts> {
        Ok(EntityCounts {
            professors: self.count_professors_impl().await?,
            courses: self.count_courses_impl().await?,
            students: self.count_students_impl().await?,
            deliverables: self.count_deliverables_impl().await?,
            users: self.count_users_impl().await?,
            profiles: self.count_profiles_impl().await?,
        })
    }
}
