//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{EntidadesError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::contains_literal;
use sea_orm::{
    ActiveModelTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{info, warn};

impl SeaOrmStorage {
    /// 创建学生：先校验邮箱格式与姓名长度，校验失败不会写入数据库
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        if let Err(e) = req.validate() {
            warn!("Rejected student: {}", e);
            return Err(e);
        }

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建学生失败", e))?;

        info!("Student {} created", result.id);
        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Student> {
        Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询学生失败", e))?
            .map(|m| m.into_student())
            .ok_or_else(|| EntidadesError::not_found(format!("Student {id} does not exist")))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_literal(Column::FirstName, term))
                    .add(contains_literal(Column::LastName, term))
                    .add(contains_literal(Column::Email, term)),
            );
        }

        select = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EntidadesError::from_db("查询学生总数失败", e))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EntidadesError::from_db("查询学生页数失败", e))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EntidadesError::from_db("查询学生列表失败", e))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Student> {
        update.validate()?;

        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询学生失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("Student {id} does not exist")))?;

        let mut model = existing.clone().into_active_model();

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if !model.is_changed() {
            return Ok(existing.into_student());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新学生失败", e))?;

        Ok(result.into_student())
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<()> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("删除学生失败", e))?;

        if result.rows_affected == 0 {
            return Err(EntidadesError::not_found(format!(
                "Student {id} does not exist"
            )));
        }

        info!("Student {} deleted", id);
        Ok(())
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计学生数量失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;
    use crate::models::students::requests::{
        CreateStudentRequest, StudentListQuery, UpdateStudentRequest,
    };

    fn maria() -> CreateStudentRequest {
        CreateStudentRequest {
            first_name: "María".into(),
            last_name: "González".into(),
            email: "maria@example.com".into(),
        }
    }

    #[tokio::test]
    async fn test_create_student() {
        let storage = memory_storage().await;
        let student = storage.create_student_impl(maria()).await.unwrap();

        assert_eq!(student.first_name, "María");
        assert_eq!(student.last_name, "González");
        assert_eq!(student.email, "maria@example.com");
        assert_eq!(student.to_string(), "María González");
        assert_eq!(
            storage.get_student_by_id_impl(student.id).await.unwrap(),
            student
        );
    }

    #[tokio::test]
    async fn test_long_name_never_persisted() {
        let storage = memory_storage().await;
        let long = "Supercalifragilisticoespialidosamenteultracomplejo";
        let err = storage
            .create_student_impl(CreateStudentRequest {
                first_name: long.into(),
                last_name: long.into(),
                email: "maria@example.com".into(),
            })
            .await
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(storage.count_students_impl().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_malformed_email_never_persisted() {
        let storage = memory_storage().await;
        let mut req = maria();
        req.email = "maria.example.com".into();

        let err = storage.create_student_impl(req).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.count_students_impl().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_student_validates_before_writing() {
        let storage = memory_storage().await;
        let student = storage.create_student_impl(maria()).await.unwrap();

        let err = storage
            .update_student_impl(
                student.id,
                UpdateStudentRequest {
                    last_name: Some("x".repeat(41)),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            storage
                .get_student_by_id_impl(student.id)
                .await
                .unwrap()
                .last_name,
            "González"
        );

        let updated = storage
            .update_student_impl(
                student.id,
                UpdateStudentRequest {
                    email: Some("maria.gonzalez@example.com".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "maria.gonzalez@example.com");
    }

    #[tokio::test]
    async fn test_list_and_delete_students() {
        let storage = memory_storage().await;
        let maria = storage.create_student_impl(maria()).await.unwrap();
        storage
            .create_student_impl(CreateStudentRequest {
                first_name: "Laura".into(),
                last_name: "Fernández".into(),
                email: "laura@example.com".into(),
            })
            .await
            .unwrap();

        let listing = storage
            .list_students_with_pagination_impl(StudentListQuery::default())
            .await
            .unwrap();
        assert_eq!(listing.items[0].to_string(), "Laura Fernández");
        assert_eq!(listing.items[1].to_string(), "María González");

        storage.delete_student_impl(maria.id).await.unwrap();
        assert!(
            storage
                .get_student_by_id_impl(maria.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert_eq!(storage.count_students_impl().await.unwrap(), 1);
    }
}
