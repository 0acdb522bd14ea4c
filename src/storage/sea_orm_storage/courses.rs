//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::professors::Entity as Professors;
use crate::errors::{EntidadesError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    professors::entities::Professor,
};
use crate::utils::contains_literal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建课程；教授不存在时外键约束失败
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        req.validate()?;

        let model = ActiveModel {
            name: Set(req.name),
            commission: Set(req.commission),
            professor_id: Set(req.professor_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建课程失败", e))?;

        info!("Course {} ({}) created", result.name, result.id);
        Ok(result.into_course())
    }

    async fn find_course_model(&self, id: i64) -> Result<crate::entity::courses::Model> {
        Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询课程失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("Course {id} does not exist")))
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Course> {
        Ok(self.find_course_model(id).await?.into_course())
    }

    /// 获取课程的负责教授（未指定时为 None）
    pub async fn get_course_professor_impl(&self, course_id: i64) -> Result<Option<Professor>> {
        let course = self.find_course_model(course_id).await?;

        let professor = course
            .find_related(Professors)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询课程教授失败", e))?;

        Ok(professor.map(|m| m.into_professor()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Courses::find();

        // 教授筛选
        if let Some(professor_id) = query.professor_id {
            select = select.filter(Column::ProfessorId.eq(professor_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(contains_literal(Column::Name, term));
        }

        // 排序
        select = select
            .order_by_asc(Column::Name)
            .order_by_asc(Column::Commission)
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EntidadesError::from_db("查询课程总数失败", e))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EntidadesError::from_db("查询课程页数失败", e))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EntidadesError::from_db("查询课程列表失败", e))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出教授名下的全部课程
    pub async fn list_professor_courses_impl(&self, professor_id: i64) -> Result<Vec<Course>> {
        // 教授不存在时返回 NotFound，而不是空列表
        let professor = Professors::find_by_id(professor_id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询教授失败", e))?
            .ok_or_else(|| {
                EntidadesError::not_found(format!("Professor {professor_id} does not exist"))
            })?;

        let courses = professor
            .find_related(Courses)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询教授课程失败", e))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 统计教授名下课程数量
    pub async fn count_professor_courses_impl(&self, professor_id: i64) -> Result<u64> {
        Courses::find()
            .filter(Column::ProfessorId.eq(professor_id))
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计教授课程数量失败", e))
    }

    /// 更新课程信息
    pub async fn update_course_impl(&self, id: i64, update: UpdateCourseRequest) -> Result<Course> {
        update.validate()?;

        let existing = self.find_course_model(id).await?;
        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(commission) = update.commission {
            model.commission = Set(commission);
        }

        if let Some(professor_id) = update.professor_id {
            model.professor_id = Set(professor_id);
        }

        if !model.is_changed() {
            return Ok(existing.into_course());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新课程失败", e))?;

        Ok(result.into_course())
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<()> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("删除课程失败", e))?;

        if result.rows_affected == 0 {
            return Err(EntidadesError::not_found(format!(
                "Course {id} does not exist"
            )));
        }

        info!("Course {} deleted", id);
        Ok(())
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计课程数量失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;
    use super::SeaOrmStorage;
    use crate::models::courses::requests::{
        CourseListQuery, CreateCourseRequest, UpdateCourseRequest,
    };
    use crate::models::professors::{entities::Professor, requests::CreateProfessorRequest};

    async fn seed_professor(storage: &SeaOrmStorage) -> Professor {
        storage
            .create_professor_impl(CreateProfessorRequest {
                first_name: "Juan".into(),
                last_name: "Pérez".into(),
                email: "juan@example.com".into(),
                profession: "Ingeniero".into(),
            })
            .await
            .unwrap()
    }

    fn course(name: &str, commission: i32, professor_id: Option<i64>) -> CreateCourseRequest {
        CreateCourseRequest {
            name: name.into(),
            commission,
            professor_id,
        }
    }

    #[tokio::test]
    async fn test_create_course_with_professor() {
        let storage = memory_storage().await;
        let professor = seed_professor(&storage).await;

        let created = storage
            .create_course_impl(course("Python Avanzado", 101, Some(professor.id)))
            .await
            .unwrap();
        assert_eq!(created.name, "Python Avanzado");
        assert_eq!(created.commission, 101);
        assert_eq!(created.professor_id, Some(professor.id));
        assert_eq!(created.to_string(), "Python Avanzado");

        let owner = storage
            .get_course_professor_impl(created.id)
            .await
            .unwrap();
        assert_eq!(owner, Some(professor));
    }

    #[tokio::test]
    async fn test_course_without_professor() {
        let storage = memory_storage().await;
        let created = storage
            .create_course_impl(course("Django Básico", 102, None))
            .await
            .unwrap();
        assert_eq!(created.professor_id, None);
        assert_eq!(
            storage.get_course_professor_impl(created.id).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_course_with_missing_professor_is_integrity_error() {
        let storage = memory_storage().await;
        let err = storage
            .create_course_impl(course("Huérfano", 1, Some(999)))
            .await
            .unwrap_err();
        assert!(err.is_integrity(), "unexpected error: {err}");
        assert_eq!(storage.count_courses_impl().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_professor_course_set() {
        let storage = memory_storage().await;
        let professor = seed_professor(&storage).await;

        let first = storage
            .create_course_impl(course("Web Development", 201, Some(professor.id)))
            .await
            .unwrap();
        assert_eq!(
            storage
                .count_professor_courses_impl(professor.id)
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            storage
                .list_professor_courses_impl(professor.id)
                .await
                .unwrap(),
            vec![first.clone()]
        );

        storage
            .create_course_impl(course("Mobile Development", 202, Some(professor.id)))
            .await
            .unwrap();
        assert_eq!(
            storage
                .count_professor_courses_impl(professor.id)
                .await
                .unwrap(),
            2
        );
    }

    #[tokio::test]
    async fn test_list_courses_filtered_by_professor() {
        let storage = memory_storage().await;
        let professor = seed_professor(&storage).await;
        storage
            .create_course_impl(course("Python Avanzado", 101, Some(professor.id)))
            .await
            .unwrap();
        storage
            .create_course_impl(course("Django Básico", 102, None))
            .await
            .unwrap();

        let listing = storage
            .list_courses_with_pagination_impl(CourseListQuery {
                professor_id: Some(professor.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "Python Avanzado");

        let all = storage
            .list_courses_with_pagination_impl(CourseListQuery::default())
            .await
            .unwrap();
        // 按名称排序
        assert_eq!(all.items[0].name, "Django Básico");
        assert_eq!(all.pagination.total, 2);
    }

    #[tokio::test]
    async fn test_course_search_treats_percent_literally() {
        let storage = memory_storage().await;
        storage
            .create_course_impl(course("Inglés 100% práctico", 1, None))
            .await
            .unwrap();
        storage
            .create_course_impl(course("Inglés 1000 horas", 2, None))
            .await
            .unwrap();

        let listing = storage
            .list_courses_with_pagination_impl(CourseListQuery {
                search: Some("100%".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].name, "Inglés 100% práctico");
    }

    #[tokio::test]
    async fn test_update_course_detaches_professor() {
        let storage = memory_storage().await;
        let professor = seed_professor(&storage).await;
        let created = storage
            .create_course_impl(course("Python Avanzado", 101, Some(professor.id)))
            .await
            .unwrap();

        let updated = storage
            .update_course_impl(
                created.id,
                UpdateCourseRequest {
                    commission: Some(105),
                    professor_id: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.commission, 105);
        assert_eq!(updated.professor_id, None);

        // 解除关联后删除教授不影响该课程
        storage.delete_professor_impl(professor.id).await.unwrap();
        assert!(storage.get_course_by_id_impl(created.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_course() {
        let storage = memory_storage().await;
        let created = storage
            .create_course_impl(course("Django Básico", 102, None))
            .await
            .unwrap();

        storage.delete_course_impl(created.id).await.unwrap();
        assert!(
            storage
                .get_course_by_id_impl(created.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(
            storage
                .delete_course_impl(created.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
