//! 教授存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::professors::{ActiveModel, Column, Entity as Professors};
use crate::errors::{EntidadesError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    professors::{
        entities::Professor,
        requests::{CreateProfessorRequest, ProfessorListQuery, UpdateProfessorRequest},
        responses::ProfessorListResponse,
    },
};
use crate::utils::contains_literal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

impl SeaOrmStorage {
    /// 创建教授
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<Professor> {
        req.validate()?;

        let model = ActiveModel {
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            profession: Set(req.profession),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建教授失败", e))?;

        info!("Professor {} created", result.id);
        Ok(result.into_professor())
    }

    /// 通过 ID 获取教授
    pub async fn get_professor_by_id_impl(&self, id: i64) -> Result<Professor> {
        let result = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询教授失败", e))?;

        result
            .map(|m| m.into_professor())
            .ok_or_else(|| EntidadesError::not_found(format!("Professor {id} does not exist")))
    }

    /// 分页列出教授，默认排序：姓升序，名降序
    pub async fn list_professors_with_pagination_impl(
        &self,
        query: ProfessorListQuery,
    ) -> Result<ProfessorListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Professors::find();

        // 搜索条件
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

        // 排序
        select = select
            .order_by_asc(Column::LastName)
            .order_by_desc(Column::FirstName)
            .order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EntidadesError::from_db("查询教授总数失败", e))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EntidadesError::from_db("查询教授页数失败", e))?;

        let professors = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EntidadesError::from_db("查询教授列表失败", e))?;

        Ok(ProfessorListResponse {
            items: professors.into_iter().map(|m| m.into_professor()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教授信息
    pub async fn update_professor_impl(
        &self,
        id: i64,
        update: UpdateProfessorRequest,
    ) -> Result<Professor> {
        update.validate()?;

        let existing = Professors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询教授失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("Professor {id} does not exist")))?;

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

        if let Some(profession) = update.profession {
            model.profession = Set(profession);
        }

        if !model.is_changed() {
            return Ok(existing.into_professor());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新教授失败", e))?;

        Ok(result.into_professor())
    }

    /// 删除教授，同一事务内删除其全部课程
    pub async fn delete_professor_impl(&self, id: i64) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EntidadesError::from_db("开启事务失败", e))?;

        let courses = Courses::delete_many()
            .filter(CourseColumn::ProfessorId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EntidadesError::from_db("删除教授课程失败", e))?;

        let result = Professors::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| EntidadesError::from_db("删除教授失败", e))?;

        if result.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| EntidadesError::from_db("回滚事务失败", e))?;
            return Err(EntidadesError::not_found(format!(
                "Professor {id} does not exist"
            )));
        }

        txn.commit()
            .await
            .map_err(|e| EntidadesError::from_db("提交事务失败", e))?;

        info!(
            "Professor {} deleted together with {} course(s)",
            id, courses.rows_affected
        );
        Ok(())
    }

    /// 统计教授数量
    pub async fn count_professors_impl(&self) -> Result<u64> {
        let count = Professors::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计教授数量失败", e))?;

        debug!("{} professor(s) in store", count);
        Ok(count)
    }
}
