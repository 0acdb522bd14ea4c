//! 交付物存储操作

use super::SeaOrmStorage;
use crate::entity::deliverables::{ActiveModel, Column, Entity as Deliverables};
use crate::errors::{EntidadesError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    deliverables::{
        entities::Deliverable,
        requests::{CreateDeliverableRequest, DeliverableListQuery, UpdateDeliverableRequest},
        responses::DeliverableListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建交付物
    pub async fn create_deliverable_impl(
        &self,
        req: CreateDeliverableRequest,
    ) -> Result<Deliverable> {
        req.validate()?;

        let model = ActiveModel {
            name: Set(req.name),
            due_date: Set(req.due_date),
            delivered: Set(req.delivered),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建交付物失败", e))?;

        info!("Deliverable {} created: {}", result.id, result.name);
        Ok(result.into_deliverable())
    }

    /// 通过 ID 获取交付物
    pub async fn get_deliverable_by_id_impl(&self, id: i64) -> Result<Deliverable> {
        Deliverables::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询交付物失败", e))?
            .map(|m| m.into_deliverable())
            .ok_or_else(|| EntidadesError::not_found(format!("Deliverable {id} does not exist")))
    }

    /// 分页列出交付物，按截止日期升序
    pub async fn list_deliverables_with_pagination_impl(
        &self,
        query: DeliverableListQuery,
    ) -> Result<DeliverableListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Deliverables::find();

        // 交付状态筛选
        if let Some(delivered) = query.delivered {
            select = select.filter(Column::Delivered.eq(delivered));
        }

        // 截止日期筛选
        if let Some(due_before) = query.due_before {
            select = select.filter(Column::DueDate.lte(due_before));
        }

        select = select
            .order_by_asc(Column::DueDate)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EntidadesError::from_db("查询交付物总数失败", e))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EntidadesError::from_db("查询交付物页数失败", e))?;

        let deliverables = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EntidadesError::from_db("查询交付物列表失败", e))?;

        Ok(DeliverableListResponse {
            items: deliverables
                .into_iter()
                .map(|m| m.into_deliverable())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新交付物
    pub async fn update_deliverable_impl(
        &self,
        id: i64,
        update: UpdateDeliverableRequest,
    ) -> Result<Deliverable> {
        update.validate()?;

        let existing = Deliverables::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询交付物失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("Deliverable {id} does not exist")))?;

        let mut model = existing.clone().into_active_model();

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(due_date) = update.due_date {
            model.due_date = Set(due_date);
        }

        if let Some(delivered) = update.delivered {
            model.delivered = Set(delivered);
        }

        if !model.is_changed() {
            return Ok(existing.into_deliverable());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新交付物失败", e))?;

        Ok(result.into_deliverable())
    }

    /// 设置交付状态
    pub async fn mark_deliverable_delivered_impl(
        &self,
        id: i64,
        delivered: bool,
    ) -> Result<Deliverable> {
        Deliverables::update_many()
            .col_expr(
                Column::Delivered,
                sea_orm::sea_query::Expr::value(delivered),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新交付状态失败", e))?;

        // 记录不存在时这里返回 NotFound
        let deliverable = self.get_deliverable_by_id_impl(id).await?;
        info!("{}", deliverable);
        Ok(deliverable)
    }

    /// 删除交付物
    pub async fn delete_deliverable_impl(&self, id: i64) -> Result<()> {
        let result = Deliverables::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("删除交付物失败", e))?;

        if result.rows_affected == 0 {
            return Err(EntidadesError::not_found(format!(
                "Deliverable {id} does not exist"
            )));
        }

        Ok(())
    }

    /// 统计交付物数量
    pub async fn count_deliverables_impl(&self) -> Result<u64> {
        Deliverables::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计交付物数量失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;
    use crate::models::deliverables::requests::{
        CreateDeliverableRequest, DeliverableListQuery, UpdateDeliverableRequest,
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_deliverable_defaults() {
        let storage = memory_storage().await;
        let created = storage
            .create_deliverable_impl(CreateDeliverableRequest::new(
                "Trabajo Práctico 1",
                date(2024, 12, 31),
            ))
            .await
            .unwrap();

        assert_eq!(created.name, "Trabajo Práctico 1");
        assert_eq!(created.due_date, date(2024, 12, 31));
        assert!(!created.delivered);
        assert_eq!(
            created.to_string(),
            "Trabajo Práctico 1 - Entregado: False"
        );
    }

    #[tokio::test]
    async fn test_toggle_delivered_and_reread() {
        let storage = memory_storage().await;
        let created = storage
            .create_deliverable_impl(CreateDeliverableRequest::new("TP1", date(2024, 12, 31)))
            .await
            .unwrap();
        assert_eq!(created.to_string(), "TP1 - Entregado: False");

        storage
            .update_deliverable_impl(
                created.id,
                UpdateDeliverableRequest {
                    delivered: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let reread = storage.get_deliverable_by_id_impl(created.id).await.unwrap();
        assert!(reread.delivered);
        assert_eq!(reread.to_string(), "TP1 - Entregado: True");

        let reverted = storage
            .mark_deliverable_delivered_impl(created.id, false)
            .await
            .unwrap();
        assert!(!reverted.delivered);
    }

    #[tokio::test]
    async fn test_mark_missing_deliverable() {
        let storage = memory_storage().await;
        let err = storage
            .mark_deliverable_delivered_impl(99, true)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_deliverables_filters() {
        let storage = memory_storage().await;
        let tp1 = storage
            .create_deliverable_impl(CreateDeliverableRequest::new("TP1", date(2024, 9, 1)))
            .await
            .unwrap();
        storage
            .create_deliverable_impl(CreateDeliverableRequest::new("TP2", date(2024, 10, 1)))
            .await
            .unwrap();
        storage
            .create_deliverable_impl(CreateDeliverableRequest::new("TP3", date(2024, 11, 1)))
            .await
            .unwrap();
        storage
            .mark_deliverable_delivered_impl(tp1.id, true)
            .await
            .unwrap();

        let pending = storage
            .list_deliverables_with_pagination_impl(DeliverableListQuery {
                delivered: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        let names: Vec<&str> = pending.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["TP2", "TP3"]);

        let due = storage
            .list_deliverables_with_pagination_impl(DeliverableListQuery {
                due_before: Some(date(2024, 10, 1)),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(due.pagination.total, 2);

        let paged = storage
            .list_deliverables_with_pagination_impl(DeliverableListQuery {
                page: Some(2),
                size: Some(2),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(paged.items.len(), 1);
        assert_eq!(paged.items[0].name, "TP3");
        assert_eq!(paged.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_delete_deliverable() {
        let storage = memory_storage().await;
        let created = storage
            .create_deliverable_impl(CreateDeliverableRequest::new("TP1", date(2024, 12, 31)))
            .await
            .unwrap();
        storage.delete_deliverable_impl(created.id).await.unwrap();
        assert!(
            storage
                .get_deliverable_by_id_impl(created.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
