use super::SeaOrmStorage;
use crate::entity::profiles::{Column as ProfileColumn, Entity as Profiles};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{EntidadesError, Result};
use crate::models::{
    PaginationInfo,
    common::normalize_page,
    profiles::responses::UserWithProfile,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::{contains_literal, password::hash_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::info;

impl SeaOrmStorage {
    /// 创建用户（密码以 Argon2 哈希存储）
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        req.validate()?;

        let now = chrono::Utc::now().timestamp();
        let password_hash = hash_password(&req.password)?;

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(password_hash),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建用户失败", e))?;

        info!("User {} created", result.username);
        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<User> {
        Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户失败", e))?
            .map(|m| m.into_user())
            .ok_or_else(|| EntidadesError::not_found(format!("User {id} does not exist")))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<User> {
        Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户失败", e))?
            .map(|m| m.into_user())
            .ok_or_else(|| EntidadesError::not_found(format!("User '{username}' does not exist")))
    }

    /// 获取用户及其资料（一对一反向访问）
    pub async fn get_user_with_profile_impl(&self, id: i64) -> Result<UserWithProfile> {
        let (user, profile) = Users::find_by_id(id)
            .find_also_related(Profiles)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户资料失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("User {id} does not exist")))?;

        let username = user.username.clone();
        Ok(UserWithProfile {
            user: user.into_user(),
            profile: profile.map(|p| p.into_profile(username)),
        })
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let (page, size) = normalize_page(query.page, query.size);

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let term = search.trim();
            select = select.filter(
                Condition::any()
                    .add(contains_literal(Column::Username, term))
                    .add(contains_literal(Column::Email, term)),
            );
        }

        // 状态筛选
        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        // 排序
        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EntidadesError::from_db("查询用户总数失败", e))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EntidadesError::from_db("查询用户页数失败", e))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户列表失败", e))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新用户信息
    pub async fn update_user_impl(&self, id: i64, update: UpdateUserRequest) -> Result<User> {
        update.validate()?;

        // 先检查用户是否存在
        self.get_user_by_id_impl(id).await?;

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(hash_password(&password)?);
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("更新用户失败", e))?;

        Ok(result.into_user())
    }

    /// 删除用户，同一事务内删除其资料
    pub async fn delete_user_impl(&self, id: i64) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EntidadesError::from_db("开启事务失败", e))?;

        Profiles::delete_many()
            .filter(ProfileColumn::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EntidadesError::from_db("删除用户资料失败", e))?;

        let result = Users::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| EntidadesError::from_db("删除用户失败", e))?;

        if result.rows_affected == 0 {
            txn.rollback()
                .await
                .map_err(|e| EntidadesError::from_db("回滚事务失败", e))?;
            return Err(EntidadesError::not_found(format!("User {id} does not exist")));
        }

        txn.commit()
            .await
            .map_err(|e| EntidadesError::from_db("提交事务失败", e))?;

        info!("User {} deleted", id);
        Ok(())
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计用户数量失败", e))?;

        Ok(count)
    }
}
