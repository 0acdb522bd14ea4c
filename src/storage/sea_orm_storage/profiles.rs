//! 用户资料存储操作

use super::SeaOrmStorage;
use crate::entity::profiles::{ActiveModel, Column, Entity as Profiles, Model};
use crate::entity::users::Entity as Users;
use crate::errors::{EntidadesError, Result};
use crate::models::profiles::{
    entities::Profile,
    requests::{CreateProfileRequest, UpdateProfileRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    Select, Set,
};
use tracing::{info, warn};

impl SeaOrmStorage {
    /// 创建用户资料
    ///
    /// 用户不存在或已有资料时返回 Integrity 错误，不会覆盖已有记录。
    pub async fn create_profile_impl(&self, req: CreateProfileRequest) -> Result<Profile> {
        req.validate()?;

        let user = Users::find_by_id(req.user_id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户失败", e))?
            .ok_or_else(|| {
                EntidadesError::integrity(format!(
                    "创建用户资料失败: User {} does not exist",
                    req.user_id
                ))
            })?;

        let model = ActiveModel {
            user_id: Set(req.user_id),
            avatar: Set(req.avatar),
            ..Default::default()
        };

        // user_id 上有唯一索引，重复创建由数据库拒绝
        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("创建用户资料失败", e))?;

        info!("Profile {} created for user {}", result.id, user.username);
        Ok(result.into_profile(user.username))
    }

    async fn fetch_profile(&self, select: Select<Profiles>, what: String) -> Result<Profile> {
        let (profile, user) = select
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户资料失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("{what} does not exist")))?;

        let Some(user) = user else {
            warn!("Profile {} references missing user {}", profile.id, profile.user_id);
            return Err(EntidadesError::integrity(format!(
                "Profile {} references missing user {}",
                profile.id, profile.user_id
            )));
        };
        Ok(profile.into_profile(user.username))
    }

    /// 通过 ID 获取用户资料
    pub async fn get_profile_by_id_impl(&self, id: i64) -> Result<Profile> {
        self.fetch_profile(Profiles::find_by_id(id), format!("Profile {id}"))
            .await
    }

    /// 通过用户 ID 获取用户资料
    pub async fn get_profile_by_user_id_impl(&self, user_id: i64) -> Result<Profile> {
        self.fetch_profile(
            Profiles::find().filter(Column::UserId.eq(user_id)),
            format!("Profile of user {user_id}"),
        )
        .await
    }

    /// 更新用户资料
    pub async fn update_profile_impl(
        &self,
        id: i64,
        update: UpdateProfileRequest,
    ) -> Result<Profile> {
        update.validate()?;

        let existing: Model = Profiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("查询用户资料失败", e))?
            .ok_or_else(|| EntidadesError::not_found(format!("Profile {id} does not exist")))?;

        let mut model = existing.into_active_model();

        if let Some(avatar) = update.avatar {
            model.avatar = Set(avatar);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| EntidadesError::from_db("更新用户资料失败", e))?;
        }

        self.get_profile_by_id_impl(id).await
    }

    /// 删除用户资料（不影响用户本身）
    pub async fn delete_profile_impl(&self, id: i64) -> Result<()> {
        let result = Profiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("删除用户资料失败", e))?;

        if result.rows_affected == 0 {
            return Err(EntidadesError::not_found(format!(
                "Profile {id} does not exist"
            )));
        }

        Ok(())
    }

    /// 统计用户资料数量
    pub async fn count_profiles_impl(&self) -> Result<u64> {
        Profiles::find()
            .count(&self.db)
            .await
            .map_err(|e| EntidadesError::from_db("统计用户资料数量失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::memory_storage;
    use super::SeaOrmStorage;
    use crate::entity::profiles::ActiveModel;
    use crate::models::profiles::{
        entities::DEFAULT_AVATAR,
        requests::{CreateProfileRequest, UpdateProfileRequest},
    };
    use crate::models::users::{entities::User, requests::CreateUserRequest};
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

    async fn seed_user(storage: &SeaOrmStorage) -> User {
        storage
            .create_user_impl(CreateUserRequest {
                username: "testuser".into(),
                email: "test@example.com".into(),
                password: "testpass123".into(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_profile_with_default_avatar() {
        let storage = memory_storage().await;
        let user = seed_user(&storage).await;

        let profile = storage
            .create_profile_impl(CreateProfileRequest::new(user.id))
            .await
            .unwrap();
        assert_eq!(profile.user_id, user.id);
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
        assert_eq!(profile.to_string(), "Profile testuser");
    }

    #[tokio::test]
    async fn test_user_profile_accessor() {
        let storage = memory_storage().await;
        let user = seed_user(&storage).await;

        let none_yet = storage.get_user_with_profile_impl(user.id).await.unwrap();
        assert!(none_yet.profile.is_none());

        let profile = storage
            .create_profile_impl(CreateProfileRequest::new(user.id))
            .await
            .unwrap();

        let with_profile = storage.get_user_with_profile_impl(user.id).await.unwrap();
        assert_eq!(with_profile.user.id, user.id);
        assert_eq!(with_profile.profile, Some(profile.clone()));
        assert_eq!(
            storage.get_profile_by_user_id_impl(user.id).await.unwrap(),
            profile
        );
    }

    #[tokio::test]
    async fn test_second_profile_is_integrity_error() {
        let storage = memory_storage().await;
        let user = seed_user(&storage).await;
        let first = storage
            .create_profile_impl(CreateProfileRequest::new(user.id))
            .await
            .unwrap();

        let err = storage
            .create_profile_impl(CreateProfileRequest::new(user.id).with_avatar("avatars/other.png"))
            .await
            .unwrap_err();
        assert!(err.is_integrity(), "unexpected error: {err}");

        // 原记录未被覆盖
        let kept = storage.get_profile_by_id_impl(first.id).await.unwrap();
        assert_eq!(kept.avatar, DEFAULT_AVATAR);
        assert_eq!(storage.count_profiles_impl().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_profile_for_missing_user_is_integrity_error() {
        let storage = memory_storage().await;
        let err = storage
            .create_profile_impl(CreateProfileRequest::new(404))
            .await
            .unwrap_err();
        assert!(err.is_integrity());
    }

    #[tokio::test]
    async fn test_delete_user_deletes_profile() {
        let storage = memory_storage().await;
        let user = seed_user(&storage).await;
        let profile = storage
            .create_profile_impl(CreateProfileRequest::new(user.id))
            .await
            .unwrap();

        storage.delete_user_impl(user.id).await.unwrap();

        let err = storage.get_profile_by_id_impl(profile.id).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(
            storage
                .get_user_by_id_impl(user.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_profile() {
        let storage = memory_storage().await;
        let user = seed_user(&storage).await;
        let profile = storage
            .create_profile_impl(CreateProfileRequest::new(user.id))
            .await
            .unwrap();

        let updated = storage
            .update_profile_impl(
                profile.id,
                UpdateProfileRequest {
                    avatar: Some("avatars/testuser.png".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.avatar, "avatars/testuser.png");
        assert_eq!(updated.username, "testuser");

        storage.delete_profile_impl(profile.id).await.unwrap();
        // 删除资料不影响用户
        assert!(storage.get_user_by_id_impl(user.id).await.is_ok());
        assert!(
            storage
                .get_profile_by_user_id_impl(user.id)
                .await
                .unwrap_err()
                .is_not_found()
        );
    }

    #[tokio::test]
    async fn test_orphaned_profile_is_integrity_error() {
        let storage = memory_storage().await;
        // 绕过外键约束写入一条悬空资料
        storage
            .db
            .execute_unprepared("PRAGMA foreign_keys = OFF")
            .await
            .unwrap();
        let orphan = ActiveModel {
            user_id: Set(404),
            avatar: Set(DEFAULT_AVATAR.to_string()),
            ..Default::default()
        }
        .insert(&storage.db)
        .await
        .unwrap();

        let err = storage.get_profile_by_id_impl(orphan.id).await.unwrap_err();
        assert!(err.is_integrity(), "unexpected error: {err}");
    }
}
