use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use crate::account::adapter::outgoing::account_summaries::{summaries_by_id, summarize};
use crate::account::adapter::outgoing::sea_orm_entity::users::{self, Entity as UserEntity};
use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::application::domain::entities::Following;
use crate::following::application::ports::outgoing::{
    FollowingDetail, FollowingQuery, FollowingQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::sea_orm_entity::followings::{self, Entity as FollowingEntity};

#[derive(Clone, Debug)]
pub struct FollowingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

#[derive(Clone, Copy)]
enum Side {
    Follows,
    Followers,
}

impl FollowingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_error(e: DbErr) -> FollowingQueryError {
        FollowingQueryError::DatabaseError(e.to_string())
    }

    /// Active users on the other side of `user_id`'s followings.
    fn side_select(user_id: Uuid, side: Side) -> Select<UserEntity> {
        let ids = match side {
            Side::Follows => FollowingEntity::find()
                .select_only()
                .column(followings::Column::FollowedId)
                .filter(followings::Column::FollowerId.eq(user_id))
                .into_query(),
            Side::Followers => FollowingEntity::find()
                .select_only()
                .column(followings::Column::FollowerId)
                .filter(followings::Column::FollowedId.eq(user_id))
                .into_query(),
        };

        UserEntity::find()
            .filter(users::Column::Id.in_subquery(ids))
            .filter(users::Column::IsActive.eq(true))
            .order_by_asc(users::Column::Username)
    }

    async fn page_of(
        &self,
        user_id: UserId,
        side: Side,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError> {
        let select = Self::side_select(user_id.into(), side);

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let models = select
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let items = summarize(&*self.db, &models)
            .await
            .map_err(Self::db_error)?;

        Ok(PageResult::new(items, page, total))
    }
}

#[async_trait]
impl FollowingQuery for FollowingQueryPostgres {
    async fn find(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Option<Following>, FollowingQueryError> {
        let model = FollowingEntity::find()
            .filter(followings::Column::FollowerId.eq(Uuid::from(follower_id)))
            .filter(followings::Column::FollowedId.eq(Uuid::from(followed_id)))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn detail(&self, following: &Following) -> Result<FollowingDetail, FollowingQueryError> {
        let follower_id: Uuid = following.follower_id.into();
        let followed_id: Uuid = following.followed_id.into();

        let mut summaries = summaries_by_id(&*self.db, vec![follower_id, followed_id])
            .await
            .map_err(Self::db_error)?;

        let follower = summaries.remove(&follower_id).ok_or_else(|| {
            FollowingQueryError::DatabaseError(format!("user {follower_id} missing"))
        })?;
        let followed = summaries.remove(&followed_id).ok_or_else(|| {
            FollowingQueryError::DatabaseError(format!("user {followed_id} missing"))
        })?;

        Ok(FollowingDetail {
            follower,
            followed,
            created_at: following.created_at,
        })
    }

    async fn list_follows(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError> {
        self.page_of(user_id, Side::Follows, page).await
    }

    async fn list_followers(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError> {
        self.page_of(user_id, Side::Followers, page).await
    }
}
