use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::{
    AccountListFilter, AccountOrderField, AccountProfile, AccountQuery, AccountQueryError,
    AccountSummary,
};
use crate::circle::adapter::outgoing::circle_summaries::memberships_of_user;
use crate::following::adapter::outgoing::sea_orm_entity::followings;
use crate::post::adapter::outgoing::post_cards::latest_cards_of_user;
use crate::shared::pagination::{PageRequest, PageResult};

use super::account_summaries::{follow_counts, summarize};
use super::sea_orm_entity::users::{self, Entity as UserEntity};

const PROFILE_FOLLOWERS: u64 = 3;
const PROFILE_SUBSCRIPTIONS: u64 = 3;
const PROFILE_POSTS: u64 = 30;

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_error(e: DbErr) -> AccountQueryError {
        AccountQueryError::DatabaseError(e.to_string())
    }

    fn list_select(filter: &AccountListFilter) -> Select<UserEntity> {
        let mut select = UserEntity::find().filter(users::Column::IsActive.eq(true));

        if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", term.to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::Username))).like(&pattern))
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::FirstName))).like(&pattern))
                    .add(Expr::expr(Func::lower(Expr::col(users::Column::LastName))).like(&pattern)),
            );
        }

        if let Some(is_verified) = filter.is_verified {
            select = select.filter(users::Column::IsVerified.eq(is_verified));
        }

        let order = if filter.ordering.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        match filter.ordering.field {
            AccountOrderField::Username => select.order_by(users::Column::Username, order),
            AccountOrderField::Created => select
                .order_by(users::Column::CreatedAt, order)
                .order_by_asc(users::Column::Username),
        }
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, id: UserId) -> Result<Option<Account>, AccountQueryError> {
        let model = UserEntity::find_by_id(Uuid::from(id))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountQueryError> {
        let model = UserEntity::find()
            .filter(users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let model = UserEntity::find()
            .filter(users::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn summary(&self, account: &Account) -> Result<AccountSummary, AccountQueryError> {
        let id: Uuid = account.id.into();
        let counts = follow_counts(&*self.db, &[id]).await.map_err(Self::db_error)?;
        let (follows, followers) = counts.get(&id).copied().unwrap_or_default();

        Ok(AccountSummary::from_account(account, follows, followers))
    }

    async fn list_summaries(
        &self,
        filter: AccountListFilter,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, AccountQueryError> {
        let select = Self::list_select(&filter);

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

    async fn profile(&self, account: &Account) -> Result<AccountProfile, AccountQueryError> {
        let id: Uuid = account.id.into();

        let followed_ids = followings::Entity::find()
            .select_only()
            .column(followings::Column::FollowedId)
            .filter(followings::Column::FollowerId.eq(id))
            .into_query();

        let follower_ids = followings::Entity::find()
            .select_only()
            .column(followings::Column::FollowerId)
            .filter(followings::Column::FollowedId.eq(id))
            .into_query();

        let follows = UserEntity::find()
            .filter(users::Column::Id.in_subquery(followed_ids))
            .filter(users::Column::IsActive.eq(true))
            .order_by_asc(users::Column::Username)
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let followers = UserEntity::find()
            .filter(users::Column::Id.in_subquery(follower_ids))
            .filter(users::Column::IsActive.eq(true))
            .order_by_asc(users::Column::Username)
            .limit(PROFILE_FOLLOWERS)
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let subscriptions = memberships_of_user(&*self.db, id, PROFILE_SUBSCRIPTIONS)
            .await
            .map_err(Self::db_error)?;

        let posts = latest_cards_of_user(&*self.db, id, PROFILE_POSTS)
            .await
            .map_err(Self::db_error)?;

        Ok(AccountProfile {
            account: self.summary(account).await?,
            follows: summarize(&*self.db, &follows)
                .await
                .map_err(Self::db_error)?,
            followers: summarize(&*self.db, &followers)
                .await
                .map_err(Self::db_error)?,
            subscriptions,
            posts,
        })
    }
}
