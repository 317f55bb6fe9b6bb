use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};
use uuid::Uuid;

use crate::account::adapter::outgoing::account_summaries::{summaries_by_id, summarize};
use crate::account::adapter::outgoing::sea_orm_entity::users::{self, Entity as UserEntity};
use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::{Circle, CircleId, Subscription};
use crate::circle::application::ports::outgoing::{
    CircleDetail, CircleListFilter, CircleOrderField, CircleQuery, CircleQueryError,
    CircleSummary, MemberView, SubscriptionDetail,
};
use crate::shared::pagination::{PageRequest, PageResult};

use super::circle_summaries::{subscription_counts, summarize_circles};
use super::sea_orm_entity::circles::{self, Entity as CircleEntity};
use super::sea_orm_entity::subscriptions::{self, Entity as SubscriptionEntity};

const DETAIL_MEMBERS: u64 = 3;

#[derive(Clone, Debug)]
pub struct CircleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CircleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn db_error(e: DbErr) -> CircleQueryError {
        CircleQueryError::DatabaseError(e.to_string())
    }

    fn list_select(filter: &CircleListFilter) -> Select<CircleEntity> {
        let mut select = CircleEntity::find().filter(circles::Column::IsActive.eq(true));

        if let Some(term) = filter.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", term.to_lowercase());
            select = select.filter(
                Condition::any()
                    .add(Expr::expr(Func::lower(Expr::col(circles::Column::SlugName))).like(&pattern))
                    .add(Expr::expr(Func::lower(Expr::col(circles::Column::Name))).like(&pattern)),
            );
        }

        if let Some(is_verified) = filter.is_verified {
            select = select.filter(circles::Column::IsVerified.eq(is_verified));
        }

        let order = if filter.ordering.descending {
            Order::Desc
        } else {
            Order::Asc
        };

        match filter.ordering.field {
            CircleOrderField::Created => select
                .order_by(circles::Column::CreatedAt, order)
                .order_by_asc(circles::Column::SlugName),
        }
    }

    /// Subscriptions of `circle_id` held by active users, oldest first.
    fn members_select(circle_id: Uuid, is_admin: Option<bool>) -> Select<SubscriptionEntity> {
        let active_users = UserEntity::find()
            .select_only()
            .column(users::Column::Id)
            .filter(users::Column::IsActive.eq(true))
            .into_query();

        let mut select = SubscriptionEntity::find()
            .filter(subscriptions::Column::CircleId.eq(circle_id))
            .filter(subscriptions::Column::UserId.in_subquery(active_users));

        if let Some(is_admin) = is_admin {
            select = select.filter(subscriptions::Column::IsAdmin.eq(is_admin));
        }

        select.order_by_asc(subscriptions::Column::CreatedAt)
    }

    async fn count_of(&self, circle: &Circle) -> Result<u64, CircleQueryError> {
        let id: Uuid = circle.id.into();
        let counts = subscription_counts(&*self.db, &[id])
            .await
            .map_err(Self::db_error)?;

        Ok(counts.get(&id).copied().unwrap_or_default())
    }
}

#[async_trait]
impl CircleQuery for CircleQueryPostgres {
    async fn find_by_slug(&self, slug_name: &str) -> Result<Option<Circle>, CircleQueryError> {
        let model = CircleEntity::find()
            .filter(circles::Column::SlugName.eq(slug_name))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn summary(&self, circle: &Circle) -> Result<CircleSummary, CircleQueryError> {
        let total = self.count_of(circle).await?;
        Ok(CircleSummary::from_circle(circle, total))
    }

    async fn detail(&self, circle: &Circle) -> Result<CircleDetail, CircleQueryError> {
        let summary = self.summary(circle).await?;

        let member_ids = Self::members_select(circle.id.into(), None)
            .select_only()
            .column(subscriptions::Column::UserId)
            .limit(DETAIL_MEMBERS)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let models = UserEntity::find()
            .filter(users::Column::Id.is_in(member_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        // Keep subscription order rather than the order rows came back in.
        let mut ordered = Vec::with_capacity(models.len());
        for id in &member_ids {
            if let Some(model) = models.iter().find(|m| m.id == *id) {
                ordered.push(model.clone());
            }
        }

        let members = summarize(&*self.db, &ordered)
            .await
            .map_err(Self::db_error)?;

        Ok(CircleDetail {
            circle: summary,
            members,
        })
    }

    async fn list_summaries(
        &self,
        filter: CircleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, CircleQueryError> {
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

        let items = summarize_circles(&*self.db, &models)
            .await
            .map_err(Self::db_error)?;

        Ok(PageResult::new(items, page, total))
    }

    async fn find_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
    ) -> Result<Option<Subscription>, CircleQueryError> {
        let model = SubscriptionEntity::find()
            .filter(subscriptions::Column::UserId.eq(Uuid::from(user_id)))
            .filter(subscriptions::Column::CircleId.eq(Uuid::from(circle_id)))
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn subscription_detail(
        &self,
        subscription: &Subscription,
    ) -> Result<SubscriptionDetail, CircleQueryError> {
        let user_id: Uuid = subscription.user_id.into();
        let circle_id: Uuid = subscription.circle_id.into();

        let mut users = summaries_by_id(&*self.db, vec![user_id])
            .await
            .map_err(Self::db_error)?;
        let user = users
            .remove(&user_id)
            .ok_or_else(|| CircleQueryError::DatabaseError(format!("user {user_id} missing")))?;

        let circle = CircleEntity::find_by_id(circle_id)
            .one(&*self.db)
            .await
            .map_err(Self::db_error)?
            .ok_or_else(|| CircleQueryError::DatabaseError(format!("circle {circle_id} missing")))?
            .to_domain();

        Ok(SubscriptionDetail {
            user,
            circle: self.summary(&circle).await?,
            is_admin: subscription.is_admin,
            created_at: subscription.created_at,
        })
    }

    async fn list_members(
        &self,
        circle_id: CircleId,
        is_admin: Option<bool>,
        page: PageRequest,
    ) -> Result<PageResult<MemberView>, CircleQueryError> {
        let select = Self::members_select(circle_id.into(), is_admin);

        let total = select
            .clone()
            .count(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let rows = select
            .offset(page.offset())
            .limit(page.limit())
            .all(&*self.db)
            .await
            .map_err(Self::db_error)?;

        let summaries = summaries_by_id(&*self.db, rows.iter().map(|r| r.user_id).collect())
            .await
            .map_err(Self::db_error)?;

        let items = rows
            .iter()
            .filter_map(|row| {
                summaries.get(&row.user_id).map(|user| MemberView {
                    user: user.clone(),
                    is_admin: row.is_admin,
                })
            })
            .collect();

        Ok(PageResult::new(items, page, total))
    }
}
