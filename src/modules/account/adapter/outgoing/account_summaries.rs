//! Builds `AccountSummary` rows with their derived follow counts.
//!
//! Shared by every adapter that embeds users (followings, circles, posts).

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::adapter::outgoing::sea_orm_entity::followings;

use super::sea_orm_entity::users;

/// `(number_of_follows, number_of_followers)` per user id.
pub async fn follow_counts<C>(db: &C, ids: &[Uuid]) -> Result<HashMap<Uuid, (u64, u64)>, DbErr>
where
    C: ConnectionTrait,
{
    let mut counts: HashMap<Uuid, (u64, u64)> = ids.iter().map(|id| (*id, (0, 0))).collect();

    if ids.is_empty() {
        return Ok(counts);
    }

    let follows: Vec<(Uuid, i64)> = followings::Entity::find()
        .select_only()
        .column(followings::Column::FollowerId)
        .column_as(followings::Column::Id.count(), "total")
        .filter(followings::Column::FollowerId.is_in(ids.to_vec()))
        .group_by(followings::Column::FollowerId)
        .into_tuple()
        .all(db)
        .await?;

    let followers: Vec<(Uuid, i64)> = followings::Entity::find()
        .select_only()
        .column(followings::Column::FollowedId)
        .column_as(followings::Column::Id.count(), "total")
        .filter(followings::Column::FollowedId.is_in(ids.to_vec()))
        .group_by(followings::Column::FollowedId)
        .into_tuple()
        .all(db)
        .await?;

    for (id, total) in follows {
        counts.entry(id).or_default().0 = total.max(0) as u64;
    }
    for (id, total) in followers {
        counts.entry(id).or_default().1 = total.max(0) as u64;
    }

    Ok(counts)
}

/// Summaries in the same order as `models`.
pub async fn summarize<C>(db: &C, models: &[users::Model]) -> Result<Vec<AccountSummary>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let counts = follow_counts(db, &ids).await?;

    Ok(models
        .iter()
        .map(|model| {
            let (follows, followers) = counts.get(&model.id).copied().unwrap_or_default();
            AccountSummary::from_account(&model.to_domain(), follows, followers)
        })
        .collect())
}

/// Summaries keyed by user id; unknown ids are skipped.
pub async fn summaries_by_id<C>(
    db: &C,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, AccountSummary>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = users::Entity::find()
        .filter(users::Column::Id.is_in(ids))
        .order_by_asc(users::Column::Username)
        .all(db)
        .await?;

    let summaries = summarize(db, &models).await?;

    Ok(models
        .iter()
        .map(|m| m.id)
        .zip(summaries)
        .collect())
}
