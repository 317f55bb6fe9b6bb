//! Builds `PostCard` rows with their author username and circle slug.
//!
//! Also used by the account profile, which embeds the user's latest posts.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::account::adapter::outgoing::sea_orm_entity::users;
use crate::circle::adapter::outgoing::sea_orm_entity::circles;
use crate::post::application::ports::outgoing::PostCard;

use super::sea_orm_entity::posts;

pub async fn usernames<C>(db: &C, ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(Uuid, String)> = users::Entity::find()
        .select_only()
        .column(users::Column::Id)
        .column(users::Column::Username)
        .filter(users::Column::Id.is_in(ids))
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

async fn circle_slugs<C>(db: &C, ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(Uuid, String)> = circles::Entity::find()
        .select_only()
        .column(circles::Column::Id)
        .column(circles::Column::SlugName)
        .filter(circles::Column::Id.is_in(ids))
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

/// Cards in the same order as `models`.
pub async fn cards<C>(db: &C, models: &[posts::Model]) -> Result<Vec<PostCard>, DbErr>
where
    C: ConnectionTrait,
{
    let mut user_ids: Vec<Uuid> = models.iter().map(|m| m.user_id).collect();
    user_ids.sort();
    user_ids.dedup();

    let mut circle_ids: Vec<Uuid> = models.iter().filter_map(|m| m.circle_id).collect();
    circle_ids.sort();
    circle_ids.dedup();

    let names = usernames(db, user_ids).await?;
    let slugs = circle_slugs(db, circle_ids).await?;

    Ok(models
        .iter()
        .map(|model| {
            let username = names.get(&model.user_id).cloned().unwrap_or_default();
            let circle = model.circle_id.and_then(|id| slugs.get(&id).cloned());
            PostCard::from_post(&model.to_domain(), username, circle)
        })
        .collect())
}

/// The user's newest posts.
pub async fn latest_cards_of_user<C>(
    db: &C,
    user_id: Uuid,
    limit: u64,
) -> Result<Vec<PostCard>, DbErr>
where
    C: ConnectionTrait,
{
    let models = posts::Entity::find()
        .filter(posts::Column::UserId.eq(user_id))
        .order_by_desc(posts::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;

    cards(db, &models).await
}
