//! Builds `CircleSummary` rows with their subscription counts.
//!
//! Also used by the account profile, which embeds the user's memberships.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::account::application::ports::outgoing::MembershipView;
use crate::circle::application::ports::outgoing::CircleSummary;

use super::sea_orm_entity::{circles, subscriptions};

pub async fn subscription_counts<C>(db: &C, ids: &[Uuid]) -> Result<HashMap<Uuid, u64>, DbErr>
where
    C: ConnectionTrait,
{
    let mut counts: HashMap<Uuid, u64> = ids.iter().map(|id| (*id, 0)).collect();

    if ids.is_empty() {
        return Ok(counts);
    }

    let rows: Vec<(Uuid, i64)> = subscriptions::Entity::find()
        .select_only()
        .column(subscriptions::Column::CircleId)
        .column_as(subscriptions::Column::Id.count(), "total")
        .filter(subscriptions::Column::CircleId.is_in(ids.to_vec()))
        .group_by(subscriptions::Column::CircleId)
        .into_tuple()
        .all(db)
        .await?;

    for (id, total) in rows {
        counts.insert(id, total.max(0) as u64);
    }

    Ok(counts)
}

/// Summaries in the same order as `models`.
pub async fn summarize_circles<C>(
    db: &C,
    models: &[circles::Model],
) -> Result<Vec<CircleSummary>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
    let counts = subscription_counts(db, &ids).await?;

    Ok(models
        .iter()
        .map(|model| {
            let total = counts.get(&model.id).copied().unwrap_or_default();
            CircleSummary::from_circle(&model.to_domain(), total)
        })
        .collect())
}

/// Summaries keyed by circle id; unknown ids are skipped.
pub async fn circle_summaries_by_id<C>(
    db: &C,
    ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, CircleSummary>, DbErr>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = circles::Entity::find()
        .filter(circles::Column::Id.is_in(ids))
        .all(db)
        .await?;

    let summaries = summarize_circles(db, &models).await?;

    Ok(models.iter().map(|m| m.id).zip(summaries).collect())
}

/// Active circles the user belongs to, admin memberships first.
pub async fn memberships_of_user<C>(
    db: &C,
    user_id: Uuid,
    limit: u64,
) -> Result<Vec<MembershipView>, DbErr>
where
    C: ConnectionTrait,
{
    let rows = subscriptions::Entity::find()
        .inner_join(circles::Entity)
        .filter(subscriptions::Column::UserId.eq(user_id))
        .filter(circles::Column::IsActive.eq(true))
        .order_by_desc(subscriptions::Column::IsAdmin)
        .order_by_asc(subscriptions::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await?;

    let mut circles = circle_summaries_by_id(db, rows.iter().map(|r| r.circle_id).collect()).await?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            circles.remove(&row.circle_id).map(|circle| MembershipView {
                circle,
                is_admin: row.is_admin,
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::adapter::outgoing::sea_orm_entity::circles::fixtures::circle_model;
    use crate::circle::adapter::outgoing::sea_orm_entity::subscriptions::fixtures::subscription_model;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    #[tokio::test]
    async fn summaries_carry_subscription_counts() {
        let (quito, cuenca) = (circle_model("quito"), circle_model("cuenca"));

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "circle_id" => Value::Uuid(Some(Box::new(quito.id))),
                "total" => Value::BigInt(Some(2)),
            }]])
            .into_connection();

        let summaries = summarize_circles(&db, &[quito, cuenca]).await.unwrap();

        assert_eq!(summaries[0].slug_name, "quito");
        assert_eq!(summaries[0].number_of_subscriptions, 2);
        assert_eq!(summaries[1].number_of_subscriptions, 0);
    }

    #[tokio::test]
    async fn memberships_keep_query_order() {
        let user = Uuid::new_v4();
        let (quito, cuenca) = (circle_model("quito"), circle_model("cuenca"));
        let admin = subscription_model(user, cuenca.id, true);
        let member = subscription_model(user, quito.id, false);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![admin, member]])
            .append_query_results(vec![vec![quito.clone(), cuenca.clone()]])
            .append_query_results(vec![Vec::<std::collections::BTreeMap<&str, Value>>::new()])
            .into_connection();

        let memberships = memberships_of_user(&db, user, 3).await.unwrap();

        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[0].circle.slug_name, "cuenca");
        assert!(memberships[0].is_admin);
        assert_eq!(memberships[1].circle.slug_name, "quito");
    }
}
