//! In-memory circle ports for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::circle::application::domain::entities::{Circle, CircleId, Subscription};
use crate::circle::application::ports::outgoing::{
    CircleChanges, CircleDetail, CircleListFilter, CircleQuery, CircleQueryError,
    CircleRepository, CircleRepositoryError, CircleSummary, MemberView, NewCircle,
    SubscriptionDetail,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockCircleQuery {
    pub circles: Vec<Circle>,
    pub subscriptions: Vec<Subscription>,
    pub accounts: Vec<Account>,
    pub fail: bool,
}

impl MockCircleQuery {
    pub fn with(circles: Vec<Circle>, subscriptions: Vec<Subscription>) -> Self {
        Self {
            circles,
            subscriptions,
            ..Default::default()
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), CircleQueryError> {
        if self.fail {
            Err(CircleQueryError::DatabaseError("db down".to_string()))
        } else {
            Ok(())
        }
    }

    fn count_members(&self, circle_id: CircleId) -> u64 {
        self.subscriptions
            .iter()
            .filter(|s| s.circle_id == circle_id)
            .count() as u64
    }

    fn account_summary(&self, user_id: UserId) -> Result<AccountSummary, CircleQueryError> {
        self.accounts
            .iter()
            .find(|a| a.id == user_id)
            .map(|a| AccountSummary::from_account(a, 0, 0))
            .ok_or_else(|| CircleQueryError::DatabaseError("unknown user".to_string()))
    }
}

#[async_trait]
impl CircleQuery for MockCircleQuery {
    async fn find_by_slug(&self, slug_name: &str) -> Result<Option<Circle>, CircleQueryError> {
        self.check()?;
        Ok(self.circles.iter().find(|c| c.slug_name == slug_name).cloned())
    }

    async fn summary(&self, circle: &Circle) -> Result<CircleSummary, CircleQueryError> {
        self.check()?;
        Ok(CircleSummary::from_circle(circle, self.count_members(circle.id)))
    }

    async fn detail(&self, circle: &Circle) -> Result<CircleDetail, CircleQueryError> {
        self.check()?;
        let members = self
            .subscriptions
            .iter()
            .filter(|s| s.circle_id == circle.id)
            .take(3)
            .filter_map(|s| self.account_summary(s.user_id).ok())
            .collect();

        Ok(CircleDetail {
            circle: CircleSummary::from_circle(circle, self.count_members(circle.id)),
            members,
        })
    }

    async fn list_summaries(
        &self,
        filter: CircleListFilter,
        page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, CircleQueryError> {
        self.check()?;
        let items: Vec<CircleSummary> = self
            .circles
            .iter()
            .filter(|c| c.is_active)
            .filter(|c| filter.is_verified.map_or(true, |v| c.is_verified == v))
            .filter(|c| {
                filter.search.as_deref().map_or(true, |term| {
                    c.slug_name.contains(term) || c.name.contains(term)
                })
            })
            .map(|c| CircleSummary::from_circle(c, self.count_members(c.id)))
            .collect();
        let total = items.len() as u64;

        Ok(PageResult::new(items, page, total))
    }

    async fn find_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
    ) -> Result<Option<Subscription>, CircleQueryError> {
        self.check()?;
        Ok(self
            .subscriptions
            .iter()
            .find(|s| s.user_id == user_id && s.circle_id == circle_id)
            .cloned())
    }

    async fn subscription_detail(
        &self,
        subscription: &Subscription,
    ) -> Result<SubscriptionDetail, CircleQueryError> {
        self.check()?;
        let circle = self
            .circles
            .iter()
            .find(|c| c.id == subscription.circle_id)
            .ok_or_else(|| CircleQueryError::DatabaseError("unknown circle".to_string()))?;

        Ok(SubscriptionDetail {
            user: self.account_summary(subscription.user_id)?,
            circle: CircleSummary::from_circle(circle, self.count_members(circle.id)),
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
        self.check()?;
        let items: Vec<MemberView> = self
            .subscriptions
            .iter()
            .filter(|s| s.circle_id == circle_id)
            .filter(|s| is_admin.map_or(true, |a| s.is_admin == a))
            .filter_map(|s| {
                self.account_summary(s.user_id).ok().map(|user| MemberView {
                    user,
                    is_admin: s.is_admin,
                })
            })
            .collect();
        let total = items.len() as u64;

        Ok(PageResult::new(items, page, total))
    }
}

// ──────────────────────────────────────────────────────────
// Repository
// ──────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockCircleRepository {
    pub fail_with: Option<CircleRepositoryError>,
    /// Circles known to `update_circle`.
    pub circles: Vec<Circle>,
    pub created: Mutex<Vec<(UserId, NewCircle)>>,
    pub deactivated: Mutex<Vec<CircleId>>,
    pub subscribed: Mutex<Vec<(UserId, CircleId, bool)>>,
    pub unsubscribed: Mutex<Vec<Uuid>>,
}

impl MockCircleRepository {
    pub fn with(circles: Vec<Circle>) -> Self {
        Self {
            circles,
            ..Default::default()
        }
    }

    pub fn failing(err: CircleRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), CircleRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CircleRepository for MockCircleRepository {
    async fn create_circle(
        &self,
        creator: UserId,
        data: NewCircle,
    ) -> Result<Circle, CircleRepositoryError> {
        self.check()?;
        self.created.lock().unwrap().push((creator, data.clone()));

        Ok(Circle {
            id: CircleId::from(Uuid::new_v4()),
            name: data.name,
            slug_name: data.slug_name,
            profile_photo: data.profile_photo,
            cover_photo: data.cover_photo,
            about: data.about,
            is_verified: false,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    async fn update_circle(
        &self,
        id: CircleId,
        changes: CircleChanges,
    ) -> Result<Circle, CircleRepositoryError> {
        self.check()?;
        let mut circle = self
            .circles
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CircleRepositoryError::NotFound)?;

        if let Some(name) = changes.name {
            circle.name = name;
        }
        if let Some(slug) = changes.slug_name {
            circle.slug_name = slug;
        }
        if let Some(about) = changes.about {
            circle.about = about;
        }
        if let Some(photo) = changes.profile_photo {
            circle.profile_photo = photo;
        }
        if let Some(photo) = changes.cover_photo {
            circle.cover_photo = photo;
        }

        Ok(circle)
    }

    async fn deactivate_circle(&self, id: CircleId) -> Result<(), CircleRepositoryError> {
        self.check()?;
        self.deactivated.lock().unwrap().push(id);
        Ok(())
    }

    async fn create_subscription(
        &self,
        user_id: UserId,
        circle_id: CircleId,
        is_admin: bool,
    ) -> Result<Subscription, CircleRepositoryError> {
        self.check()?;
        self.subscribed
            .lock()
            .unwrap()
            .push((user_id, circle_id, is_admin));

        Ok(Subscription {
            id: Uuid::new_v4(),
            user_id,
            circle_id,
            is_admin,
            created_at: Utc::now(),
        })
    }

    async fn delete_subscription(&self, id: Uuid) -> Result<(), CircleRepositoryError> {
        self.check()?;
        self.unsubscribed.lock().unwrap().push(id);
        Ok(())
    }
}
