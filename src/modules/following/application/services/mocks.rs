use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::account::application::domain::entities::{Account, UserId};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::following::application::domain::entities::Following;
use crate::following::application::ports::outgoing::{
    FollowingDetail, FollowingQuery, FollowingQueryError, FollowingRepository,
    FollowingRepositoryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Default)]
pub struct MockFollowingRepository {
    pub fail_with: Option<FollowingRepositoryError>,
    pub created: Mutex<Vec<(UserId, UserId)>>,
    pub deleted: Mutex<Vec<Uuid>>,
}

impl MockFollowingRepository {
    pub fn failing(err: FollowingRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }
}

#[async_trait]
impl FollowingRepository for MockFollowingRepository {
    async fn create_following(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Following, FollowingRepositoryError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.created.lock().unwrap().push((follower_id, followed_id));
        Ok(Following {
            id: Uuid::new_v4(),
            follower_id,
            followed_id,
            created_at: Utc::now(),
        })
    }

    async fn delete_following(&self, id: Uuid) -> Result<(), FollowingRepositoryError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.deleted.lock().unwrap().push(id);
        Ok(())
    }
}

/// Answers from in-memory accounts and followings.
#[derive(Default)]
pub struct MockFollowingQuery {
    pub accounts: Vec<Account>,
    pub followings: Vec<Following>,
}

impl MockFollowingQuery {
    pub fn new(accounts: Vec<Account>, followings: Vec<Following>) -> Self {
        Self {
            accounts,
            followings,
        }
    }

    fn summary(&self, id: UserId) -> AccountSummary {
        let account = self
            .accounts
            .iter()
            .find(|a| a.id == id)
            .expect("account fixture missing");
        AccountSummary::from_account(account, 0, 0)
    }

    fn page(&self, ids: Vec<UserId>, page: PageRequest) -> PageResult<AccountSummary> {
        let mut items: Vec<AccountSummary> = ids.into_iter().map(|id| self.summary(id)).collect();
        items.sort_by(|a, b| a.username.cmp(&b.username));
        let total = items.len() as u64;
        PageResult::new(items, page, total)
    }
}

#[async_trait]
impl FollowingQuery for MockFollowingQuery {
    async fn find(
        &self,
        follower_id: UserId,
        followed_id: UserId,
    ) -> Result<Option<Following>, FollowingQueryError> {
        Ok(self
            .followings
            .iter()
            .find(|f| f.follower_id == follower_id && f.followed_id == followed_id)
            .cloned())
    }

    async fn detail(&self, following: &Following) -> Result<FollowingDetail, FollowingQueryError> {
        Ok(FollowingDetail {
            follower: self.summary(following.follower_id),
            followed: self.summary(following.followed_id),
            created_at: following.created_at,
        })
    }

    async fn list_follows(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError> {
        let ids = self
            .followings
            .iter()
            .filter(|f| f.follower_id == user_id)
            .map(|f| f.followed_id)
            .collect();
        Ok(self.page(ids, page))
    }

    async fn list_followers(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, FollowingQueryError> {
        let ids = self
            .followings
            .iter()
            .filter(|f| f.followed_id == user_id)
            .map(|f| f.follower_id)
            .collect();
        Ok(self.page(ids, page))
    }
}
