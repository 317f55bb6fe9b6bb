use std::sync::Arc;

use actix_web::web;

use crate::account::application::orchestrator::AccountRegistrationOrchestrator;
use crate::account::application::ports::incoming::use_cases::{
    ConfirmAccountUseCase, DeactivateAccountUseCase, GetProfileUseCase, ListAccountsUseCase,
    LoginUseCase, UpdateAccountUseCase,
};
use crate::account::application::AccountUseCases;
use crate::breed::application::ports::incoming::use_cases::{GetBreedUseCase, ListBreedsUseCase};
use crate::breed::application::BreedUseCases;
use crate::circle::application::ports::incoming::use_cases::{
    CreateCircleUseCase, DeactivateCircleUseCase, GetCircleUseCase, GetSubscriptionUseCase,
    ListCirclePostsUseCase, ListCirclesUseCase, ListSubscriptionsUseCase, SubscribeUseCase,
    UnsubscribeUseCase, UpdateCircleUseCase,
};
use crate::circle::application::CircleUseCases;
use crate::following::application::ports::incoming::use_cases::{
    FollowUseCase, GetFollowingUseCase, ListFollowersUseCase, ListFollowsUseCase,
    UnfollowUseCase,
};
use crate::following::application::FollowingUseCases;
use crate::media::application::ports::incoming::use_cases::UploadImageUseCase;
use crate::media::application::MediaUseCases;
use crate::post::application::ports::incoming::use_cases::{
    CreateCommentUseCase, CreatePostUseCase, DeleteCommentUseCase, DeletePostUseCase,
    GetPostUseCase, ListAccountPostsUseCase, ListCommentsUseCase, ListPostsUseCase,
    UpdatePostUseCase,
};
use crate::post::application::PostUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    register_account: Arc<AccountRegistrationOrchestrator>,
    account: AccountUseCases,
    following: FollowingUseCases,
    breed: BreedUseCases,
    circle: CircleUseCases,
    post: PostUseCases,
    media: MediaUseCases,
}

pub fn default_test_account_registration_orchestrator() -> Arc<AccountRegistrationOrchestrator> {
    Arc::new(AccountRegistrationOrchestrator::new(
        Arc::new(StubSignUpUseCase),
        Arc::new(StubAccountEmailNotifier),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_account: default_test_account_registration_orchestrator(),
            account: AccountUseCases {
                login: Arc::new(StubLoginUseCase),
                confirm: Arc::new(StubConfirmAccountUseCase),
                list: Arc::new(StubListAccountsUseCase),
                get_profile: Arc::new(StubGetProfileUseCase),
                update: Arc::new(StubUpdateAccountUseCase),
                deactivate: Arc::new(StubDeactivateAccountUseCase),
            },
            following: FollowingUseCases {
                follow: Arc::new(StubFollowUseCase),
                unfollow: Arc::new(StubUnfollowUseCase),
                get: Arc::new(StubGetFollowingUseCase),
                list_follows: Arc::new(StubListFollowsUseCase),
                list_followers: Arc::new(StubListFollowersUseCase),
            },
            breed: BreedUseCases {
                list: Arc::new(StubListBreedsUseCase),
                get: Arc::new(StubGetBreedUseCase),
            },
            circle: CircleUseCases {
                create: Arc::new(StubCreateCircleUseCase),
                list: Arc::new(StubListCirclesUseCase),
                get: Arc::new(StubGetCircleUseCase),
                update: Arc::new(StubUpdateCircleUseCase),
                deactivate: Arc::new(StubDeactivateCircleUseCase),
                subscribe: Arc::new(StubSubscribeUseCase),
                list_subscriptions: Arc::new(StubListSubscriptionsUseCase),
                get_subscription: Arc::new(StubGetSubscriptionUseCase),
                unsubscribe: Arc::new(StubUnsubscribeUseCase),
                list_posts: Arc::new(StubListCirclePostsUseCase),
            },
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                list: Arc::new(StubListPostsUseCase),
                get: Arc::new(StubGetPostUseCase),
                update: Arc::new(StubUpdatePostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
                list_by_account: Arc::new(StubListAccountPostsUseCase),
                create_comment: Arc::new(StubCreateCommentUseCase),
                list_comments: Arc::new(StubListCommentsUseCase),
                delete_comment: Arc::new(StubDeleteCommentUseCase),
            },
            media: MediaUseCases {
                upload: Arc::new(StubUploadImageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Account

    pub fn with_register_account_orchestrator(
        mut self,
        orchestrator: Arc<AccountRegistrationOrchestrator>,
    ) -> Self {
        self.register_account = orchestrator;
        self
    }

    pub fn with_login(mut self, uc: impl LoginUseCase + 'static) -> Self {
        self.account.login = Arc::new(uc);
        self
    }

    pub fn with_confirm_account(mut self, uc: impl ConfirmAccountUseCase + 'static) -> Self {
        self.account.confirm = Arc::new(uc);
        self
    }

    pub fn with_list_accounts(mut self, uc: impl ListAccountsUseCase + 'static) -> Self {
        self.account.list = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.account.get_profile = Arc::new(uc);
        self
    }

    pub fn with_update_account(mut self, uc: impl UpdateAccountUseCase + 'static) -> Self {
        self.account.update = Arc::new(uc);
        self
    }

    pub fn with_deactivate_account(mut self, uc: impl DeactivateAccountUseCase + 'static) -> Self {
        self.account.deactivate = Arc::new(uc);
        self
    }

    // Following

    pub fn with_follow(mut self, uc: impl FollowUseCase + 'static) -> Self {
        self.following.follow = Arc::new(uc);
        self
    }

    pub fn with_unfollow(mut self, uc: impl UnfollowUseCase + 'static) -> Self {
        self.following.unfollow = Arc::new(uc);
        self
    }

    pub fn with_get_following(mut self, uc: impl GetFollowingUseCase + 'static) -> Self {
        self.following.get = Arc::new(uc);
        self
    }

    pub fn with_list_follows(mut self, uc: impl ListFollowsUseCase + 'static) -> Self {
        self.following.list_follows = Arc::new(uc);
        self
    }

    pub fn with_list_followers(mut self, uc: impl ListFollowersUseCase + 'static) -> Self {
        self.following.list_followers = Arc::new(uc);
        self
    }

    // Breed

    pub fn with_list_breeds(mut self, uc: impl ListBreedsUseCase + 'static) -> Self {
        self.breed.list = Arc::new(uc);
        self
    }

    pub fn with_get_breed(mut self, uc: impl GetBreedUseCase + 'static) -> Self {
        self.breed.get = Arc::new(uc);
        self
    }

    // Circle

    pub fn with_create_circle(mut self, uc: impl CreateCircleUseCase + 'static) -> Self {
        self.circle.create = Arc::new(uc);
        self
    }

    pub fn with_list_circles(mut self, uc: impl ListCirclesUseCase + 'static) -> Self {
        self.circle.list = Arc::new(uc);
        self
    }

    pub fn with_get_circle(mut self, uc: impl GetCircleUseCase + 'static) -> Self {
        self.circle.get = Arc::new(uc);
        self
    }

    pub fn with_update_circle(mut self, uc: impl UpdateCircleUseCase + 'static) -> Self {
        self.circle.update = Arc::new(uc);
        self
    }

    pub fn with_deactivate_circle(mut self, uc: impl DeactivateCircleUseCase + 'static) -> Self {
        self.circle.deactivate = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + 'static) -> Self {
        self.circle.subscribe = Arc::new(uc);
        self
    }

    pub fn with_list_subscriptions(mut self, uc: impl ListSubscriptionsUseCase + 'static) -> Self {
        self.circle.list_subscriptions = Arc::new(uc);
        self
    }

    pub fn with_get_subscription(mut self, uc: impl GetSubscriptionUseCase + 'static) -> Self {
        self.circle.get_subscription = Arc::new(uc);
        self
    }

    pub fn with_unsubscribe(mut self, uc: impl UnsubscribeUseCase + 'static) -> Self {
        self.circle.unsubscribe = Arc::new(uc);
        self
    }

    pub fn with_list_circle_posts(mut self, uc: impl ListCirclePostsUseCase + 'static) -> Self {
        self.circle.list_posts = Arc::new(uc);
        self
    }

    // Post

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_list_posts(mut self, uc: impl ListPostsUseCase + 'static) -> Self {
        self.post.list = Arc::new(uc);
        self
    }

    pub fn with_get_post(mut self, uc: impl GetPostUseCase + 'static) -> Self {
        self.post.get = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + 'static) -> Self {
        self.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    pub fn with_list_account_posts(mut self, uc: impl ListAccountPostsUseCase + 'static) -> Self {
        self.post.list_by_account = Arc::new(uc);
        self
    }

    pub fn with_create_comment(mut self, uc: impl CreateCommentUseCase + 'static) -> Self {
        self.post.create_comment = Arc::new(uc);
        self
    }

    pub fn with_list_comments(mut self, uc: impl ListCommentsUseCase + 'static) -> Self {
        self.post.list_comments = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(mut self, uc: impl DeleteCommentUseCase + 'static) -> Self {
        self.post.delete_comment = Arc::new(uc);
        self
    }

    // Media

    pub fn with_upload_image(mut self, uc: impl UploadImageUseCase + 'static) -> Self {
        self.media.upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_account_orchestrator: self.register_account,
            account: self.account,
            following: self.following,
            breed: self.breed,
            circle: self.circle,
            post: self.post,
            media: self.media,
        })
    }
}
