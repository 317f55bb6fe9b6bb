use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::ports::incoming::use_cases::{
    ConfirmAccountCommand, ConfirmAccountError, ConfirmAccountUseCase, DeactivateAccountCommand,
    DeactivateAccountError, DeactivateAccountUseCase, GetProfileError, GetProfileUseCase,
    ListAccountsError, ListAccountsUseCase, LoginCommand, LoginError, LoginResult, LoginUseCase,
    SignUpCommand, SignUpError, SignUpUseCase, UpdateAccountCommand, UpdateAccountError,
    UpdateAccountUseCase,
};
use crate::account::application::ports::outgoing::{
    AccountListFilter, AccountProfile, AccountSummary,
};
use crate::breed::application::ports::incoming::use_cases::{
    GetBreedError, GetBreedUseCase, ListBreedsError, ListBreedsUseCase,
};
use crate::breed::application::ports::outgoing::{BreedListFilter, BreedView};
use crate::circle::application::ports::incoming::use_cases::{
    CreateCircleCommand, CreateCircleError, CreateCircleUseCase, DeactivateCircleCommand,
    DeactivateCircleError, DeactivateCircleUseCase, GetCircleError, GetCircleUseCase,
    GetSubscriptionError, GetSubscriptionUseCase, ListCirclePostsError, ListCirclePostsUseCase,
    ListCirclesError, ListCirclesUseCase, ListSubscriptionsError, ListSubscriptionsUseCase,
    SubscribeCommand, SubscribeError, SubscribeUseCase, UnsubscribeCommand, UnsubscribeError,
    UnsubscribeUseCase, UpdateCircleCommand, UpdateCircleError, UpdateCircleUseCase,
};
use crate::circle::application::ports::outgoing::{
    CircleDetail, CircleListFilter, CircleSummary, MemberView, SubscriptionDetail,
};
use crate::email::application::ports::outgoing::{
    AccountEmailNotificationError, AccountEmailNotifier,
};
use crate::following::application::ports::incoming::use_cases::{
    FollowCommand, FollowError, FollowUseCase, GetFollowingError, GetFollowingUseCase,
    ListFollowersError, ListFollowersUseCase, ListFollowsError, ListFollowsUseCase,
    UnfollowCommand, UnfollowError, UnfollowUseCase,
};
use crate::following::application::ports::outgoing::FollowingDetail;
use crate::media::application::ports::incoming::use_cases::{
    StoredImage, UploadImageCommand, UploadImageError, UploadImageUseCase,
};
use crate::post::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, CreatePostCommand,
    CreatePostError, CreatePostUseCase, DeleteCommentCommand, DeleteCommentError,
    DeleteCommentUseCase, DeletePostCommand, DeletePostError, DeletePostUseCase, GetPostError,
    GetPostUseCase, ListAccountPostsError, ListAccountPostsUseCase, ListCommentsError,
    ListCommentsUseCase, ListPostsError, ListPostsUseCase, UpdatePostCommand, UpdatePostError,
    UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{
    CommentView, PostCard, PostDetail, PostListFilter,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Account
// ============================================================================

#[derive(Default, Clone)]
pub struct StubSignUpUseCase;

#[async_trait]
impl SignUpUseCase for StubSignUpUseCase {
    async fn execute(&self, _command: SignUpCommand) -> Result<AccountSummary, SignUpError> {
        unimplemented!("Not used in this test")
    }
}

/// Pretends every confirmation email goes out.
#[derive(Default, Clone)]
pub struct StubAccountEmailNotifier;

#[async_trait]
impl AccountEmailNotifier for StubAccountEmailNotifier {
    async fn send_confirmation_email(
        &self,
        _username: &str,
        _email: &str,
    ) -> Result<(), AccountEmailNotificationError> {
        Ok(())
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginResult, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubConfirmAccountUseCase;

#[async_trait]
impl ConfirmAccountUseCase for StubConfirmAccountUseCase {
    async fn execute(&self, _command: ConfirmAccountCommand) -> Result<(), ConfirmAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAccountsUseCase;

#[async_trait]
impl ListAccountsUseCase for StubListAccountsUseCase {
    async fn execute(
        &self,
        _filter: AccountListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListAccountsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _username: &str) -> Result<AccountProfile, GetProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAccountUseCase;

#[async_trait]
impl UpdateAccountUseCase for StubUpdateAccountUseCase {
    async fn execute(
        &self,
        _command: UpdateAccountCommand,
    ) -> Result<AccountSummary, UpdateAccountError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeactivateAccountUseCase;

#[async_trait]
impl DeactivateAccountUseCase for StubDeactivateAccountUseCase {
    async fn execute(
        &self,
        _command: DeactivateAccountCommand,
    ) -> Result<(), DeactivateAccountError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Following
// ============================================================================

#[derive(Default, Clone)]
pub struct StubFollowUseCase;

#[async_trait]
impl FollowUseCase for StubFollowUseCase {
    async fn execute(&self, _command: FollowCommand) -> Result<FollowingDetail, FollowError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUnfollowUseCase;

#[async_trait]
impl UnfollowUseCase for StubUnfollowUseCase {
    async fn execute(&self, _command: UnfollowCommand) -> Result<(), UnfollowError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetFollowingUseCase;

#[async_trait]
impl GetFollowingUseCase for StubGetFollowingUseCase {
    async fn execute(
        &self,
        _username: &str,
        _followed: &str,
    ) -> Result<FollowingDetail, GetFollowingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListFollowsUseCase;

#[async_trait]
impl ListFollowsUseCase for StubListFollowsUseCase {
    async fn execute(
        &self,
        _username: &str,
        _page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListFollowsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListFollowersUseCase;

#[async_trait]
impl ListFollowersUseCase for StubListFollowersUseCase {
    async fn execute(
        &self,
        _username: &str,
        _page: PageRequest,
    ) -> Result<PageResult<AccountSummary>, ListFollowersError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Breed
// ============================================================================

#[derive(Default, Clone)]
pub struct StubListBreedsUseCase;

#[async_trait]
impl ListBreedsUseCase for StubListBreedsUseCase {
    async fn execute(
        &self,
        _filter: BreedListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<BreedView>, ListBreedsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetBreedUseCase;

#[async_trait]
impl GetBreedUseCase for StubGetBreedUseCase {
    async fn execute(&self, _id: Uuid) -> Result<BreedView, GetBreedError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Circle
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateCircleUseCase;

#[async_trait]
impl CreateCircleUseCase for StubCreateCircleUseCase {
    async fn execute(
        &self,
        _command: CreateCircleCommand,
    ) -> Result<CircleSummary, CreateCircleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCirclesUseCase;

#[async_trait]
impl ListCirclesUseCase for StubListCirclesUseCase {
    async fn execute(
        &self,
        _filter: CircleListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<CircleSummary>, ListCirclesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCircleUseCase;

#[async_trait]
impl GetCircleUseCase for StubGetCircleUseCase {
    async fn execute(&self, _slug_name: &str) -> Result<CircleDetail, GetCircleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCircleUseCase;

#[async_trait]
impl UpdateCircleUseCase for StubUpdateCircleUseCase {
    async fn execute(
        &self,
        _command: UpdateCircleCommand,
    ) -> Result<CircleSummary, UpdateCircleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeactivateCircleUseCase;

#[async_trait]
impl DeactivateCircleUseCase for StubDeactivateCircleUseCase {
    async fn execute(&self, _command: DeactivateCircleCommand) -> Result<(), DeactivateCircleError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubscribeUseCase;

#[async_trait]
impl SubscribeUseCase for StubSubscribeUseCase {
    async fn execute(
        &self,
        _command: SubscribeCommand,
    ) -> Result<SubscriptionDetail, SubscribeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListSubscriptionsUseCase;

#[async_trait]
impl ListSubscriptionsUseCase for StubListSubscriptionsUseCase {
    async fn execute(
        &self,
        _slug_name: &str,
        _is_admin: Option<bool>,
        _page: PageRequest,
    ) -> Result<PageResult<MemberView>, ListSubscriptionsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSubscriptionUseCase;

#[async_trait]
impl GetSubscriptionUseCase for StubGetSubscriptionUseCase {
    async fn execute(
        &self,
        _slug_name: &str,
        _username: &str,
    ) -> Result<SubscriptionDetail, GetSubscriptionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUnsubscribeUseCase;

#[async_trait]
impl UnsubscribeUseCase for StubUnsubscribeUseCase {
    async fn execute(&self, _command: UnsubscribeCommand) -> Result<(), UnsubscribeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCirclePostsUseCase;

#[async_trait]
impl ListCirclePostsUseCase for StubListCirclePostsUseCase {
    async fn execute(
        &self,
        _slug_name: &str,
        _page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListCirclePostsError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Post
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _command: CreatePostCommand) -> Result<PostDetail, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListPostsUseCase;

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        _filter: PostListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPostUseCase;

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<PostDetail, GetPostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(&self, _command: UpdatePostCommand) -> Result<PostDetail, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _command: DeletePostCommand) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAccountPostsUseCase;

#[async_trait]
impl ListAccountPostsUseCase for StubListAccountPostsUseCase {
    async fn execute(
        &self,
        _username: &str,
        _page: PageRequest,
    ) -> Result<PageResult<PostCard>, ListAccountPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCommentsUseCase;

#[async_trait]
impl ListCommentsUseCase for StubListCommentsUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _page: PageRequest,
    ) -> Result<PageResult<CommentView>, ListCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _command: DeleteCommentCommand) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Default, Clone)]
pub struct StubUploadImageUseCase;

#[async_trait]
impl UploadImageUseCase for StubUploadImageUseCase {
    fn max_bytes(&self) -> u64 {
        0
    }

    async fn execute(&self, _command: UploadImageCommand) -> Result<StoredImage, UploadImageError> {
        unimplemented!("Not used in this test")
    }
}
