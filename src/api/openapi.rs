use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};

use crate::account::adapter::incoming::web::routes::{
    ConfirmAccountRequest, LoginRequest, SignUpRequest, UpdateAccountRequest,
};
use crate::account::application::ports::incoming::use_cases::LoginResult;
use crate::account::application::ports::outgoing::{
    AccountProfile, AccountSummary, MembershipView,
};
use crate::breed::application::domain::entities::Animal;
use crate::breed::application::ports::outgoing::BreedView;
use crate::circle::adapter::incoming::web::routes::{CreateCircleRequest, UpdateCircleRequest};
use crate::circle::application::ports::outgoing::{
    CircleDetail, CircleSummary, MemberView, SubscriptionDetail,
};
use crate::following::application::ports::outgoing::FollowingDetail;
use crate::media::application::domain::entities::ImageKind;
use crate::media::application::ports::incoming::use_cases::StoredImage;
use crate::post::adapter::incoming::web::routes::{
    CreateCommentRequest, CreatePostRequest, UpdatePostRequest,
};
use crate::post::application::domain::entities::{Color, PetSize, PostState, PostTag};
use crate::post::application::ports::outgoing::{CommentView, PostCard, PostDetail};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Petwatch API",
        version = "1.0.0",
        description = "Lost, found and adoptable pets: accounts, follows, circles, posts and comments",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Accounts
        crate::account::adapter::incoming::web::routes::sign_up_handler,
        crate::account::adapter::incoming::web::routes::login_handler,
        crate::account::adapter::incoming::web::routes::confirm_account_handler,
        crate::account::adapter::incoming::web::routes::list_accounts_handler,
        crate::account::adapter::incoming::web::routes::get_profile_handler,
        crate::account::adapter::incoming::web::routes::update_account_handler,
        crate::account::adapter::incoming::web::routes::deactivate_account_handler,

        // Follows
        crate::following::adapter::incoming::web::routes::follow_handler,
        crate::following::adapter::incoming::web::routes::list_follows_handler,
        crate::following::adapter::incoming::web::routes::list_followers_handler,
        crate::following::adapter::incoming::web::routes::get_following_handler,
        crate::following::adapter::incoming::web::routes::unfollow_handler,

        // Breeds
        crate::breed::adapter::incoming::web::routes::list_breeds_handler,
        crate::breed::adapter::incoming::web::routes::get_breed_handler,

        // Circles
        crate::circle::adapter::incoming::web::routes::create_circle_handler,
        crate::circle::adapter::incoming::web::routes::list_circles_handler,
        crate::circle::adapter::incoming::web::routes::get_circle_handler,
        crate::circle::adapter::incoming::web::routes::update_circle_handler,
        crate::circle::adapter::incoming::web::routes::deactivate_circle_handler,
        crate::circle::adapter::incoming::web::routes::subscribe_handler,
        crate::circle::adapter::incoming::web::routes::list_subscriptions_handler,
        crate::circle::adapter::incoming::web::routes::get_subscription_handler,
        crate::circle::adapter::incoming::web::routes::unsubscribe_handler,
        crate::circle::adapter::incoming::web::routes::list_circle_posts_handler,

        // Posts
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::list_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,
        crate::post::adapter::incoming::web::routes::list_account_posts_handler,

        // Comments
        crate::post::adapter::incoming::web::routes::create_comment_handler,
        crate::post::adapter::incoming::web::routes::list_comments_handler,
        crate::post::adapter::incoming::web::routes::delete_comment_handler,

        // Media
        crate::media::adapter::incoming::web::routes::upload_image_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Accounts
            SignUpRequest,
            LoginRequest,
            LoginResult,
            ConfirmAccountRequest,
            UpdateAccountRequest,
            AccountSummary,
            AccountProfile,
            MembershipView,
            FollowingDetail,

            // Breeds
            Animal,
            BreedView,

            // Circles
            CreateCircleRequest,
            UpdateCircleRequest,
            CircleSummary,
            CircleDetail,
            MemberView,
            SubscriptionDetail,

            // Posts
            PostTag,
            PostState,
            Color,
            PetSize,
            CreatePostRequest,
            UpdatePostRequest,
            PostCard,
            PostDetail,
            CreateCommentRequest,
            CommentView,

            // Media
            ImageKind,
            StoredImage
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Sign-up, login, confirmation and profiles"),
        (name = "follows", description = "Who follows whom"),
        (name = "breeds", description = "Read-only breed catalog"),
        (name = "circles", description = "Circles and their subscriptions"),
        (name = "posts", description = "Lost, found and adoption ads"),
        (name = "comments", description = "Comments on posts"),
        (name = "media", description = "Image uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route_group() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/accounts",
            "/api/accounts/{username}/follows",
            "/api/general/breeds",
            "/api/circles/{slug_name}/subscriptions",
            "/api/posts/{id}/comments",
            "/api/media/{kind}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }

        let schemes = doc.components.expect("components").security_schemes;
        assert!(schemes.contains_key("BearerAuth"));
    }
}
