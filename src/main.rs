pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::account;
pub use modules::breed;
pub use modules::circle;
pub use modules::email;
pub use modules::following;
pub use modules::media;
pub use modules::post;

use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account::adapter::incoming::web::extractors::RequestAuthenticator;
use crate::account::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::account::adapter::outgoing::security::Argon2Hasher;
use crate::account::adapter::outgoing::{AccountQueryPostgres, AccountRepositoryPostgres};
use crate::account::application::helpers::AccountResolver;
use crate::account::application::orchestrator::AccountRegistrationOrchestrator;
use crate::account::application::ports::outgoing::{AccountQuery, TokenProvider};
use crate::account::application::services::{
    ConfirmAccountService, DeactivateAccountService, GetProfileService, ListAccountsService,
    LoginService, SignUpService, UpdateAccountService,
};
use crate::account::application::AccountUseCases;
use crate::api::openapi::ApiDoc;
use crate::breed::adapter::outgoing::BreedQueryPostgres;
use crate::breed::application::services::{GetBreedService, ListBreedsService};
use crate::breed::application::BreedUseCases;
use crate::circle::adapter::outgoing::{CircleQueryPostgres, CircleRepositoryPostgres};
use crate::circle::application::helpers::CircleResolver;
use crate::circle::application::services::{
    CreateCircleService, DeactivateCircleService, GetCircleService, GetSubscriptionService,
    ListCirclePostsService, ListCirclesService, ListSubscriptionsService, SubscribeService,
    UnsubscribeService, UpdateCircleService,
};
use crate::circle::application::CircleUseCases;
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{AccountEmailNotifier, EmailSender};
use crate::email::application::services::AccountEmailService;
use crate::following::adapter::outgoing::{FollowingQueryPostgres, FollowingRepositoryPostgres};
use crate::following::application::services::{
    FollowService, GetFollowingService, ListFollowersService, ListFollowsService,
    UnfollowService,
};
use crate::following::application::FollowingUseCases;
use crate::media::adapter::outgoing::LocalImageStorage;
use crate::media::application::domain::media_config::MediaConfig;
use crate::media::application::services::UploadImageService;
use crate::media::application::MediaUseCases;
use crate::post::adapter::outgoing::{PostQueryPostgres, PostRepositoryPostgres};
use crate::post::application::services::{
    CreateCommentService, CreatePostService, DeleteCommentService, DeletePostService,
    GetPostService, ListAccountPostsService, ListCommentsService, ListPostsService,
    PostReferences, UpdatePostService,
};
use crate::post::application::PostUseCases;
use crate::shared::api::custom_json_config;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_account_orchestrator: Arc<AccountRegistrationOrchestrator>,
    pub account: AccountUseCases,
    pub following: FollowingUseCases,
    pub breed: BreedUseCases,
    pub circle: CircleUseCases,
    pub post: PostUseCases,
    pub media: MediaUseCases,
}

fn required(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| io::Error::other(format!("{key} is not set")))
}

#[cfg(not(tarpaulin_include))]
fn load_env() -> String {
    let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // .env.{environment} first, then .env
    let env_file = format!(".env.{}", rust_env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    rust_env
}

#[cfg(not(tarpaulin_include))]
fn build_email_sender(rust_env: &str) -> io::Result<SmtpEmailSender> {
    let from_email = required("EMAIL_FROM")?;

    if rust_env == "test" {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .map_err(|_| io::Error::other("Invalid SMTP_PORT"))?;

        Ok(SmtpEmailSender::new_local(&host, port, &from_email))
    } else {
        let smtp_server = required("SMTP_SERVER")?;
        let smtp_user = required("SMTP_USERNAME")?;
        let smtp_pass = required("SMTP_PASSWORD")?;

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .map_err(io::Error::other)
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    let rust_env = load_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(environment = %rust_env, "Starting application...");

    let db_url = required("DATABASE_URL")?;
    let host = required("HOST")?;
    let port = required("PORT")?;
    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(io::Error::other)?;

    if env::var("RUN_MIGRATIONS").as_deref() == Ok("true") {
        info!("Applying pending migrations");
        Migrator::up(&conn, None).await.map_err(io::Error::other)?;
    }

    let db = Arc::new(conn);

    // Security
    let jwt_config = JwtConfig::from_env().map_err(io::Error::other)?;
    let tokens: Arc<dyn TokenProvider + Send + Sync> = Arc::new(JwtTokenService::new(jwt_config));
    let hasher = Arc::new(Argon2Hasher::from_env());

    // Email
    let sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(build_email_sender(&rust_env)?);
    let confirmation_url = env::var("CONFIRMATION_URL")
        .unwrap_or_else(|_| "http://localhost:3000/login".to_string());
    let notifier: Arc<dyn AccountEmailNotifier + Send + Sync> = Arc::new(
        AccountEmailService::new(sender, Arc::clone(&tokens), &confirmation_url),
    );

    // Adapters
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db));
    let following_repo = FollowingRepositoryPostgres::new(Arc::clone(&db));
    let following_query = FollowingQueryPostgres::new(Arc::clone(&db));
    let breed_query = BreedQueryPostgres::new(Arc::clone(&db));
    let circle_repo = CircleRepositoryPostgres::new(Arc::clone(&db));
    let circle_query = CircleQueryPostgres::new(Arc::clone(&db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(&db));
    let post_query = PostQueryPostgres::new(Arc::clone(&db));

    let account_query_arc: Arc<dyn AccountQuery + Send + Sync> = Arc::new(account_query.clone());
    let accounts = AccountResolver::new(Arc::clone(&account_query_arc));
    let authenticator = web::Data::new(RequestAuthenticator::new(
        Arc::clone(&tokens),
        account_query_arc,
    ));
    let circles = CircleResolver::new(Arc::new(circle_query.clone()));
    let references = PostReferences::new(
        Arc::new(breed_query.clone()),
        Arc::new(circle_query.clone()),
    );

    // Account
    let sign_up = SignUpService::new(account_repo.clone(), hasher.clone());
    let register_account_orchestrator =
        AccountRegistrationOrchestrator::new(Arc::new(sign_up), notifier);

    let account = AccountUseCases {
        login: Arc::new(LoginService::new(
            account_query.clone(),
            hasher,
            Arc::clone(&tokens),
        )),
        confirm: Arc::new(ConfirmAccountService::new(
            account_repo.clone(),
            account_query.clone(),
            Arc::clone(&tokens),
        )),
        list: Arc::new(ListAccountsService::new(account_query.clone())),
        get_profile: Arc::new(GetProfileService::new(account_query.clone())),
        update: Arc::new(UpdateAccountService::new(
            account_repo.clone(),
            account_query.clone(),
        )),
        deactivate: Arc::new(DeactivateAccountService::new(account_repo, account_query)),
    };

    // Following
    let following = FollowingUseCases {
        follow: Arc::new(FollowService::new(
            following_repo.clone(),
            following_query.clone(),
            accounts.clone(),
        )),
        unfollow: Arc::new(UnfollowService::new(
            following_repo,
            following_query.clone(),
            accounts.clone(),
        )),
        get: Arc::new(GetFollowingService::new(
            following_query.clone(),
            accounts.clone(),
        )),
        list_follows: Arc::new(ListFollowsService::new(
            following_query.clone(),
            accounts.clone(),
        )),
        list_followers: Arc::new(ListFollowersService::new(following_query, accounts.clone())),
    };

    // Breed
    let breed = BreedUseCases {
        list: Arc::new(ListBreedsService::new(breed_query.clone())),
        get: Arc::new(GetBreedService::new(breed_query)),
    };

    // Circle
    let circle = CircleUseCases {
        create: Arc::new(CreateCircleService::new(
            circle_repo.clone(),
            circle_query.clone(),
        )),
        list: Arc::new(ListCirclesService::new(circle_query.clone())),
        get: Arc::new(GetCircleService::new(circle_query.clone())),
        update: Arc::new(UpdateCircleService::new(
            circle_repo.clone(),
            circle_query.clone(),
        )),
        deactivate: Arc::new(DeactivateCircleService::new(
            circle_repo.clone(),
            circle_query.clone(),
        )),
        subscribe: Arc::new(SubscribeService::new(
            circle_repo.clone(),
            circle_query.clone(),
        )),
        list_subscriptions: Arc::new(ListSubscriptionsService::new(circle_query.clone())),
        get_subscription: Arc::new(GetSubscriptionService::new(
            circle_query.clone(),
            accounts.clone(),
        )),
        unsubscribe: Arc::new(UnsubscribeService::new(
            circle_repo,
            circle_query,
            accounts.clone(),
        )),
        list_posts: Arc::new(ListCirclePostsService::new(post_query.clone(), circles)),
    };

    // Post
    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            post_query.clone(),
            references.clone(),
        )),
        list: Arc::new(ListPostsService::new(post_query.clone())),
        get: Arc::new(GetPostService::new(post_query.clone())),
        update: Arc::new(UpdatePostService::new(
            post_repo.clone(),
            post_query.clone(),
            references,
        )),
        delete: Arc::new(DeletePostService::new(post_repo.clone(), post_query.clone())),
        list_by_account: Arc::new(ListAccountPostsService::new(post_query.clone(), accounts)),
        create_comment: Arc::new(CreateCommentService::new(
            post_repo.clone(),
            post_query.clone(),
        )),
        list_comments: Arc::new(ListCommentsService::new(post_query.clone())),
        delete_comment: Arc::new(DeleteCommentService::new(post_repo, post_query)),
    };

    // Media
    let media_config = MediaConfig::from_env();
    if let Err(e) = tokio::fs::create_dir_all(&media_config.root).await {
        warn!(root = %media_config.root.display(), error = %e, "Cannot create media root");
    }
    let media = MediaUseCases {
        upload: Arc::new(UploadImageService::new(
            Arc::new(LocalImageStorage::new(media_config.root.clone())),
            media_config.max_bytes,
        )),
    };

    let state = AppState {
        register_account_orchestrator: Arc::new(register_account_orchestrator),
        account,
        following,
        breed,
        circle,
        post,
        media,
    };

    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(authenticator.clone())
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::account::adapter::incoming::web::routes as account;
    use crate::breed::adapter::incoming::web::routes as breed;
    use crate::circle::adapter::incoming::web::routes as circle;
    use crate::following::adapter::incoming::web::routes as following;
    use crate::media::adapter::incoming::web::routes as media;
    use crate::post::adapter::incoming::web::routes as post;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Account
    cfg.service(account::sign_up_handler);
    cfg.service(account::login_handler);
    cfg.service(account::confirm_account_handler);
    cfg.service(account::list_accounts_handler);
    cfg.service(account::get_profile_handler);
    cfg.service(account::update_account_handler);
    cfg.service(account::deactivate_account_handler);
    // Following
    cfg.service(following::follow_handler);
    cfg.service(following::list_follows_handler);
    cfg.service(following::list_followers_handler);
    cfg.service(following::get_following_handler);
    cfg.service(following::unfollow_handler);
    // Breed
    cfg.service(breed::list_breeds_handler);
    cfg.service(breed::get_breed_handler);
    // Circle
    cfg.service(circle::create_circle_handler);
    cfg.service(circle::list_circles_handler);
    cfg.service(circle::get_circle_handler);
    cfg.service(circle::update_circle_handler);
    cfg.service(circle::deactivate_circle_handler);
    cfg.service(circle::subscribe_handler);
    cfg.service(circle::list_subscriptions_handler);
    cfg.service(circle::get_subscription_handler);
    cfg.service(circle::unsubscribe_handler);
    cfg.service(circle::list_circle_posts_handler);
    // Post
    cfg.service(post::create_post_handler);
    cfg.service(post::list_posts_handler);
    cfg.service(post::get_post_handler);
    cfg.service(post::update_post_handler);
    cfg.service(post::delete_post_handler);
    cfg.service(post::list_account_posts_handler);
    cfg.service(post::create_comment_handler);
    cfg.service(post::list_comments_handler);
    cfg.service(post::delete_comment_handler);
    // Media
    cfg.service(media::upload_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
