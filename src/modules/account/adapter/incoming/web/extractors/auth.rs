use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;
use tracing::error;

use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::token_provider::{
    TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::account::application::ports::outgoing::AccountQuery;
use crate::shared::api::ApiResponse;

/// Caller identified by a valid access token whose account is still active.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub is_confirmed: bool,
}

/// Verifies bearer tokens and checks the account behind them.
///
/// Registered once as app data; the extractor fails with 500 when it is missing.
pub struct RequestAuthenticator {
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    accounts: Arc<dyn AccountQuery + Send + Sync>,
}

impl RequestAuthenticator {
    pub fn new(
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        accounts: Arc<dyn AccountQuery + Send + Sync>,
    ) -> Self {
        Self { tokens, accounts }
    }

    pub async fn authenticate(&self, token: &str) -> Result<AuthenticatedUser, HttpResponse> {
        let claims = match self.tokens.verify_access_token(token) {
            Ok(claims) if claims.token_type == ACCESS_TOKEN_TYPE => claims,
            Ok(_) => {
                return Err(ApiResponse::unauthorized(
                    "INVALID_TOKEN_TYPE",
                    "Invalid token type",
                ))
            }
            Err(_) => {
                return Err(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            }
        };

        let user_id = UserId::from(claims.sub);

        // Issued tokens outlive deactivation; the flag is read on every request.
        match self.accounts.find_by_id(user_id).await {
            Ok(Some(account)) if account.is_active => Ok(AuthenticatedUser {
                user_id,
                is_confirmed: account.is_confirmed,
            }),
            Ok(_) => Err(ApiResponse::unauthorized(
                "ACCOUNT_INACTIVE",
                "User inactive or deleted.",
            )),
            Err(e) => {
                error!(user_id = %claims.sub, error = %e, "Requester lookup failed");
                Err(ApiResponse::internal_error())
            }
        }
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let authenticator = req.app_data::<web::Data<RequestAuthenticator>>().cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let authenticator = authenticator.ok_or_else(|| {
                error!("RequestAuthenticator is not registered as app data");
                create_api_error(ApiResponse::internal_error())
            })?;

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            authenticator
                .authenticate(&token)
                .await
                .map_err(create_api_error)
        })
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};
    use uuid::Uuid;

    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::account::application::ports::outgoing::token_provider::{
        AccessClaims, ConfirmationClaims, TokenError,
    };
    use crate::account::application::services::mocks::MockAccountQuery;
    use crate::tests::support::auth_helper::{bearer, read_json, token_data, StubTokenProvider};

    #[get("/whoami")]
    async fn whoami(user: AuthenticatedUser) -> impl Responder {
        ApiResponse::success(user.user_id)
    }

    struct RefreshLikeProvider;

    impl TokenProvider for RefreshLikeProvider {
        fn generate_access_token(&self, _: UserId, _: bool) -> Result<String, TokenError> {
            unimplemented!("Not used in this test")
        }

        fn verify_access_token(&self, _: &str) -> Result<AccessClaims, TokenError> {
            Ok(AccessClaims {
                sub: Uuid::new_v4(),
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                token_type: "refresh".to_string(),
                is_confirmed: true,
            })
        }

        fn generate_confirmation_token(&self, _: &str) -> Result<String, TokenError> {
            unimplemented!("Not used in this test")
        }

        fn verify_confirmation_token(&self, _: &str) -> Result<ConfirmationClaims, TokenError> {
            unimplemented!("Not used in this test")
        }
    }

    fn authenticator(user_id: Uuid, accounts: MockAccountQuery) -> web::Data<RequestAuthenticator> {
        web::Data::new(RequestAuthenticator::new(
            Arc::new(StubTokenProvider {
                user_id,
                is_confirmed: true,
            }),
            Arc::new(accounts),
        ))
    }

    async fn call_whoami(auth: web::Data<RequestAuthenticator>) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(App::new().app_data(auth).service(whoami)).await;
        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn valid_token_yields_user() {
        let user_id = Uuid::new_v4();

        let resp = call_whoami(token_data(user_id)).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"], user_id.to_string());
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app =
            test::init_service(App::new().app_data(token_data(Uuid::new_v4())).service(whoami))
                .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/whoami").to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn non_access_token_is_rejected() {
        let auth = web::Data::new(RequestAuthenticator::new(
            Arc::new(RefreshLikeProvider),
            Arc::new(MockAccountQuery::default()),
        ));

        let resp = call_whoami(auth).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_TOKEN_TYPE");
    }

    #[actix_web::test]
    async fn deactivated_account_token_is_rejected() {
        let mut ana = account("ana");
        ana.is_active = false;
        let user_id = Uuid::from(ana.id);

        let resp = call_whoami(authenticator(user_id, MockAccountQuery::with(vec![ana]))).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "ACCOUNT_INACTIVE");
    }

    #[actix_web::test]
    async fn token_for_unknown_account_is_rejected() {
        let resp = call_whoami(authenticator(Uuid::new_v4(), MockAccountQuery::default())).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "ACCOUNT_INACTIVE");
    }

    #[actix_web::test]
    async fn confirmation_state_comes_from_the_account() {
        let mut ana = account("ana");
        ana.is_confirmed = false;
        let auth = authenticator(Uuid::from(ana.id), MockAccountQuery::with(vec![ana]));

        let user = auth.authenticate("test-token").await.unwrap();

        assert!(!user.is_confirmed);
    }

    #[actix_web::test]
    async fn lookup_failure_is_internal_error() {
        let resp = call_whoami(authenticator(Uuid::new_v4(), MockAccountQuery::failing())).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn missing_authenticator_is_internal_error() {
        let app = test::init_service(App::new().service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
