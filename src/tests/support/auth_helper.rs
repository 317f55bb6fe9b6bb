use std::sync::Arc;

use actix_web::{dev::ServiceResponse, test, web};
use uuid::Uuid;

use crate::account::adapter::incoming::web::extractors::RequestAuthenticator;
use crate::account::application::domain::entities::UserId;
use crate::account::application::domain::policies::test_fixtures::account;
use crate::account::application::ports::outgoing::token_provider::{
    AccessClaims, ConfirmationClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};
use crate::account::application::services::mocks::MockAccountQuery;

/// Accepts any bearer token as an access token for `user_id`.
#[derive(Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub is_confirmed: bool,
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _: UserId, _: bool) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn verify_access_token(&self, _token: &str) -> Result<AccessClaims, TokenError> {
        Ok(AccessClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            is_confirmed: self.is_confirmed,
        })
    }

    fn generate_confirmation_token(&self, _: &str) -> Result<String, TokenError> {
        unimplemented!("Not used in this test")
    }

    fn verify_confirmation_token(&self, _: &str) -> Result<ConfirmationClaims, TokenError> {
        unimplemented!("Not used in this test")
    }
}

/// Authenticator accepting any bearer token for an active account with `user_id`.
pub fn token_data(user_id: Uuid) -> web::Data<RequestAuthenticator> {
    let mut requester = account("requester");
    requester.id = UserId::from(user_id);

    web::Data::new(RequestAuthenticator::new(
        Arc::new(StubTokenProvider {
            user_id,
            is_confirmed: true,
        }),
        Arc::new(MockAccountQuery::with(vec![requester])),
    ))
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}
