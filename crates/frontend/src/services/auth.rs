//! Login and signup against the public client.

use roster_http::types::{LoginResponse, SignupRequest};
use roster_http::{ClientBuilder, ClientError, PublicRosterClient};

use crate::config;

#[derive(Clone)]
pub struct AuthService {
    client: PublicRosterClient,
}

impl AuthService {
    pub fn new() -> Result<Self, ClientError> {
        let client = ClientBuilder::new()
            .base_url(config::api_base_url())
            .build_public()?;
        Ok(Self { client })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        self.client.login(email, password).await
    }

    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), ClientError> {
        self.client.signup(signup).await
    }
}
