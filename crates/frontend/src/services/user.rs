//! User CRUD service. A fresh authenticated client is built from the
//! context token on each use, so the token in play is always the one the
//! calling component observed.

use roster_core::{NewUser, User, UserUpdate};
use roster_http::types::UserListResponse;
use roster_http::{AuthenticatedRosterClient, ClientBuilder, ClientError};

use crate::config;

#[derive(Clone)]
pub struct UserService {
    client: AuthenticatedRosterClient,
}

impl UserService {
    pub fn new(token: &str) -> Result<Self, ClientError> {
        let client = ClientBuilder::new()
            .base_url(config::api_base_url())
            .build_authenticated(token)?;
        Ok(Self { client })
    }

    /// One page of the listing. `page` is 1-based.
    pub async fn list(
        &self,
        page: usize,
        size: usize,
        search: &str,
    ) -> Result<UserListResponse, ClientError> {
        self.client
            .list_users(Some(page), Some(size), Some(search))
            .await
    }

    /// Every user matching `search`, across all pages: probe for the total
    /// with a single-row page, then fetch everything in one request.
    pub async fn fetch_all(&self, search: &str) -> Result<Vec<User>, ClientError> {
        let probe = self.client.list_users(Some(1), Some(1), Some(search)).await?;
        let size = probe.total_users.max(1);
        let full = self
            .client
            .list_users(Some(1), Some(size), Some(search))
            .await?;
        Ok(full.data)
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, ClientError> {
        self.client.create_user(user).await
    }

    pub async fn get(&self, id: &str) -> Result<User, ClientError> {
        self.client.get_user(id).await
    }

    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<User, ClientError> {
        self.client.update_user(id, update).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.client.delete_user(id).await
    }

    pub async fn verify(&self) -> Result<(), ClientError> {
        self.client.verify_token().await
    }
}
