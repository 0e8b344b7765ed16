//! User CRUD operations on the authenticated client.

use reqwest::Method;
use roster_core::{NewUser, User, UserUpdate, DEFAULT_PAGE_SIZE};

use super::error::ClientError;
use super::typed::{execute, execute_empty, AuthenticatedRosterClient};
use crate::types::UserListResponse;

impl AuthenticatedRosterClient {
    /// Creates a user record.
    pub async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let request = self.request(Method::POST, "/create").json(user);
        execute(request, "Failed to create user").await
    }

    /// Fetches one page of the listing. `page` is 1-based on the wire; a
    /// zero or missing value falls back to the first page at the default
    /// size with an empty search.
    pub async fn list_users(
        &self,
        page: Option<usize>,
        size: Option<usize>,
        search: Option<&str>,
    ) -> Result<UserListResponse, ClientError> {
        let page = page.unwrap_or(1).max(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let search = search.unwrap_or("");
        let request = self
            .request(Method::GET, "/getallusers")
            .query(&[("page", page.to_string()), ("size", size.to_string())])
            .query(&[("search", search)]);
        execute(request, "Failed to fetch users").await
    }

    /// Fetches a single user by id.
    pub async fn get_user(&self, id: &str) -> Result<User, ClientError> {
        let request = self.request(Method::GET, &format!("/getuser/{id}"));
        execute(request, "User not Found").await
    }

    /// Applies a partial update; unset fields are left untouched.
    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/update/{id}"))
            .json(update);
        execute(request, "Failed to Update User").await
    }

    /// Deletes a user. The gateway answers with an empty body.
    pub async fn delete_user(&self, id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/delete/{id}"));
        execute_empty(request, "Failed to Delete User").await
    }

    /// Checks that the bearer token this client carries is still accepted.
    pub async fn verify_token(&self) -> Result<(), ClientError> {
        let request = self.request(Method::GET, "/verify-token");
        execute_empty(request, "Session expired").await
    }
}
