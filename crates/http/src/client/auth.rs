//! Login and signup on the public client.

use reqwest::Method;

use super::error::ClientError;
use super::typed::{execute, execute_empty, PublicRosterClient};
use crate::types::{LoginRequest, LoginResponse, SignupRequest};

impl PublicRosterClient {
    /// Exchanges credentials for a session token and operator profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self.request(Method::POST, "/login").json(&body);
        execute(request, "Login failed").await
    }

    /// Registers a new operator account. The gateway answers 201 with no
    /// body the caller needs; login is a separate step.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/signup").json(signup);
        execute_empty(request, "Signup failed").await
    }
}
