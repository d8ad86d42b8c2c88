use serde::Serialize;
use serde_json::json;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

/// Login and account lifecycle under `/auth`.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a Client,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Log in as a dormitory manager.
    pub fn login(&self, email: &str, password: &str) -> Result<Response, ClientError> {
        let body = json!({ "email": email, "password": password, "type": "manager" });
        self.client.r().set_body(&body).post("/auth/login")
    }

    pub fn logout(&self) -> Result<Response, ClientError> {
        self.client.r().post("/auth/logout")
    }

    /// Register a staff account.
    pub fn register(&self, email: &str, password: &str, full_name: &str, phone: &str) -> Result<Response, ClientError> {
        let body = json!({
            "email": email,
            "password": password,
            "full_name": full_name,
            "phone": phone,
            "role": "staff",
        });
        self.client.r().set_body(&body).post("/auth/register")
    }

    pub fn me(&self) -> Result<Response, ClientError> {
        self.client.r().get("/auth/me")
    }

    pub fn verify_account(&self, token: &str, email: &str) -> Result<Response, ClientError> {
        let body = json!({ "token": token, "email": email });
        self.client.r().set_body(&body).post("/auth/verify-account")
    }

    pub fn resend_verify_account(&self, email: &str) -> Result<Response, ClientError> {
        self.client.r().set_body(&json!({ "email": email })).post("/auth/resend-verify-account")
    }

    pub fn send_forgot_password_email(&self, email: &str) -> Result<Response, ClientError> {
        let body = json!({ "email": email, "type": "manager" });
        self.client.r().set_body(&body).post("/auth/forgot-password")
    }

    pub fn reset_password<T: Serialize + ?Sized>(&self, body: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(body).post("/auth/reset-password")
    }

    /// Attach the session token to every later request on this client.
    pub fn set_token(&self, token: &str) {
        self.client.set_auth_token(token);
    }
}
