use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

/// Filters for `GET /users`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: u32,
    pub keyword: Option<String>,
    pub order: Option<String>,
    pub status: Option<String>,
    pub gender: Option<String>,
    pub status_account: Option<String>,
    pub role: Option<String>,
    pub has_room: Option<bool>,
}

impl UserListQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a Client,
}

impl<'a> UserApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, user_id: &str) -> Result<Response, ClientError> {
        self.client.r().set_path_param("userID", user_id).get("/users/{userID}")
    }

    pub fn list(&self, query: &UserListQuery) -> Result<Response, ClientError> {
        let mut req = self.client.r().set_query_param("page", query.page.to_string());
        let optional = [
            ("keyword", query.keyword.as_deref()),
            ("order", query.order.as_deref()),
            ("status", query.status.as_deref()),
            ("gender", query.gender.as_deref()),
            ("status_account", query.status_account.as_deref()),
            ("role", query.role.as_deref()),
        ];
        for (key, value) in optional.into_iter().filter_map(|(k, v)| v.map(|v| (k, v))) {
            req = req.set_query_param(key, value);
        }
        if let Some(has_room) = query.has_room {
            req = req.set_query_param("has_room", has_room.to_string());
        }
        req.get("/users")
    }

    pub fn update_status(&self, user_id: &str, status_account: &str) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", user_id)
            .set_body(&serde_json::json!({ "status_account": status_account }))
            .put("/users/{id}/status-account")
    }
}
