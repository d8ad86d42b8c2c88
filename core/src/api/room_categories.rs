use serde::Serialize;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

#[derive(Debug, Clone, Copy)]
pub struct RoomCategoryApi<'a> {
    client: &'a Client,
}

impl<'a> RoomCategoryApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, category_id: &str) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", category_id)
            .get("/room-categories/{id}")
    }

    // Page arrives from the UI as text and is forwarded unchecked.
    pub fn list(&self, page: &str) -> Result<Response, ClientError> {
        self.client.r().set_query_param("page", page).get("/room-categories")
    }

    pub fn create<T: Serialize + ?Sized>(&self, category: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(category).post("/room-categories")
    }
}
