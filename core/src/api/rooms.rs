use serde::Serialize;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

#[derive(Debug, Clone, Copy)]
pub struct RoomApi<'a> {
    client: &'a Client,
}

impl<'a> RoomApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, room_id: u64) -> Result<Response, ClientError> {
        self.client.r().set_path_param("id", room_id.to_string()).get("/rooms/{id}")
    }

    pub fn list(&self, page: u32) -> Result<Response, ClientError> {
        self.client.r().set_query_param("page", page.to_string()).get("/rooms")
    }

    pub fn create<T: Serialize + ?Sized>(&self, room: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(room).post("/rooms")
    }

    pub fn delete(&self, room_id: u64) -> Result<Response, ClientError> {
        self.client.r().set_path_param("id", room_id.to_string()).delete("/rooms/{id}")
    }

    /// Partial update.
    pub fn update<T: Serialize + ?Sized>(&self, room_id: u64, room: &T) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", room_id.to_string())
            .set_body(room)
            .patch("/rooms/{id}")
    }
}
