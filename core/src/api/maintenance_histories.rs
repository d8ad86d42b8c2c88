use serde::Serialize;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

/// Repair and maintenance log entries, filterable by room.
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceHistoryApi<'a> {
    client: &'a Client,
}

impl<'a> MaintenanceHistoryApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, history_id: &str) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", history_id)
            .get("/maintenance-histories/{id}")
    }

    pub fn list(&self, page: &str, room_id: &str) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_query_param("page", page)
            .set_query_param("room_id", room_id)
            .get("/maintenance-histories")
    }

    pub fn create<T: Serialize + ?Sized>(&self, history: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(history).post("/maintenance-histories")
    }

    pub fn delete(&self, history_id: &str) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", history_id)
            .delete("/maintenance-histories/{id}")
    }

    pub fn update<T: Serialize + ?Sized>(&self, history_id: &str, history: &T) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", history_id)
            .set_body(history)
            .patch("/maintenance-histories/{id}")
    }
}
