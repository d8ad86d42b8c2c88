use serde::Serialize;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

#[derive(Debug, Clone, Copy)]
pub struct AmenitiesApi<'a> {
    client: &'a Client,
}

impl<'a> AmenitiesApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, amenity_id: &str) -> Result<Response, ClientError> {
        self.client.r().set_path_param("id", amenity_id).get("/amenities/{id}")
    }

    pub fn list(&self, page: u32) -> Result<Response, ClientError> {
        self.client.r().set_query_param("page", page.to_string()).get("/amenities")
    }

    pub fn create<T: Serialize + ?Sized>(&self, amenity: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(amenity).post("/amenities")
    }

    pub fn delete(&self, amenity_id: &str) -> Result<Response, ClientError> {
        self.client.r().set_path_param("id", amenity_id).delete("/amenities/{id}")
    }

    pub fn update<T: Serialize + ?Sized>(&self, amenity_id: &str, amenity: &T) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", amenity_id)
            .set_body(amenity)
            .patch("/amenities/{id}")
    }
}
