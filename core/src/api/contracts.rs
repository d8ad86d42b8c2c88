use serde::Serialize;

use crate::client::Client;
use crate::error::ClientError;
use crate::response::Response;

#[derive(Debug, Clone, Copy)]
pub struct ContractApi<'a> {
    client: &'a Client,
}

impl<'a> ContractApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn details(&self, contract_id: u64) -> Result<Response, ClientError> {
        self.client
            .r()
            .set_path_param("id", contract_id.to_string())
            .get("/contracts/{id}")
    }

    pub fn list(&self, page: u32, keyword: Option<&str>) -> Result<Response, ClientError> {
        let mut req = self.client.r().set_query_param("page", page.to_string());
        if let Some(keyword) = keyword {
            req = req.set_query_param("keyword", keyword);
        }
        req.get("/contracts")
    }

    pub fn create<T: Serialize + ?Sized>(&self, contract: &T) -> Result<Response, ClientError> {
        self.client.r().set_body(contract).post("/contracts")
    }
}
