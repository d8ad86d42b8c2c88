//! Resource-specific endpoints of the dormitory backend.
//!
//! Every method builds one request through [`Client::r`] and returns the
//! `Response` untouched, so callers see 4xx/5xx bodies exactly as the server
//! sent them.

mod amenities;
mod auth;
mod contracts;
mod maintenance_histories;
mod room_categories;
mod rooms;
mod users;

use std::sync::Arc;

pub use amenities::AmenitiesApi;
pub use auth::AuthApi;
pub use contracts::ContractApi;
pub use maintenance_histories::MaintenanceHistoryApi;
pub use room_categories::RoomCategoryApi;
pub use rooms::RoomApi;
pub use users::{UserApi, UserListQuery};

use crate::client::Client;

/// Entry point grouping every resource API over one shared client.
#[derive(Debug, Clone)]
pub struct Api {
    client: Arc<Client>,
}

impl Api {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.client)
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi::new(&self.client)
    }

    pub fn rooms(&self) -> RoomApi<'_> {
        RoomApi::new(&self.client)
    }

    pub fn contracts(&self) -> ContractApi<'_> {
        ContractApi::new(&self.client)
    }

    pub fn amenities(&self) -> AmenitiesApi<'_> {
        AmenitiesApi::new(&self.client)
    }

    pub fn room_categories(&self) -> RoomCategoryApi<'_> {
        RoomCategoryApi::new(&self.client)
    }

    pub fn maintenance_histories(&self) -> MaintenanceHistoryApi<'_> {
        MaintenanceHistoryApi::new(&self.client)
    }
}
