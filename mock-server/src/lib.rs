use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Redirect},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub id: u64,
    pub name: String,
    pub capacity: u32,
    pub category_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub category_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub category_id: Option<u64>,
}

#[derive(Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct Page {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// `{success, message, data}` wrapper returned by every JSON endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn ok(message: &str, data: T) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        })
    }

    fn fail(message: &str) -> Json<Self> {
        Json(Self {
            success: false,
            message: message.to_string(),
            data: None,
        })
    }
}

#[derive(Default)]
pub struct Store {
    next_id: u64,
    rooms: BTreeMap<u64, Room>,
}

pub type Db = Arc<RwLock<Store>>;

type Reply<T> = (StatusCode, Json<Envelope<T>>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{id}", get(get_room).patch(update_room).delete(delete_room))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        .route("/echo", any(echo))
        .route("/status/{code}", any(status))
        .route("/broken-json", get(broken_json))
        .route("/redirect", get(|| async { Redirect::to("/echo") }))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_rooms(State(db): State<Db>, Query(page): Query<Page>) -> Json<Envelope<Vec<Room>>> {
    let store = db.read().await;
    let limit = page.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let skip = page.page.unwrap_or(1).saturating_sub(1) * limit;
    let rooms = store.rooms.values().skip(skip).take(limit).cloned().collect();
    Envelope::ok("rooms listed", rooms)
}

async fn create_room(State(db): State<Db>, Json(input): Json<CreateRoom>) -> Reply<Room> {
    let mut store = db.write().await;
    store.next_id += 1;
    let room = Room {
        id: store.next_id,
        name: input.name,
        capacity: input.capacity,
        category_id: input.category_id,
    };
    store.rooms.insert(room.id, room.clone());
    (StatusCode::CREATED, Envelope::ok("room created", room))
}

async fn get_room(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Room> {
    match db.read().await.rooms.get(&id) {
        Some(room) => (StatusCode::OK, Envelope::ok("room found", room.clone())),
        None => (StatusCode::NOT_FOUND, Envelope::fail("room not found")),
    }
}

async fn update_room(State(db): State<Db>, Path(id): Path<u64>, Json(input): Json<UpdateRoom>) -> Reply<Room> {
    let mut store = db.write().await;
    let Some(room) = store.rooms.get_mut(&id) else {
        return (StatusCode::NOT_FOUND, Envelope::fail("room not found"));
    };
    if let Some(name) = input.name {
        room.name = name;
    }
    if let Some(capacity) = input.capacity {
        room.capacity = capacity;
    }
    if input.category_id.is_some() {
        room.category_id = input.category_id;
    }
    (StatusCode::OK, Envelope::ok("room updated", room.clone()))
}

async fn delete_room(State(db): State<Db>, Path(id): Path<u64>) -> Reply<Room> {
    match db.write().await.rooms.remove(&id) {
        Some(room) => (StatusCode::OK, Envelope::ok("room deleted", room)),
        None => (StatusCode::NOT_FOUND, Envelope::fail("room not found")),
    }
}

async fn login(Json(input): Json<Login>) -> Reply<Value> {
    if input.email.is_empty() || input.password.is_empty() {
        return (StatusCode::UNAUTHORIZED, Envelope::fail("invalid credentials"));
    }
    let token = format!("token-{}", input.email);
    (StatusCode::OK, Envelope::ok("logged in", json!({ "access_token": token })))
}

async fn me(headers: HeaderMap) -> Reply<Value> {
    let email = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer token-"));
    match email {
        Some(email) => (StatusCode::OK, Envelope::ok("current user", json!({ "email": email }))),
        None => (StatusCode::UNAUTHORIZED, Envelope::fail("missing bearer token")),
    }
}

/// Reflect the request back as JSON so clients can inspect what they sent.
async fn echo(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Json<Value> {
    let mut header_map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in &headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        header_map
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": query,
        "headers": header_map,
        "body": body,
    }))
}

async fn status(Path(code): Path<u16>) -> Result<Reply<Value>, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Envelope::fail(&format!("status {code}"))))
}

async fn broken_json() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], "{not json")
}
