//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port on a background thread, then
//! drives the real `ureq`-backed client against it. Covers the behaviours
//! that only show up on the wire: header merging as the server sees it,
//! redirects, error statuses, and transport failures.

use std::io::{BufRead, BufReader, Write};
use std::net::SocketAddr;
use std::sync::Arc;

use dorm_core::{Api, Client, ClientConfig, ClientError, CreateRoom, Envelope, LoginData, Room, UpdateRoom};
use serde_json::{json, Value};

/// Bind the mock server to a random local port and return its address.
fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> Client {
    Client::from_config(&ClientConfig {
        base_url: format!("http://{addr}/"),
        timeout: 10,
    })
}

#[test]
fn room_lifecycle() {
    let addr = start_server();
    let api = Api::new(Arc::new(client_for(addr)));

    // Step 1: list — should be empty.
    let listed: Envelope<Vec<Room>> = api.rooms().list(1).unwrap().json().unwrap();
    assert!(listed.data.unwrap().is_empty(), "expected empty list");

    // Step 2: create a room.
    let input = CreateRoom {
        name: "A101".to_string(),
        capacity: 4,
        category_id: None,
    };
    let response = api.rooms().create(&input).unwrap();
    assert_eq!(response.status_code(), 201);
    let created = response.json::<Envelope<Room>>().unwrap().data.unwrap();
    assert_eq!(created.name, "A101");
    let id = created.id;

    // Step 3: get it back.
    let response = api.rooms().details(id).unwrap();
    assert!(response.is_success());
    assert_eq!(response.json::<Envelope<Room>>().unwrap().data.unwrap(), created);

    // Step 4: partial update.
    let update = UpdateRoom {
        capacity: Some(6),
        ..Default::default()
    };
    let updated = api.rooms().update(id, &update).unwrap().json::<Envelope<Room>>().unwrap().data.unwrap();
    assert_eq!(updated.name, "A101");
    assert_eq!(updated.capacity, 6);

    // Step 5: delete.
    assert!(!api.rooms().delete(id).unwrap().is_error());

    // Step 6: get after delete — an error status, not an error result.
    let response = api.rooms().details(id).unwrap();
    assert_eq!(response.status_code(), 404);
    assert!(response.is_error());
    assert_eq!(response.parsed_body().unwrap()["success"], false);
}

#[test]
fn login_then_authenticated_request() {
    let addr = start_server();
    let api = Api::new(Arc::new(client_for(addr)));

    let before = api.auth().me().unwrap();
    assert_eq!(before.status_code(), 401);

    let login: Envelope<LoginData> = api.auth().login("manager@hpc.edu.vn", "secret").unwrap().json().unwrap();
    api.auth().set_token(&login.data.unwrap().access_token);

    let after = api.auth().me().unwrap();
    assert_eq!(after.status_code(), 200);
    assert_eq!(after.parsed_body().unwrap()["data"]["email"], "manager@hpc.edu.vn");
}

#[test]
fn server_sees_request_header_over_client_default() {
    let addr = start_server();
    let client = client_for(addr);
    client.set_header("X-Env", "prod").set_header("X-Client", "dorm");

    let echoed = client.r().set_header("X-Env", "staging").get("/echo").unwrap();
    let headers = &echoed.parsed_body().unwrap()["headers"];
    assert_eq!(headers["x-env"], "staging");
    assert_eq!(headers["x-client"], "dorm");
}

#[test]
fn query_and_path_params_reach_the_server() {
    let addr = start_server();
    let client = client_for(addr);

    let echoed = client
        .r()
        .set_path_param("target", "echo")
        .set_query_param("page", "2")
        .set_query_param("keyword", "alice nguyen")
        .get("/{target}")
        .unwrap();
    let body = echoed.parsed_body().unwrap();
    assert_eq!(body["path"], "/echo");
    assert_eq!(body["query"], json!([["keyword", "alice nguyen"], ["page", "2"]]));
}

#[test]
fn json_body_round_trips_through_server() {
    let addr = start_server();
    let client = client_for(addr);
    let sent = json!({"email": "a@hpc.edu.vn", "full_name": "Nguyễn Văn A"});

    let echoed = client.r().set_body(&sent).post("/echo").unwrap();
    let body = echoed.parsed_body().unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["headers"]["content-type"], "application/json");
    assert_eq!(body["body"], sent);
}

#[test]
fn error_statuses_are_responses() {
    let addr = start_server();
    let client = client_for(addr);

    for code in [400u16, 404, 500, 503] {
        let response = client.r().set_path_param("code", code.to_string()).get("/status/{code}").unwrap();
        assert_eq!(response.status_code(), code);
        assert!(response.is_error(), "{code} should classify as error");
    }
}

#[test]
fn redirects_are_followed() {
    let addr = start_server();
    let response = client_for(addr).r().get("/redirect").unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.parsed_body().unwrap()["path"], "/echo");
}

#[test]
fn malformed_json_degrades_to_text() {
    let addr = start_server();
    let response = client_for(addr).r().get("/broken-json").unwrap();
    assert!(!response.is_error());
    assert_eq!(response.parsed_body(), Some(&Value::String("{not json".to_string())));
    assert_eq!(response.text(), "{not json");
}

#[test]
fn response_mirrors_transport_metadata() {
    let addr = start_server();
    let response = client_for(addr).r().get("/echo").unwrap();
    assert_eq!(response.status(), "200 OK");
    assert_eq!(response.proto(), "HTTP/1.1");
    assert_eq!(response.content_length(), Some(response.body().len() as u64));
    assert!(response.header("Content-Type").unwrap().contains("application/json"));
}

#[test]
fn connection_refused_is_request_failed() {
    // Grab a free port, then close it so nothing is listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let err = client_for(addr).r().get("/rooms").unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed(_)), "got {err:?}");
    assert!(err.to_string().starts_with("request failed"));
}

/// Serve one plain-text response of `len` bytes on a raw socket.
fn serve_large_body(len: usize) -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        write!(
            stream,
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {len}\r\nConnection: close\r\n\r\n"
        )
        .unwrap();
        stream.write_all(&vec![b'a'; len]).unwrap();
    });

    addr
}

#[test]
fn bodies_over_ten_mebibytes_are_read_in_full() {
    let len = 11 * 1024 * 1024;
    let addr = serve_large_body(len);
    let response = client_for(addr).r().get("/big").unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.body().len(), len);
    assert_eq!(response.content_length(), Some(len as u64));
}
