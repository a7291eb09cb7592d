use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// One request as seen by the fake backend.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Canned-route HTTP server on an ephemeral port. Unknown routes get 404.
pub struct FakeBackend {
    url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    /// Routes are keyed by `"METHOD /path"`; values are `(status line, JSON body)`.
    pub fn start(routes: &[(&str, &str, &str)]) -> Self {
        let routes: HashMap<String, (String, String)> = routes
            .iter()
            .map(|(route, status, body)| {
                (route.to_string(), (status.to_string(), body.to_string()))
            })
            .collect();
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake backend");
        let url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    continue;
                };
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                let key = format!("{} {}", request.method, request.path);
                let (status, body) = routes
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| ("404 Not Found".into(), r#"{"detail":"Not Found"}"#.into()));
                recorded.lock().unwrap().push(request);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });
        Self { url, requests }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let read = stream.read(&mut buf).ok()?;
        if read == 0 {
            return None;
        }
        data.extend_from_slice(&buf[..read]);
        let Some(end) = data.windows(4).position(|window| window == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&data[..end]).to_string();
        let body_len = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        if data.len() < end + 4 + body_len {
            continue;
        }
        let mut request_line = head.lines().next()?.split_whitespace();
        let method = request_line.next()?.to_string();
        let path = request_line.next()?.to_string();
        let body = String::from_utf8_lossy(&data[end + 4..end + 4 + body_len]).to_string();
        return Some(RecordedRequest { method, path, body });
    }
}

/// Base URL of a port that refuses connections.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

pub const META_BODY: &str = r#"{
    "expected_cols": ["Gender", "Age", "Contract", "Internet Service", "Monthly Charge"],
    "categorical_options": {"Gender": ["Female", "Male"], "Contract": ["Month-to-Month", "One Year", "Two Year"]},
    "defaults": {"Age": 46.0, "Monthly Charge": 64.76}
}"#;

pub const SAMPLE_BODY: &str = r#"{"features": {"Gender": "Male", "Age": 41, "Contract": "Two Year", "Internet Service": "No", "Monthly Charge": 20.5}}"#;
