//! Test helpers: a scripted stand-in for the MythTV Frontend service.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// A request received by the mock frontend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// 0-based position among all requests received so far
    pub index: usize,
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    /// Header value by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Reply the mock frontend sends for one request
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    /// Keep the connection open without ever answering
    pub hang: bool,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            hang: false,
        }
    }

    /// Accept the request and never reply, so the client runs into its timeout
    pub fn no_reply() -> Self {
        Self {
            status: 0,
            body: String::new(),
            hang: true,
        }
    }
}

/// HTTP/1.1 server on a loopback port that answers every request through a closure
pub struct MockFrontend {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    stop: Arc<AtomicBool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl MockFrontend {
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> MockResponse + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_requests = requests.clone();
        let thread_stop = stop.clone();
        let handle = thread::spawn(move || {
            // Unanswered connections stay open until the mock stops
            let mut held = Vec::new();
            for stream in listener.incoming() {
                if thread_stop.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(stream) = stream else { continue };
                if let Some(stream) = Self::serve(stream, &thread_requests, &responder) {
                    held.push(stream);
                }
            }
        });

        Self {
            addr,
            requests,
            stop,
            handle: Mutex::new(Some(handle)),
        }
    }

    /// Answer one request. Returns the stream when the reply is withheld.
    fn serve<F>(
        stream: TcpStream,
        requests: &Mutex<Vec<RecordedRequest>>,
        responder: &F,
    ) -> Option<TcpStream>
    where
        F: Fn(&RecordedRequest) -> MockResponse,
    {
        let mut reader = BufReader::new(stream);

        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() || request_line.is_empty() {
            return None;
        }
        let mut parts = request_line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or_default().to_string();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).is_err() {
                return None;
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                headers.push((key.trim().to_string(), value.trim().to_string()));
            }
        }

        let content_length = headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(0);
        let mut body = vec![0u8; content_length];
        if reader.read_exact(&mut body).is_err() {
            return None;
        }

        let request = {
            let mut recorded = requests.lock().unwrap();
            let request = RecordedRequest {
                index: recorded.len(),
                method,
                path,
                headers,
                body: String::from_utf8_lossy(&body).into_owned(),
            };
            recorded.push(request.clone());
            request
        };

        let response = responder(&request);
        let mut stream = reader.into_inner();
        if response.hang {
            return Some(stream);
        }
        let reply = format!(
            "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            response.body.len(),
            response.body
        );
        let _ = stream.write_all(reply.as_bytes());
        let _ = stream.flush();
        None
    }

    pub fn host(&self) -> &'static str {
        "127.0.0.1"
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Stop accepting connections; later requests fail with connection refused
    pub fn shutdown(&self) {
        self.stop.store(true, Ordering::SeqCst);
        let _ = TcpStream::connect(self.addr);
        if let Some(handle) = self.handle.lock().unwrap().take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MockFrontend {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// A `Frontend/GetActionList` body listing `actions` in order
pub fn action_list_body(actions: &[(&str, &str)]) -> String {
    let entries: Vec<String> = actions
        .iter()
        .map(|(name, description)| {
            format!(
                "{}:{}",
                serde_json::to_string(name).unwrap(),
                serde_json::to_string(description).unwrap()
            )
        })
        .collect();
    format!(
        r#"{{"FrontendActionList":{{"ActionList":{{{}}}}}}}"#,
        entries.join(",")
    )
}

/// A loopback port with nothing listening on it
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_list_body() {
        let body = action_list_body(&[("UP", "Up \"arrow\""), ("0", "zero")]);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["FrontendActionList"]["ActionList"]["UP"], "Up \"arrow\"");
        assert_eq!(value["FrontendActionList"]["ActionList"]["0"], "zero");
    }

    #[test]
    fn test_mock_records_requests() {
        let mock = MockFrontend::start(|_| MockResponse::json(200, "{}"));
        let mut stream = TcpStream::connect(("127.0.0.1", mock.port())).unwrap();
        let request =
            b"POST /Frontend/SendKey HTTP/1.1\r\nContent-Length: 12\r\n\r\n{\"key\":\"Up\"}";
        stream.write_all(request).unwrap();
        let mut reply = String::new();
        stream.read_to_string(&mut reply).unwrap();

        assert!(reply.starts_with("HTTP/1.1 200"));
        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/Frontend/SendKey");
        assert_eq!(requests[0].body, "{\"key\":\"Up\"}");
    }
}
