use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::Command;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use assert_cmd::prelude::*;
use tempfile::TempDir;

/// Answers exactly one HTTP request with a canned response, then hangs up.
pub struct OneShotServer {
    /// Looks like a main API URL: the "api" segment becomes "app-usage".
    pub api_endpoint: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn start(status_line: &str, extra_headers: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n{extra_headers}\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");

            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];

            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut chunk).expect("read request");
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }

            stream.write_all(response.as_bytes()).expect("write response");

            String::from_utf8_lossy(&request).into_owned()
        });

        OneShotServer {
            api_endpoint: format!("http://{addr}/api"),
            handle,
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::start("200 OK", "", body)
    }

    /// The raw request head the client sent.
    pub fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

/// Accepts one connection and never answers it. Returns an API endpoint for it.
pub fn silent_server(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(hold_for);
            drop(stream);
        }
    });

    format!("http://{addr}/api")
}

/// The binary with a scrubbed, empty cf home so no real session leaks in.
pub fn command(cf_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("accounting-report").expect("binary built");

    cmd.env("CF_HOME", cf_home.path())
        .env_remove("CF_API_ENDPOINT")
        .env_remove("CF_ACCESS_TOKEN")
        .env_remove("ACCOUNTING_REPORT_TIMEOUT_SECS")
        .env_remove("ACCOUNTING_REPORT_LOG");

    cmd
}

pub const APP_REPORT: &str = r#"{"report_time":"2023-01-01","yearly_reports":[{"year":2022,"average_app_instances":1.5,"maximum_app_instances":3,"app_instance_hours":1000}],"monthly_reports":[{"year":2023,"month":1,"average_app_instances":2,"maximum_app_instances":4,"app_instance_hours":50}]}"#;

pub const SERVICE_REPORT: &str = r#"{"report_time":"2023-03-01","monthly_service_reports":[{"service_name":"postgres","service_guid":"0d3c","usages":[{"year":2023,"month":1,"average_instances":1.0,"maximum_instances":2.0,"duration_in_hours":744.0}]}],"yearly_service_report":[{"service_name":"postgres","service_guid":"0d3c","year":2022,"average_instances":1.0,"maximum_instances":1.0,"duration_in_hours":8760.0}]}"#;
