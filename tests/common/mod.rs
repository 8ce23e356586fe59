//! Common test utilities for honu-saas-cli integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted names of the entries of a project directory
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.path.join(path))
            .expect("Failed to read directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// True when nothing has been written to the project
    pub fn is_empty(&self) -> bool {
        self.list_dir("").is_empty()
    }
}

/// Command for the real binary, isolated from the developer's environment
#[allow(deprecated)]
pub fn honu_cmd() -> Command {
    let mut cmd = Command::cargo_bin("honu-saas-cli").expect("Failed to find honu-saas-cli binary");
    cmd.env_remove("HONU_WORKSPACE");
    cmd.env_remove("HONU_RAW_BASE_URL");
    cmd.env_remove("HONU_API_BASE_URL");
    cmd.env_remove("GITHUB_TOKEN");
    cmd
}

/// Command whose remote repository is the given mock server
pub fn honu_cmd_for(server: &MockThemeServer) -> Command {
    let mut cmd = honu_cmd();
    cmd.env("HONU_RAW_BASE_URL", server.raw_base());
    cmd.env("HONU_API_BASE_URL", server.api_base());
    cmd
}

/// Canned theme repository content
///
/// Raw files are served below `/raw/<theme>/...`, listings below
/// `/api/<theme>/<component-type>` in the GitHub contents API format.
#[derive(Default, Clone)]
pub struct MockThemes {
    files: HashMap<String, String>,
    failures: HashMap<String, u16>,
    listings: HashMap<String, Vec<String>>,
}

impl MockThemes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve a raw file, e.g. `minimal/hero-section/index.tsx`
    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Answer a raw file request with an error status
    pub fn failing(mut self, path: &str, status: u16) -> Self {
        self.failures.insert(path.to_string(), status);
        self
    }

    /// Serve a listing for `<theme>/<component-type>` naming files below it
    pub fn listing(mut self, dir: &str, names: &[&str]) -> Self {
        self.listings.insert(
            dir.to_string(),
            names.iter().map(|n| (*n).to_string()).collect(),
        );
        self
    }

    pub fn start(self) -> MockThemeServer {
        MockThemeServer::start(self)
    }
}

/// Local HTTP server standing in for GitHub
pub struct MockThemeServer {
    server: Arc<tiny_http::Server>,
    base: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl MockThemeServer {
    fn start(themes: MockThemes) -> Self {
        let server =
            Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("Failed to bind mock server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Mock server should listen on an IP address");
        let base = format!("http://{addr}");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            let base = base.clone();
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    let url = request.url().to_string();
                    requests.lock().expect("poisoned").push(url.clone());
                    let (status, body) = respond(&themes, &base, &url);
                    let response = tiny_http::Response::from_string(body).with_status_code(status);
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            base,
            requests,
            handle: Some(handle),
        }
    }

    pub fn raw_base(&self) -> String {
        format!("{}/raw", self.base)
    }

    pub fn api_base(&self) -> String {
        format!("{}/api", self.base)
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("poisoned").clone()
    }
}

impl Drop for MockThemeServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn respond(themes: &MockThemes, base: &str, url: &str) -> (u16, String) {
    if let Some(path) = url.strip_prefix("/raw/") {
        if let Some(status) = themes.failures.get(path) {
            return (*status, "Server Error".to_string());
        }
        if let Some(content) = themes.files.get(path) {
            return (200, content.clone());
        }
    } else if let Some(dir) = url.strip_prefix("/api/") {
        if let Some(names) = themes.listings.get(dir) {
            let entries: Vec<serde_json::Value> = names
                .iter()
                .map(|name| {
                    serde_json::json!({
                        "name": name,
                        "path": format!("components/{dir}/{name}"),
                        "type": "file",
                        "download_url": format!("{base}/raw/{dir}/{name}"),
                    })
                })
                .collect();
            return (200, serde_json::Value::Array(entries).to_string());
        }
        return (404, r#"{"message": "Not Found"}"#.to_string());
    }
    (404, "404: Not Found".to_string())
}
