use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

pub const PAGE: &str = "<html><body><div>x</div></body></html>";

/// Isolated working directory holding a checks file and an HTML file.
pub struct TestEnv {
    tmp: TempDir,
    pub checks: PathBuf,
    pub html: PathBuf,
}

impl TestEnv {
    pub fn new(checks: &str, html: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let checks_path = tmp.path().join("checks.json");
        let html_path = tmp.path().join("index.html");
        fs::write(&checks_path, checks).expect("write checks");
        fs::write(&html_path, html).expect("write html");
        Self {
            tmp,
            checks: checks_path,
            html: html_path,
        }
    }

    /// Command running inside the fixture directory, so the default file names resolve.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("domcheck");
        cmd.current_dir(self.tmp.path());
        cmd
    }
}

/// Serve one HTTP 200 response with `body` on a local port and return its URL.
pub fn serve_once(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = [0u8; 4096];
        let mut read = 0;
        while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf[read..]) {
                Ok(0) | Err(_) => break,
                Ok(n) => read += n,
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let _ = stream.write_all(response.as_bytes());
    });
    format!("http://{}/", addr)
}

/// A local URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}/", addr)
}
