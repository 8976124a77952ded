//! Tests de integración para el servidor HTTP
//! tests/integration_test.rs
//!
//! Cada test levanta un `Server` real en un puerto efímero, con un webroot
//! temporal, y lo apaga con `ShutdownHandle` al terminar.

use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use webroot_server::config::Config;
use webroot_server::error::Result;
use webroot_server::server::{Server, ShutdownHandle};

/// Servidor corriendo en otro thread
struct RunningServer {
    addr: SocketAddr,
    root: std::path::PathBuf,
    shutdown: ShutdownHandle,
    thread: Option<thread::JoinHandle<Result<()>>>,
    _dir: TempDir,
}

impl RunningServer {
    fn stop(mut self) {
        self.shutdown.trigger();
        if let Some(t) = self.thread.take() {
            t.join().expect("server thread panicked").expect("server failed");
        }
    }
}

/// Helper: crea el webroot de prueba
fn populate(root: &Path) {
    fs::write(root.join("sample.txt"), "hello").unwrap();
    fs::write(root.join("index.html"), "<h1>index</h1>").unwrap();
    fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G', 0x00, 0xFF]).unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs").join("b.txt"), "b").unwrap();
    fs::write(root.join("docs").join("a.txt"), "a").unwrap();
    fs::create_dir(root.join("docs").join("drafts")).unwrap();
}

fn start_server() -> RunningServer {
    let outer = tempfile::tempdir().unwrap();
    let root = outer.path().join("webroot");
    fs::create_dir(&root).unwrap();
    populate(&root);
    fs::write(outer.path().join("secret.txt"), "top secret").unwrap();

    let mut config = Config::default();
    config.port = 0;
    config.webroot = root;
    config.read_timeout_ms = 2_000;

    let server = Server::bind(config).expect("Failed to bind server");
    let addr = server.local_addr().unwrap();
    let shutdown = server.shutdown_handle();
    let root = server.webroot().root().to_path_buf();

    let thread = thread::spawn(move || server.run());

    RunningServer {
        addr,
        root,
        shutdown,
        thread: Some(thread),
        _dir: outer,
    }
}

/// Helper: envía bytes crudos y retorna la response completa
fn send_raw(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).expect("Failed to connect");
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();

    stream.write_all(raw).unwrap();
    stream.flush().unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

fn get(addr: SocketAddr, path: &str) -> Vec<u8> {
    send_raw(addr, format!("GET {} HTTP/1.1\r\n\r\n", path).as_bytes())
}

#[test]
fn test_sample_file_exact_bytes() {
    let server = start_server();

    let response = send_raw(server.addr, b"GET /sample.txt HTTP/1.1\r\n\r\n");
    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello"
    );

    server.stop();
}

#[test]
fn test_missing_file() {
    let server = start_server();

    let response = send_raw(server.addr, b"GET /missing.txt HTTP/1.1\r\n\r\n");
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");

    server.stop();
}

#[test]
fn test_post_not_allowed() {
    let server = start_server();

    let response = send_raw(server.addr, b"POST / HTTP/1.1\r\n\r\n");
    assert_eq!(response, b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");

    server.stop();
}

#[test]
fn test_malformed_request_line() {
    let server = start_server();

    let response = send_raw(server.addr, b"GET\r\n\r\n");
    assert_eq!(response, b"HTTP/1.1 400 Bad Request\r\n\r\n");

    server.stop();
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_internal_error() {
    use std::os::unix::fs::symlink;

    let server = start_server();
    symlink(server.root.join("loop-b"), server.root.join("loop-a")).unwrap();
    symlink(server.root.join("loop-a"), server.root.join("loop-b")).unwrap();

    let response = get(server.addr, "/loop-a");
    assert_eq!(response, b"HTTP/1.1 500 Internal Server Error\r\n\r\n");

    server.stop();
}

#[test]
fn test_binary_file() {
    let server = start_server();

    let response = get(server.addr, "/logo.png");
    let mut expected = b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\n\r\n".to_vec();
    expected.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x00, 0xFF]);
    assert_eq!(response, expected);

    server.stop();
}

#[test]
fn test_directory_listing() {
    let server = start_server();

    let response = get(server.addr, "/docs");
    let docs = server.root.join("docs");
    let expected = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\n{}\n{}",
        docs.join("a.txt").display(),
        docs.join("b.txt").display()
    );
    assert_eq!(String::from_utf8(response).unwrap(), expected);

    server.stop();
}

#[test]
fn test_escape_outside_webroot() {
    let server = start_server();

    let response = get(server.addr, "/../secret.txt");
    assert_eq!(response, b"HTTP/1.1 404 Not Found\r\n\r\n");

    server.stop();
}

#[test]
fn test_repeated_requests_are_identical() {
    let server = start_server();

    let first = get(server.addr, "/index.html");
    let second = get(server.addr, "/index.html");
    assert_eq!(first, second);
    assert!(first.starts_with(b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n"));

    server.stop();
}

#[test]
fn test_multiple_requests_sequentially() {
    let server = start_server();

    for path in ["/sample.txt", "/missing", "/docs", "/index.html", "/"] {
        let response = get(server.addr, path);
        assert!(response.starts_with(b"HTTP/1.1 "), "Request {} failed", path);
    }

    server.stop();
}

#[test]
fn test_request_with_headers() {
    let server = start_server();

    let raw = b"GET /sample.txt HTTP/1.1\r\nHost: 127.0.0.1\r\nUser-Agent: test\r\nAccept: */*\r\n\r\n";
    let response = send_raw(server.addr, raw);
    assert!(response.ends_with(b"\r\n\r\nhello"));

    server.stop();
}

#[test]
fn test_request_exactly_one_chunk() {
    let server = start_server();

    // Request de exactamente 1024 bytes: termina por la línea vacía, no por chunk corto
    let head = b"GET /sample.txt HTTP/1.1\r\nX-Pad: ";
    let tail = b"\r\n\r\n";
    let mut raw = head.to_vec();
    raw.extend(std::iter::repeat(b'x').take(1024 - head.len() - tail.len()));
    raw.extend_from_slice(tail);
    assert_eq!(raw.len(), 1024);

    let response = send_raw(server.addr, &raw);
    assert!(response.ends_with(b"hello"));

    server.stop();
}

#[test]
fn test_second_client_waits_for_first() {
    let server = start_server();

    // El primer cliente conecta pero todavía no envía nada
    let mut slow = TcpStream::connect(server.addr).unwrap();

    let addr = server.addr;
    let fast = thread::spawn(move || get(addr, "/sample.txt"));

    thread::sleep(Duration::from_millis(100));
    assert!(!fast.is_finished(), "second client was served before the first closed");

    slow.write_all(b"GET /missing HTTP/1.1\r\n\r\n").unwrap();
    let mut buf = Vec::new();
    slow.read_to_end(&mut buf).unwrap();
    assert_eq!(buf, b"HTTP/1.1 404 Not Found\r\n\r\n");

    let response = fast.join().unwrap();
    assert!(response.ends_with(b"hello"));

    server.stop();
}

#[test]
fn test_shutdown_closes_listener() {
    let server = start_server();
    let addr = server.addr;

    assert!(get(addr, "/sample.txt").ends_with(b"hello"));
    server.stop();

    assert!(TcpStream::connect(addr).is_err());
}
