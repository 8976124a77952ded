//! # Construcción de Respuestas HTTP
//!
//! Todas las respuestas tienen la misma forma: status line, headers unidos
//! por `\r\n`, línea vacía y body.
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! \r\n
//! hello
//! ```
//!
//! No se envía `Content-Length`: el servidor cierra la conexión después de
//! cada respuesta y ese cierre delimita el body.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use webroot_server::http::{Response, StatusCode};
//!
//! let response = Response::ok("text/plain", b"hello".to_vec());
//! assert_eq!(response.to_bytes(), b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
//!
//! let response = Response::new(StatusCode::NotFound);
//! assert_eq!(response.to_bytes(), b"HTTP/1.1 404 Not Found\r\n\r\n");
//! ```

use super::StatusCode;

/// Versión que aparece en la status line
pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP (200, 404, etc.)
    status: StatusCode,

    /// Headers en orden de inserción, para que la salida sea determinista
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (vacío en los errores)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    ///
    /// Es la forma de todas las respuestas de error (400, 404, 405, 500).
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Crea un 200 OK con `Content-Type` y body
    pub fn ok(mime: &str, body: Vec<u8>) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", mime)
            .with_body(body)
    }

    /// Agrega un header a la respuesta
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Establece el cuerpo de la respuesta
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// El body se agrega tal cual, sin `\r\n` final.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        // 1. Status line
        result.extend_from_slice(format!("{} {}\r\n", HTTP_VERSION, self.status).as_bytes());

        // 2. Headers
        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        // 3. Línea vacía
        result.extend_from_slice(b"\r\n");

        // 4. Body
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene un header por nombre (sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
