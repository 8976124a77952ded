//! # Módulo HTTP
//!
//! Implementa la parte mínima de HTTP/1.1 que necesita el servidor, sin
//! librerías de alto nivel:
//!
//! - Parsing de la request line (solo GET)
//! - Construcción de responses de forma fija
//! - Códigos de estado
//!
//! ### Formato de Request
//!
//! ```text
//! GET /sample.txt HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! \r\n
//! hello
//! ```

pub mod request;   // Parsing de la request line
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{RequestError, RequestLine};
pub use response::Response;
pub use status::StatusCode;
