//! # Parsing de la Request Line
//! src/http/request.rs
//!
//! Del request solo se interpreta la primera línea. Los headers se leen del
//! socket pero se ignoran.
//!
//! ```text
//! GET /sample.txt HTTP/1.1\r\n
//! Host: localhost:10000\r\n
//! \r\n
//! ```
//!
//! La URI se devuelve tal cual llega: sin percent-decoding y sin separar la
//! query string. El resolver la concatena al webroot.

use thiserror::Error;

/// Único método soportado por el servidor
pub const GET: &str = "GET";

/// Request line parseada: `METHOD URI VERSION`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Método HTTP (siempre "GET" después de un parse exitoso)
    method: String,

    /// URI sin modificar (ej: "/sample.txt")
    uri: String,

    /// Versión del protocolo (ej: "HTTP/1.1"). No se usa después del parsing
    version: String,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No llegó ningún byte útil
    #[error("Empty request")]
    EmptyRequest,

    /// Los bytes recibidos no son UTF-8 válido
    #[error("Request is not valid UTF-8")]
    InvalidEncoding,

    /// La primera línea no tiene METHOD URI VERSION
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// Cualquier método distinto de GET
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

impl RequestLine {
    /// Parsea la request line desde los bytes crudos leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use webroot_server::http::RequestLine;
    ///
    /// let line = RequestLine::from_bytes(b"GET /index.html HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(line.uri(), "/index.html");
    /// ```
    pub fn from_bytes(buffer: &[u8]) -> Result<Self, RequestError> {
        let text = std::str::from_utf8(buffer).map_err(|_| RequestError::InvalidEncoding)?;
        Self::parse(text)
    }

    /// Parsea la request line desde el texto completo del request
    ///
    /// Se corta en el primer `\r\n` y la línea se separa por whitespace.
    /// Tokens extra después de la versión se ignoran.
    pub fn parse(request: &str) -> Result<Self, RequestError> {
        if request.trim().is_empty() {
            return Err(RequestError::EmptyRequest);
        }

        let first_line = request.split("\r\n").next().unwrap_or_default();
        let mut parts = first_line.split_whitespace();

        let (method, uri, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(uri), Some(version)) => (method, uri, version),
            _ => return Err(RequestError::MalformedRequestLine(first_line.to_string())),
        };

        if method != GET {
            return Err(RequestError::UnsupportedMethod(method.to_string()));
        }

        Ok(Self {
            method: method.to_string(),
            uri: uri.to_string(),
            version: version.to_string(),
        })
    }

    /// Obtiene el método HTTP
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Obtiene la URI tal como vino en el request
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Obtiene la versión HTTP
    pub fn version(&self) -> &str {
        &self.version
    }
}
