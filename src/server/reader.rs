//! # Lectura del Request
//! src/server/reader.rs
//!
//! El request se lee en chunks de tamaño fijo. La lectura termina cuando:
//!
//! 1. Llega un chunk más corto que el tamaño de chunk (incluye EOF)
//! 2. Lo acumulado ya contiene la línea vacía `\r\n\r\n` que cierra los headers
//! 3. Se alcanza el máximo de bytes permitido sin que el request esté completo
//!
//! La regla 1 es una heurística, no framing HTTP real. La regla 2 evita que
//! un request de tamaño múltiplo exacto del chunk deje al servidor bloqueado.

use std::io::{self, Read};

/// Delimitador entre headers y body
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Resultado de leer un request del socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRequest {
    /// El cliente cerró sin mandar nada
    Closed,

    /// Se superó el máximo de bytes
    TooLarge,

    /// Bytes acumulados del request (sin decodificar)
    Bytes(Vec<u8>),
}

/// Lee un request completo desde `reader`
///
/// # Ejemplo
///
/// ```
/// use std::io::Cursor;
/// use webroot_server::server::reader::{read_request, RawRequest};
///
/// let mut input = Cursor::new(b"GET / HTTP/1.1\r\n\r\n".to_vec());
/// let raw = read_request(&mut input, 1024, 8192).unwrap();
/// assert_eq!(raw, RawRequest::Bytes(b"GET / HTTP/1.1\r\n\r\n".to_vec()));
/// ```
pub fn read_request<R: Read>(
    reader: &mut R,
    chunk_size: usize,
    max_bytes: usize,
) -> io::Result<RawRequest> {
    let mut request = Vec::new();
    let mut chunk = vec![0u8; chunk_size];

    loop {
        let n = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        request.extend_from_slice(&chunk[..n]);

        if request.len() > max_bytes {
            return Ok(RawRequest::TooLarge);
        }

        if n < chunk_size || contains_terminator(&request) {
            break;
        }

        // Incompleto y sin espacio para otra lectura
        if request.len() >= max_bytes {
            return Ok(RawRequest::TooLarge);
        }
    }

    if request.is_empty() {
        Ok(RawRequest::Closed)
    } else {
        Ok(RawRequest::Bytes(request))
    }
}

fn contains_terminator(buffer: &[u8]) -> bool {
    buffer
        .windows(HEADER_TERMINATOR.len())
        .any(|window| window == HEADER_TERMINATOR)
}
