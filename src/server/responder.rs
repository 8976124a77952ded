//! # Responder
//! src/server/responder.rs
//!
//! Convierte los bytes de un request en la respuesta a enviar:
//!
//! ```text
//! bytes → RequestLine → Webroot::resolve → Response
//!            │                 │
//!            ├─ 405 / 400      ├─ 404 (no existe o fuera del webroot)
//!                              └─ 500 (cualquier otra falla)
//! ```
//!
//! No toca el socket, así que se puede probar sin red.

use crate::http::{RequestError, RequestLine, Response, StatusCode};
use crate::resolver::{ResolveError, Webroot};
use tracing::{debug, error, info, warn};

/// Genera la respuesta para un request crudo
pub fn respond(raw: &[u8], webroot: &Webroot) -> Response {
    let request_line = match RequestLine::from_bytes(raw) {
        Ok(line) => line,
        Err(RequestError::UnsupportedMethod(method)) => {
            info!(%method, "Método no soportado");
            return Response::new(StatusCode::MethodNotAllowed);
        }
        Err(
            e @ (RequestError::EmptyRequest
            | RequestError::InvalidEncoding
            | RequestError::MalformedRequestLine(_)),
        ) => {
            warn!(error = %e, "Request inválido");
            return Response::new(StatusCode::BadRequest);
        }
    };

    info!(
        method = request_line.method(),
        uri = request_line.uri(),
        version = request_line.version(),
        "Request recibido"
    );

    match webroot.resolve(request_line.uri()) {
        Ok(resource) => {
            debug!(
                path = %resource.path().display(),
                mime = resource.mime(),
                bytes = resource.body().len(),
                "Recurso resuelto"
            );
            let mime = resource.mime().to_string();
            Response::ok(&mime, resource.into_body())
        }
        Err(ResolveError::NotFound(path)) => {
            debug!(path = %path.display(), "No encontrado");
            Response::new(StatusCode::NotFound)
        }
        Err(ResolveError::OutsideRoot(path)) => {
            warn!(path = %path.display(), "Intento de salir del webroot");
            Response::new(StatusCode::NotFound)
        }
        Err(
            e @ (ResolveError::Io { .. }
            | ResolveError::RootUnavailable { .. }
            | ResolveError::RootNotDirectory(_)),
        ) => {
            error!(error = %e, "Error inesperado al resolver");
            Response::new(StatusCode::InternalServerError)
        }
    }
}
