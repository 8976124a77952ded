//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Accept loop secuencial: una conexión a la vez, todo bloqueante en el
//! mismo thread. El siguiente `accept()` ocurre recién cuando la conexión
//! actual se cerró.
//!
//! ```text
//! AWAIT_REQUEST → PARSE → RESOLVE → BUILD → SEND → CLOSE
//! ```

use super::listener::bind_listener;
use super::reader::{read_request, RawRequest};
use super::responder::respond;
use super::shutdown::ShutdownHandle;
use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::{Response, StatusCode};
use crate::resolver::Webroot;
use std::io::{self, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Servidor HTTP/1.1 de archivos estáticos
pub struct Server {
    config: Config,
    webroot: Webroot,
    listener: TcpListener,
    shutdown: ShutdownHandle,
}

impl Server {
    /// Valida la configuración, abre el webroot y hace bind del socket
    pub fn bind(config: Config) -> Result<Self> {
        config.validate().map_err(ServerError::Config)?;

        let webroot = Webroot::new(&config.webroot)?;
        let address = resolve_address(&config.address())?;

        info!("Iniciando servidor en {}", address);
        let listener = bind_listener(address, config.backlog)?;
        let shutdown = ShutdownHandle::new(listener.local_addr()?);

        Ok(Self {
            config,
            webroot,
            listener,
            shutdown,
        })
    }

    /// Dirección real del socket (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Webroot canonicalizado
    pub fn webroot(&self) -> &Webroot {
        &self.webroot
    }

    /// Handle para detener `run` desde otro thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        self.shutdown.clone()
    }

    /// Atiende conexiones hasta que se pida el apagado
    ///
    /// Consume el servidor: al retornar, el socket de escucha queda cerrado.
    pub fn run(self) -> Result<()> {
        info!(
            address = %self.listener.local_addr()?,
            webroot = %self.webroot.root().display(),
            "Servidor escuchando (una conexión a la vez)"
        );

        while !self.shutdown.is_triggered() {
            info!("Esperando conexión");

            let (stream, peer) = match self.listener.accept() {
                Ok(connection) => connection,
                Err(e) => {
                    error!(error = %e, "Error al aceptar conexión");
                    continue;
                }
            };

            // Conexión de wake-up de ShutdownHandle::trigger
            if self.shutdown.is_triggered() {
                break;
            }

            info!(%peer, "Nueva conexión");

            if let Err(e) = handle_connection(stream, &self.webroot, &self.config) {
                warn!(%peer, error = %e, "Conexión terminada con error");
            }
        }

        info!("Cerrando socket de escucha");
        Ok(())
    }
}

/// Atiende una conexión completa: lee, responde y cierra
///
/// La conexión se cierra siempre al salir (drop del stream), haya error o no.
pub fn handle_connection(mut stream: TcpStream, webroot: &Webroot, config: &Config) -> io::Result<()> {
    let start = Instant::now();

    let timeout = (config.read_timeout_ms > 0).then(|| Duration::from_millis(config.read_timeout_ms));
    stream.set_read_timeout(timeout)?;

    let raw = read_request(&mut stream, config.chunk_size, config.max_request_bytes)?;
    let response = match response_for(raw, webroot, config.max_request_bytes) {
        Some(response) => response,
        None => {
            debug!("Conexión cerrada sin datos");
            return Ok(());
        }
    };

    info!(status = %response.status(), "Enviando respuesta");
    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    debug!(elapsed_ms = start.elapsed().as_secs_f64() * 1000.0, "Conexión cerrada");
    Ok(())
}

/// Respuesta para lo leído del socket; `None` si el cliente no mandó nada
fn response_for(raw: RawRequest, webroot: &Webroot, limit: usize) -> Option<Response> {
    match raw {
        RawRequest::Closed => None,
        RawRequest::TooLarge => {
            warn!(limit, "Request demasiado grande");
            Some(Response::new(StatusCode::BadRequest))
        }
        RawRequest::Bytes(bytes) => {
            debug!(bytes = bytes.len(), "Request leído");
            Some(respond(&bytes, webroot))
        }
    }
}

/// Resuelve "host:port" (acepta nombres como "localhost")
fn resolve_address(address: &str) -> Result<SocketAddr> {
    address
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| ServerError::Config(format!("Address {} did not resolve", address)))
}
