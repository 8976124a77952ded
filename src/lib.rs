//! # Webroot Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo que sirve archivos estáticos y listados de
//! directorio desde un webroot. Atiende una conexión a la vez, con I/O
//! bloqueante en un solo thread.
//!
//! ## Arquitectura
//!
//! - `config`: Argumentos CLI y variables de entorno
//! - `http`: Request line, responses y códigos de estado
//! - `resolver`: Traducción de URIs a archivos/directorios del webroot
//! - `server`: Socket de escucha, accept loop, lectura y apagado
//! - `logging`: Subscriber de `tracing` hacia el destino configurado
//! - `error`: Errores fatales del servidor
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use webroot_server::config::Config;
//! use webroot_server::server::Server;
//!
//! let config = Config::default();
//! let server = Server::bind(config).expect("Error al iniciar servidor");
//! server.run().expect("Error en el accept loop");
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod resolver;
pub mod server;
