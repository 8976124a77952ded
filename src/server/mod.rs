//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en un puerto (backlog configurable, 1 por defecto)
//! 2. Acepta conexiones de a una
//! 3. Lee el request en chunks (`reader`)
//! 4. Genera la respuesta (`responder`) y la envía
//! 5. Cierra la conexión
//!
//! `shutdown` permite cortar el loop entre conexiones (Ctrl+C o tests).

pub mod listener;
pub mod reader;
pub mod responder;
pub mod shutdown;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use shutdown::ShutdownHandle;
pub use tcp::Server;
