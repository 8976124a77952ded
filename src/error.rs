//! # Errores del Servidor
//!
//! Errores fatales: impiden arrancar o mantener el servidor. Los errores de
//! cada request (`RequestError`, `ResolveError`) se convierten en respuestas
//! HTTP y nunca llegan hasta acá.

use crate::resolver::ResolveError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Webroot(#[from] ResolveError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("Failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
