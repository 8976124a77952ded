//! # Logging
//!
//! Subscriber de `tracing` que escribe al destino configurado
//! (`LogOutput`). El filtro viene de `RUST_LOG` si existe.

use crate::config::LogOutput;
use crate::error::{Result, ServerError};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Construye el subscriber sin instalarlo
pub fn subscriber(
    writer: BoxMakeWriter,
    ansi: bool,
    verbose: bool,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    let default_filter = if verbose {
        "webroot_server=debug"
    } else {
        "webroot_server=info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .finish()
}

/// Abre el destino de log
///
/// Devuelve el writer y si corresponde usar colores ANSI.
pub fn make_writer(output: &LogOutput) -> io::Result<(BoxMakeWriter, bool)> {
    Ok(match output {
        LogOutput::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogOutput::Stdout => (BoxMakeWriter::new(io::stdout), true),
        LogOutput::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    })
}

/// Instala el subscriber global. Solo se puede llamar una vez por proceso.
pub fn init(output: &LogOutput, verbose: bool) -> Result<()> {
    let (writer, ansi) = make_writer(output)?;

    tracing::subscriber::set_global_default(subscriber(writer, ansi, verbose))
        .map_err(|e| ServerError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_output_receives_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");

        let (writer, ansi) = make_writer(&LogOutput::File(path.clone())).unwrap();
        assert!(!ansi);

        tracing::subscriber::with_default(subscriber(writer, ansi, false), || {
            tracing::info!(peer = "127.0.0.1:5555", "Nueva conexión");
            tracing::debug!("no debería aparecer");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Nueva conexión"));
        assert!(contents.contains("127.0.0.1:5555"));
        assert!(!contents.contains("no debería aparecer"));
    }

    #[test]
    fn test_file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");
        fs::write(&path, "previo\n").unwrap();

        let (writer, ansi) = make_writer(&LogOutput::File(path.clone())).unwrap();
        tracing::subscriber::with_default(subscriber(writer, ansi, true), || {
            tracing::debug!("línea nueva");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("previo\n"));
        assert!(contents.contains("línea nueva"));
    }

    #[test]
    fn test_unwritable_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("server.log");

        assert!(make_writer(&LogOutput::File(path)).is_err());
    }
}
