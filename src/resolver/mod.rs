//! # Resolución de URIs contra el Webroot
//! src/resolver/mod.rs
//!
//! Traduce la URI de un request a un recurso del filesystem:
//!
//! ```text
//! "/docs/a.txt" → <webroot>/docs/a.txt → canonicalize → archivo | directorio | 404
//! ```
//!
//! La URI se concatena textualmente al webroot (sin normalizar), pero el path
//! canónico resultante debe quedar dentro del webroot canónico. Cualquier
//! escape con `..` o symlinks hacia afuera se trata como no encontrado.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Content-Type de los listados de directorio
pub const LISTING_MIME: &str = "text/plain";

/// Content-Type cuando la extensión no aparece en la tabla de MIME types
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Recurso resuelto, listo para convertirse en un 200 OK
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// Contenido completo de un archivo regular
    File {
        path: PathBuf,
        body: Vec<u8>,
        mime: String,
    },

    /// Paths de los archivos hijos directos, uno por línea
    Listing { path: PathBuf, body: Vec<u8> },
}

impl Resource {
    /// Content-Type que corresponde al recurso
    pub fn mime(&self) -> &str {
        match self {
            Resource::File { mime, .. } => mime,
            Resource::Listing { .. } => LISTING_MIME,
        }
    }

    /// Path canónico del recurso
    pub fn path(&self) -> &Path {
        match self {
            Resource::File { path, .. } | Resource::Listing { path, .. } => path,
        }
    }

    /// Bytes del body
    pub fn body(&self) -> &[u8] {
        match self {
            Resource::File { body, .. } | Resource::Listing { body, .. } => body,
        }
    }

    /// Consume el recurso y devuelve el body
    pub fn into_body(self) -> Vec<u8> {
        match self {
            Resource::File { body, .. } | Resource::Listing { body, .. } => body,
        }
    }
}

/// Errores de resolución
#[derive(Debug, Error)]
pub enum ResolveError {
    /// El webroot configurado no se puede abrir
    #[error("Webroot {path} is not accessible: {source}")]
    RootUnavailable { path: PathBuf, source: io::Error },

    /// El webroot configurado existe pero no es un directorio
    #[error("Webroot {0} is not a directory")]
    RootNotDirectory(PathBuf),

    /// No existe nada en ese path
    #[error("{0} does not exist")]
    NotFound(PathBuf),

    /// El path canónico queda fuera del webroot
    #[error("{0} is outside the webroot")]
    OutsideRoot(PathBuf),

    /// Cualquier otra falla de I/O (permisos, lectura, etc.)
    #[error("Failed to resolve {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Directorio raíz desde el que se sirven archivos
#[derive(Debug, Clone)]
pub struct Webroot {
    /// Path canónico (absoluto, sin symlinks)
    root: PathBuf,
}

impl Webroot {
    /// Abre el webroot y lo canonicaliza
    ///
    /// Falla si el path no existe o no es un directorio.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let root = path
            .canonicalize()
            .map_err(|source| ResolveError::RootUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        if !root.is_dir() {
            return Err(ResolveError::RootNotDirectory(root));
        }

        Ok(Self { root })
    }

    /// Path canónico del webroot
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resuelve una URI a un archivo o a un listado de directorio
    ///
    /// # Ejemplo
    ///
    /// ```no_run
    /// use webroot_server::resolver::Webroot;
    ///
    /// let webroot = Webroot::new("./webroot").unwrap();
    /// let resource = webroot.resolve("/sample.txt").unwrap();
    /// println!("{} bytes de {}", resource.body().len(), resource.mime());
    /// ```
    pub fn resolve(&self, uri: &str) -> Result<Resource, ResolveError> {
        let candidate = self.candidate(uri);

        let path = match candidate.canonicalize() {
            Ok(path) => path,
            Err(e) if is_missing(&e) => return Err(ResolveError::NotFound(candidate)),
            Err(source) => {
                return Err(ResolveError::Io {
                    path: candidate,
                    source,
                })
            }
        };

        if !path.starts_with(&self.root) {
            return Err(ResolveError::OutsideRoot(path));
        }

        let metadata = fs::metadata(&path).map_err(|source| ResolveError::Io {
            path: path.clone(),
            source,
        })?;

        if metadata.is_dir() {
            let body = list_files(&path)?;
            Ok(Resource::Listing { path, body })
        } else if metadata.is_file() {
            let body = fs::read(&path).map_err(|source| ResolveError::Io {
                path: path.clone(),
                source,
            })?;
            let mime = mime_for(&path);
            Ok(Resource::File { path, body, mime })
        } else {
            // FIFOs, sockets, dispositivos: no se sirven
            Err(ResolveError::NotFound(path))
        }
    }

    /// Concatena la URI al webroot sin ninguna normalización
    fn candidate(&self, uri: &str) -> PathBuf {
        let mut raw = self.root.as_os_str().to_os_string();
        raw.push(uri);
        PathBuf::from(raw)
    }
}

/// Errores de canonicalize que significan "no hay nada ahí"
fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::InvalidInput
    )
}

/// MIME type a partir de la extensión
fn mime_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

/// Lista los archivos regulares hijos directos de `dir`, ordenados
///
/// Los subdirectorios no aparecen. Los symlinks se siguen.
fn list_files(dir: &Path) -> Result<Vec<u8>, ResolveError> {
    let io_err = |source| ResolveError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    let listing = files
        .iter()
        .map(|path| path.to_string_lossy())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(listing.into_bytes())
}
