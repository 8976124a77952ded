//! # Configuración del Servidor
//! src/config.rs
//!
//! Configuración del servidor con soporte para argumentos CLI y variables de
//! entorno. Nada se reconfigura en runtime.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./webroot_server --port 10000 --webroot ./webroot --log-output server.log
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=10000 WEBROOT=/srv/www ./webroot_server
//! ```

use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Destino de las líneas de log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    /// Error estándar (por defecto)
    Stderr,
    /// Salida estándar
    Stdout,
    /// Archivo (se abre en modo append)
    File(PathBuf),
}

impl FromStr for LogOutput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("Log output must not be empty".to_string()),
            "stderr" | "-" => Ok(LogOutput::Stderr),
            "stdout" => Ok(LogOutput::Stdout),
            path => Ok(LogOutput::File(PathBuf::from(path))),
        }
    }
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOutput::Stderr => write!(f, "stderr"),
            LogOutput::Stdout => write!(f, "stdout"),
            LogOutput::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Configuración del servidor HTTP/1.1
#[derive(Debug, Clone, Parser)]
#[command(name = "webroot_server")]
#[command(about = "Servidor HTTP/1.1 de archivos estáticos, una conexión a la vez")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "10000", env = "HTTP_PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1", env = "HTTP_HOST")]
    pub host: String,

    /// Directorio raíz desde el que se sirven archivos
    #[arg(long, default_value = "./webroot", env = "WEBROOT")]
    pub webroot: PathBuf,

    // === Lectura del request ===

    /// Tamaño de cada lectura del socket. Un chunk más corto termina el request
    #[arg(long = "chunk-size", default_value = "1024", env = "CHUNK_SIZE")]
    pub chunk_size: usize,

    /// Máximo de bytes aceptados por request (más que esto es 400)
    #[arg(long = "max-request-bytes", default_value = "8192", env = "MAX_REQUEST_BYTES")]
    pub max_request_bytes: usize,

    /// Timeout de lectura por conexión en milisegundos (0 = sin timeout)
    #[arg(long = "read-timeout-ms", default_value = "5000", env = "READ_TIMEOUT_MS")]
    pub read_timeout_ms: u64,

    // === Socket ===

    /// Backlog del socket de escucha
    #[arg(long, default_value = "1", env = "LISTEN_BACKLOG")]
    pub backlog: i32,

    // === Logging ===

    /// Destino del log: stderr, stdout o un path de archivo
    #[arg(long = "log-output", default_value = "stderr", env = "LOG_OUTPUT")]
    pub log_output: LogOutput,

    /// Log a nivel debug
    #[arg(short, long, env = "VERBOSE")]
    pub verbose: bool,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use webroot_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:10000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }

        if self.chunk_size == 0 {
            return Err("Chunk size must be >= 1".to_string());
        }

        if self.max_request_bytes < self.chunk_size {
            return Err("Max request bytes must be >= chunk size".to_string());
        }

        if self.backlog < 1 {
            return Err("Listen backlog must be >= 1".to_string());
        }

        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║            Webroot HTTP/1.1 Server Configuration            ║");
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
        println!("🌐 Network:");
        println!("   Address:      {}", self.address());
        println!("   Backlog:      {}", self.backlog);
        println!();
        println!("📁 Files:");
        println!("   Webroot:      {}", self.webroot.display());
        println!();
        println!("📥 Requests:");
        println!("   Chunk size:   {} bytes", self.chunk_size);
        println!("   Max size:     {} bytes", self.max_request_bytes);

        if self.read_timeout_ms > 0 {
            println!("   Read timeout: {} ms", self.read_timeout_ms);
        } else {
            println!("   Read timeout: disabled");
        }

        println!();
        println!("📝 Logging:");
        println!("   Output:       {}", self.log_output);
        println!("   Verbose:      {}", self.verbose);
        println!();
        println!("═══════════════════════════════════════════════════════════════");
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto (igual a los defaults del CLI)
    fn default() -> Self {
        Self {
            port: 10000,
            host: "127.0.0.1".to_string(),
            webroot: PathBuf::from("./webroot"),
            chunk_size: 1024,
            max_request_bytes: 8192,
            read_timeout_ms: 5_000,
            backlog: 1,
            log_output: LogOutput::Stderr,
            verbose: false,
        }
    }
}
