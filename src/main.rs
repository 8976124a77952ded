//! # Webroot Server - Entry Point
//! src/main.rs
//!
//! Lee la configuración, instala el logging y el handler de Ctrl+C, y corre
//! el accept loop hasta que llegue la interrupción.

use webroot_server::config::Config;
use webroot_server::error::Result;
use webroot_server::logging;
use webroot_server::server::Server;

fn main() {
    let config = Config::new();

    if config.verbose {
        config.print_summary();
    }

    if let Err(e) = logging::init(&config.log_output, config.verbose) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config) {
        tracing::error!(error = %e, "Error fatal");
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let server = Server::bind(config)?;
    server.shutdown_handle().install_ctrlc()?;

    // Bloquea hasta Ctrl+C; al retornar el socket ya está cerrado
    server.run()
}
