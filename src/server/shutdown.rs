//! # Apagado del Servidor
//! src/server/shutdown.rs
//!
//! El accept loop es bloqueante, así que un flag solo no alcanza: después de
//! marcarlo, `trigger` abre una conexión descartable contra el propio
//! listener para que `accept()` retorne y el loop vea el flag.
//!
//! El apagado nunca interrumpe una conexión en curso. Si llega mientras se
//! atiende un cliente, el loop termina al cerrar esa conexión.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Tiempo máximo para la conexión que despierta a `accept()`
const WAKE_TIMEOUT: Duration = Duration::from_millis(500);

/// Handle clonable para pedir el apagado del servidor
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    requested: Arc<AtomicBool>,
    wake_addr: SocketAddr,
}

impl ShutdownHandle {
    /// `listen_addr` es la dirección local del listener
    pub(crate) fn new(listen_addr: SocketAddr) -> Self {
        Self {
            requested: Arc::new(AtomicBool::new(false)),
            wake_addr: wake_address(listen_addr),
        }
    }

    /// Pide el apagado y despierta al accept loop
    ///
    /// Llamadas repetidas no hacen nada.
    pub fn trigger(&self) {
        if self.requested.swap(true, Ordering::SeqCst) {
            return;
        }

        info!("Apagado solicitado");

        // Si falla, el loop igual verá el flag en la próxima conexión
        if let Err(e) = TcpStream::connect_timeout(&self.wake_addr, WAKE_TIMEOUT) {
            debug!(error = %e, "No se pudo despertar al listener");
        }
    }

    /// Indica si ya se pidió el apagado
    pub fn is_triggered(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Conecta Ctrl+C (SIGINT) con `trigger`
    ///
    /// `ctrlc` solo permite un handler por proceso.
    pub fn install_ctrlc(&self) -> Result<(), ctrlc::Error> {
        let handle = self.clone();
        ctrlc::set_handler(move || {
            info!("Señal de interrupción recibida");
            handle.trigger();
        })
    }
}

/// Un listener en 0.0.0.0 / :: se despierta por loopback
fn wake_address(listen_addr: SocketAddr) -> SocketAddr {
    let ip = match listen_addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    SocketAddr::new(ip, listen_addr.port())
}
