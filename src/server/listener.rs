//! Socket de escucha creado con `socket2` para poder fijar el backlog
//! (std usa siempre 128).

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{SocketAddr, TcpListener};

/// Crea un `TcpListener` bloqueante con `SO_REUSEADDR` y el backlog indicado.
///
/// Con backlog 1, un segundo cliente queda esperando en la cola del kernel
/// hasta que se cierre la conexión actual.
pub fn bind_listener(addr: SocketAddr, backlog: i32) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    // Permite reiniciar el servidor con el puerto en TIME_WAIT
    socket.set_reuse_address(true)?;

    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    Ok(socket.into())
}
