use std::fmt;
use std::io;
use std::net::SocketAddr;

#[derive(Debug)]
pub enum ServerError {
    /// Listener could not be bound, e.g. the port is already in use.
    Bind { addr: SocketAddr, source: io::Error },
    /// Accept loop stopped with an I/O error.
    Serve(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Bind { addr, source } => write!(f, "failed to bind {addr}: {source}"),
            ServerError::Serve(source) => write!(f, "server stopped: {source}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Serve(source) => Some(source),
        }
    }
}

impl From<io::Error> for ServerError {
    fn from(err: io::Error) -> Self {
        ServerError::Serve(err)
    }
}
