use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Listen address. Fixed at compile time, nothing is read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn new(addr: SocketAddr) -> Self {
        Config { addr }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}
