mod ffi;

use std::net::SocketAddr;

pub use ffi::ifaces;

/// The kind of layer the address of an [`Interface`] belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Ipv4,
    Ipv6,
    Link,
    Packet,
    Unknow(i32),
}

/// Either the broadcast or the point-to-point destination address
/// associated with an [`Interface`], depending on its flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NextHop {
    Broadcast(SocketAddr),
    Destination(SocketAddr),
}

/// A single address bound to a system network interface, as reported by
/// `getifaddrs`. A physical interface with several addresses (e.g. both
/// an IPv4 and an IPv6 address) is reported as multiple [`Interface`]s
/// sharing the same `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub kind: Kind,
    pub addr: Option<SocketAddr>,
    pub mask: Option<SocketAddr>,
    pub hop: Option<NextHop>,
}
