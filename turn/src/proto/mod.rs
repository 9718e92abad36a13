pub mod addr;
pub mod chandata;
pub mod channum;
pub mod data;
pub mod dontfrag;
pub mod evenport;
pub mod lifetime;
pub mod peeraddr;
pub mod relayaddr;
pub mod reqaddrfamily;
pub mod reqtrans;
pub mod reservation;

use std::fmt;

pub use addr::{Addr, FiveTuple};

/// The default time-to-expiry for an allocation, used when a client's
/// ALLOCATE or REFRESH request omits the LIFETIME attribute.
///
/// RFC 5766 Section 2.2
pub const DEFAULT_LIFETIME: std::time::Duration = std::time::Duration::from_secs(600);

/// The smallest value the CHANNEL-NUMBER attribute may carry.
///
/// RFC 5766 Section 11
pub const MIN_CHANNEL_NUMBER: u16 = 0x4000;

/// The largest value the CHANNEL-NUMBER attribute may carry.
///
/// RFC 5766 Section 11
pub const MAX_CHANNEL_NUMBER: u16 = 0x7FFF;

/// Protocol is IANA assigned protocol number used in REQUESTED-TRANSPORT.
///
/// RFC 5766 Section 14.7
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Protocol(pub u8);

/// PROTO_UDP is IANA assigned protocol number for UDP.
pub const PROTO_UDP: Protocol = Protocol(17);

/// PROTO_TCP is IANA assigned protocol number for TCP.
pub const PROTO_TCP: Protocol = Protocol(6);

impl Default for Protocol {
    fn default() -> Self {
        PROTO_UDP
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            PROTO_UDP => "UDP",
            PROTO_TCP => "TCP",
            _ => "unknown",
        };
        write!(f, "{s}")
    }
}
