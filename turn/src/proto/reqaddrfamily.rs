#[cfg(test)]
mod reqaddrfamily_test;

use std::fmt;

use stun::attributes::ATTR_REQUESTED_ADDRESS_FAMILY;
use stun::checks::*;
use stun::message::*;

const REQUESTED_ADDRESS_FAMILY_SIZE: usize = 4;

const FAMILY_IPV4: u8 = 0x01;
const FAMILY_IPV6: u8 = 0x02;

/// `RequestedAddressFamily` implements REQUESTED-ADDRESS-FAMILY attribute.
///
/// Sent by the client in an Allocate request to ask the server for a
/// relayed transport address of a specific address family.
///
/// RFC 8656 Section 18.6
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum RequestedAddressFamily {
    V4,
    V6,
}

impl Default for RequestedAddressFamily {
    fn default() -> Self {
        RequestedAddressFamily::V4
    }
}

impl fmt::Display for RequestedAddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestedAddressFamily::V4 => write!(f, "IPv4"),
            RequestedAddressFamily::V6 => write!(f, "IPv6"),
        }
    }
}

impl Setter for RequestedAddressFamily {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        let family = match self {
            RequestedAddressFamily::V4 => FAMILY_IPV4,
            RequestedAddressFamily::V6 => FAMILY_IPV6,
        };
        m.add(ATTR_REQUESTED_ADDRESS_FAMILY, &[family, 0, 0, 0]);
        Ok(())
    }
}

impl Getter for RequestedAddressFamily {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_REQUESTED_ADDRESS_FAMILY)?;
        check_size(
            ATTR_REQUESTED_ADDRESS_FAMILY,
            v.len(),
            REQUESTED_ADDRESS_FAMILY_SIZE,
        )?;
        *self = match v[0] {
            FAMILY_IPV6 => RequestedAddressFamily::V6,
            _ => RequestedAddressFamily::V4,
        };
        Ok(())
    }
}
