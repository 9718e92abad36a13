#[cfg(test)]
mod reqtrans_test;

use std::fmt;

use stun::attributes::ATTR_REQUESTED_TRANSPORT;
use stun::checks::*;
use stun::message::*;

use super::Protocol;

const REQUESTED_TRANSPORT_SIZE: usize = 4;

/// `RequestedTransport` implements REQUESTED-TRANSPORT attribute.
///
/// This attribute is used by the client to request a specific transport
/// protocol for the allocated transport address. The value of this
/// attribute is 4 bytes with the first one holding the protocol number
/// and the remaining three reserved for future use.
///
/// RFC 5766 Section 14.7
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct RequestedTransport {
    pub protocol: Protocol,
}

impl fmt::Display for RequestedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "protocol: {}", self.protocol)
    }
}

impl Setter for RequestedTransport {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        let mut v = vec![0u8; REQUESTED_TRANSPORT_SIZE];
        v[0] = self.protocol.0;
        // v[1..4] is RFFU and MUST be set to zero on transmission.
        m.add(ATTR_REQUESTED_TRANSPORT, &v);
        Ok(())
    }
}

impl Getter for RequestedTransport {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_REQUESTED_TRANSPORT)?;
        check_size(
            ATTR_REQUESTED_TRANSPORT,
            v.len(),
            REQUESTED_TRANSPORT_SIZE,
        )?;
        self.protocol = Protocol(v[0]);
        Ok(())
    }
}
