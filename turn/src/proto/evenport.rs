#[cfg(test)]
mod evenport_test;

use std::fmt;

use stun::attributes::ATTR_EVEN_PORT;
use stun::checks::*;
use stun::message::*;

const EVEN_PORT_SIZE: usize = 1;
const RESERVED_BIT: u8 = 1 << 7;

/// `EvenPort` implements EVEN-PORT attribute.
///
/// This attribute allows the client to request that the port in the
/// relayed transport address be even, and (optionally) that the server
/// reserve the next-higher port number.
///
/// RFC 5766 Section 14.6
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct EvenPort {
    pub reserve_next: bool,
}

impl fmt::Display for EvenPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reserve_next {
            write!(f, "even port, reserve next")
        } else {
            write!(f, "even port")
        }
    }
}

impl Setter for EvenPort {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        let b = if self.reserve_next { RESERVED_BIT } else { 0 };
        m.add(ATTR_EVEN_PORT, &[b]);
        Ok(())
    }
}

impl Getter for EvenPort {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_EVEN_PORT)?;
        check_size(ATTR_EVEN_PORT, v.len(), EVEN_PORT_SIZE)?;
        self.reserve_next = v[0] & RESERVED_BIT != 0;
        Ok(())
    }
}
