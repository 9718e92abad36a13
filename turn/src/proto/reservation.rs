#[cfg(test)]
mod reservation_test;

use std::fmt;

use stun::attributes::ATTR_RESERVATION_TOKEN;
use stun::checks::*;
use stun::message::*;

const RESERVATION_TOKEN_SIZE: usize = 8;

/// `ReservationToken` implements RESERVATION-TOKEN attribute.
///
/// The server includes this in an Allocate success response when the
/// client requested a port reservation via EVEN-PORT; a later Allocate
/// request echoing the token binds to the reserved port.
///
/// RFC 5766 Section 14.9
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct ReservationToken(pub u64);

impl fmt::Display for ReservationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Setter for ReservationToken {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        m.add(ATTR_RESERVATION_TOKEN, &self.0.to_be_bytes());
        Ok(())
    }
}

impl Getter for ReservationToken {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_RESERVATION_TOKEN)?;
        check_size(ATTR_RESERVATION_TOKEN, v.len(), RESERVATION_TOKEN_SIZE)?;
        self.0 = u64::from_be_bytes(v[..8].try_into().map_err(|_| stun::Error::ErrUnexpectedEof)?);
        Ok(())
    }
}
