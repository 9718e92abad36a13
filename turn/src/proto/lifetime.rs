#[cfg(test)]
mod lifetime_test;

use std::fmt;
use std::time::Duration;

use stun::attributes::ATTR_LIFETIME;
use stun::checks::*;
use stun::message::*;

use super::DEFAULT_LIFETIME;

const LIFETIME_SIZE: usize = 4;

/// `Lifetime` implements LIFETIME attribute.
///
/// The value portion of this attribute is 4 bytes and consists of a 32-bit
/// unsigned integral value representing the number of seconds remaining
/// until expiration.
///
/// RFC 5766 Section 14.2
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct Lifetime(pub Duration);

impl Default for Lifetime {
    fn default() -> Self {
        Lifetime(DEFAULT_LIFETIME)
    }
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0.as_secs())
    }
}

impl Setter for Lifetime {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        let secs = self.0.as_secs() as u32;
        m.add(ATTR_LIFETIME, &secs.to_be_bytes());
        Ok(())
    }
}

impl Getter for Lifetime {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_LIFETIME)?;
        check_size(ATTR_LIFETIME, v.len(), LIFETIME_SIZE)?;
        let secs = u32::from_be_bytes([v[0], v[1], v[2], v[3]]);
        self.0 = Duration::from_secs(secs as u64);
        Ok(())
    }
}
