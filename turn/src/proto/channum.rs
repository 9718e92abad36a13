#[cfg(test)]
mod channum_test;

use std::fmt;

use stun::attributes::ATTR_CHANNEL_NUMBER;
use stun::checks::*;
use stun::message::*;

use super::{MAX_CHANNEL_NUMBER, MIN_CHANNEL_NUMBER};
use crate::error::*;

const CHANNEL_NUMBER_SIZE: usize = 4;

/// `ChannelNumber` implements CHANNEL-NUMBER attribute.
///
/// The CHANNEL-NUMBER attribute contains the number of the channel.
///
/// RFC 5766 Section 14.1
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct ChannelNumber(pub u16);

impl fmt::Display for ChannelNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChannelNumber {
    /// Returns `true` if `n` is a valid TURN channel number.
    ///
    /// RFC 5766 Section 11: "0x4000 through 0x7FFF".
    pub fn is_valid(n: u16) -> bool {
        (MIN_CHANNEL_NUMBER..=MAX_CHANNEL_NUMBER).contains(&n)
    }
}

impl Setter for ChannelNumber {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        let mut v = vec![0u8; CHANNEL_NUMBER_SIZE];
        v[0..2].copy_from_slice(&self.0.to_be_bytes());
        // v[2..4] is RFFU and MUST be set to zero on transmission.
        m.add(ATTR_CHANNEL_NUMBER, &v);
        Ok(())
    }
}

impl Getter for ChannelNumber {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_CHANNEL_NUMBER)?;
        check_size(ATTR_CHANNEL_NUMBER, v.len(), CHANNEL_NUMBER_SIZE)?;
        self.0 = u16::from_be_bytes([v[0], v[1]]);
        Ok(())
    }
}

/// Validates that `n` falls in the TURN channel number range, mapping an
/// out-of-range value to [`Error::ErrInvalidChannelNumber`].
pub fn validate_channel_number(n: u16) -> Result<()> {
    if ChannelNumber::is_valid(n) {
        Ok(())
    } else {
        Err(Error::ErrInvalidChannelNumber)
    }
}
