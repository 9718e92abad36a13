#[cfg(test)]
mod chandata_test;

use super::channum::ChannelNumber;
use crate::error::*;

const CHANNEL_DATA_HEADER_SIZE: usize = 4;
const CHANNEL_DATA_NUMBER_SIZE: usize = 2;

/// `ChannelData` represents the TURN ChannelData message.
///
/// ChannelData messages are used to carry application data between the
/// client and the server on an already-bound channel, avoiding the
/// overhead of a full STUN header.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         Channel Number        |            Length            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                       Application Data                       /
/// /                                                               /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// RFC 5766 Section 11.4
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct ChannelData {
    pub data: Vec<u8>,
    pub number: ChannelNumber,
    pub raw: Vec<u8>,
}

impl ChannelData {
    /// Returns `true` if the leading two bits of `data` mark it as
    /// ChannelData rather than a STUN message (whose leading two bits are
    /// always `00`).
    pub fn is_channel_data(data: &[u8]) -> bool {
        data.len() >= CHANNEL_DATA_HEADER_SIZE && (data[0] & 0xC0) == 0x40
    }

    /// Encodes the channel number and payload length into `self.raw`,
    /// appending `self.data` unpadded (this client only runs over UDP,
    /// where RFC 5766 does not require 4-byte padding).
    pub fn encode(&mut self) {
        self.raw.clear();
        self.raw.extend_from_slice(&self.number.0.to_be_bytes());
        self.raw
            .extend_from_slice(&(self.data.len() as u16).to_be_bytes());
        self.raw.extend_from_slice(&self.data);
    }

    /// Parses `self.raw` into `self.number` and `self.data`, validating the
    /// channel number range and that the declared length matches the
    /// bytes actually present.
    pub fn decode(&mut self) -> Result<()> {
        if self.raw.len() < CHANNEL_DATA_HEADER_SIZE {
            return Err(Error::ErrUnexpectedEof);
        }

        let number = u16::from_be_bytes([self.raw[0], self.raw[1]]);
        super::channum::validate_channel_number(number)?;
        self.number = ChannelNumber(number);

        let length = u16::from_be_bytes([
            self.raw[CHANNEL_DATA_NUMBER_SIZE],
            self.raw[CHANNEL_DATA_NUMBER_SIZE + 1],
        ]) as usize;
        if length > self.raw.len() - CHANNEL_DATA_HEADER_SIZE {
            return Err(Error::ErrBadChannelDataLength);
        }

        self.data = self.raw[CHANNEL_DATA_HEADER_SIZE..CHANNEL_DATA_HEADER_SIZE + length].to_vec();

        Ok(())
    }
}
