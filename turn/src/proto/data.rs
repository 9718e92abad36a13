#[cfg(test)]
mod data_test;

use std::fmt;

use stun::attributes::ATTR_DATA;
use stun::message::*;

/// `Data` implements DATA attribute.
///
/// The DATA attribute is present in all Send and Data indications. It
/// holds the application payload carried by the relay.
///
/// RFC 5766 Section 14.4
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Data(pub Vec<u8>);

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Setter for Data {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        m.add(ATTR_DATA, &self.0);
        Ok(())
    }
}

impl Getter for Data {
    fn get_from(&mut self, m: &Message) -> stun::Result<()> {
        let v = m.get(ATTR_DATA)?;
        self.0 = v;
        Ok(())
    }
}
