#[cfg(test)]
mod dontfrag_test;

use std::fmt;

use stun::attributes::ATTR_DONT_FRAGMENT;
use stun::message::*;

/// `DontFragmentAttr` implements DONT-FRAGMENT attribute.
///
/// This is a flag attribute with no value: the client includes it in an
/// Allocate or CreatePermission request to ask the server to set the
/// DF (Don't Fragment) bit on UDP datagrams it relays on the client's
/// behalf.
///
/// RFC 5766 Section 14.8
#[derive(Default)]
pub struct DontFragmentAttr;

impl fmt::Display for DontFragmentAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dont-fragment")
    }
}

impl Setter for DontFragmentAttr {
    fn add_to(&self, m: &mut Message) -> stun::Result<()> {
        m.add(ATTR_DONT_FRAGMENT, &[]);
        Ok(())
    }
}

impl DontFragmentAttr {
    /// Returns `true` if DONT-FRAGMENT is present in `m`.
    pub fn is_set(m: &Message) -> bool {
        m.get(ATTR_DONT_FRAGMENT).is_ok()
    }
}
