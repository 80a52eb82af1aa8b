//! Java modifier bit-flags.
//!
//! Flag values mirror `java.lang.reflect.Modifier`, so modifiers read from
//! classfile metadata can be used without translation.

use bitflags::bitflags;

bitflags! {
    /// Modifier set of a class or member declaration.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

impl Modifiers {
    /// Reads a modifier set from raw `java.lang.reflect.Modifier` bits,
    /// ignoring bits this model does not track.
    pub fn from_reflect_bits(bits: u16) -> Self {
        Self::from_bits_truncate(bits)
    }

    /// The visibility bits only (public/protected/private).
    pub fn visibility(self) -> Self {
        self & (Self::PUBLIC | Self::PROTECTED | Self::PRIVATE)
    }

    pub fn is_public(self) -> bool {
        self.contains(Self::PUBLIC)
    }

    pub fn is_private(self) -> bool {
        self.contains(Self::PRIVATE)
    }

    pub fn is_protected(self) -> bool {
        self.contains(Self::PROTECTED)
    }

    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    pub fn is_final(self) -> bool {
        self.contains(Self::FINAL)
    }

    pub fn is_abstract(self) -> bool {
        self.contains(Self::ABSTRACT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_bits_round_trip() {
        let m = Modifiers::PUBLIC | Modifiers::FINAL;
        assert_eq!(Modifiers::from_reflect_bits(m.bits()), m);
        // Unknown bits (e.g. ACC_SYNTHETIC 0x1000) are dropped
        assert_eq!(Modifiers::from_reflect_bits(0x1001), Modifiers::PUBLIC);
    }

    #[test]
    fn test_visibility() {
        let m = Modifiers::PROTECTED | Modifiers::STATIC | Modifiers::ABSTRACT;
        assert_eq!(m.visibility(), Modifiers::PROTECTED);
        assert!(m.is_protected());
        assert!(!m.is_public());
        assert!(m.is_abstract());
    }
}
