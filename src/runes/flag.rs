/// Bits of the flags field (tag 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flag {
    Etching = 0,
    Terms = 1,
    Turbo = 2,
}

impl Flag {
    pub(super) fn mask(self) -> u128 {
        1 << self as u128
    }

    /// Clear this flag's bit, returning whether it was set
    pub(super) fn take(self, flags: &mut u128) -> bool {
        let mask = self.mask();
        let set = *flags & mask != 0;
        *flags &= !mask;
        set
    }

    pub(super) fn set(self, flags: &mut u128) {
        *flags |= self.mask()
    }
}

impl From<Flag> for u128 {
    fn from(flag: Flag) -> Self {
        flag.mask()
    }
}
