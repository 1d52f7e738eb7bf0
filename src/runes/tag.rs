use crate::varint;
use std::collections::{HashMap, VecDeque};

/// Runestone field tags
///
/// Even tags must be understood by a decoder; an unrecognised even tag makes
/// the runestone a cenotaph. Odd tags may be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tag {
    Body = 0,
    Flags = 2,
    Rune = 4,
    Premine = 6,
    Cap = 8,
    Amount = 10,
    HeightStart = 12,
    HeightEnd = 14,
    OffsetStart = 16,
    OffsetEnd = 18,
    Mint = 20,
    Pointer = 22,

    Divisibility = 1,
    Spacers = 3,
    Symbol = 5,
}

pub(super) type Fields = HashMap<u128, VecDeque<u128>>;

impl Tag {
    /// Take the first `N` values of this tag if `with` accepts them
    ///
    /// Values that `with` rejects stay in `fields`.
    pub(super) fn take<const N: usize, T>(
        self,
        fields: &mut Fields,
        with: impl Fn([u128; N]) -> Option<T>,
    ) -> Option<T> {
        let values = self.peek::<N>(fields)?;
        let value = with(values)?;
        self.remove::<N>(fields);
        Some(value)
    }

    /// Take the first `N` values of this tag, discarding them even when
    /// `with` rejects them
    pub(super) fn consume<const N: usize, T>(
        self,
        fields: &mut Fields,
        with: impl Fn([u128; N]) -> Option<T>,
    ) -> Option<T> {
        let values = self.peek::<N>(fields)?;
        self.remove::<N>(fields);
        with(values)
    }

    fn peek<const N: usize>(self, fields: &Fields) -> Option<[u128; N]> {
        let field = fields.get(&u128::from(self))?;

        let mut values = [0; N];
        for (i, v) in values.iter_mut().enumerate() {
            *v = *field.get(i)?;
        }

        Some(values)
    }

    fn remove<const N: usize>(self, fields: &mut Fields) {
        let key = u128::from(self);

        if let Some(field) = fields.get_mut(&key) {
            field.drain(0..N.min(field.len()));
            if field.is_empty() {
                fields.remove(&key);
            }
        }
    }

    pub(super) fn encode<const N: usize>(self, values: [u128; N], payload: &mut Vec<u8>) {
        for value in values {
            varint::encode_to_vec(self.into(), payload);
            varint::encode_to_vec(value, payload);
        }
    }

    pub(super) fn encode_option<T: Into<u128>>(self, value: Option<T>, payload: &mut Vec<u8>) {
        if let Some(value) = value {
            self.encode([value.into()], payload)
        }
    }
}

impl From<Tag> for u128 {
    fn from(tag: Tag) -> Self {
        tag as u128
    }
}

impl PartialEq<u128> for Tag {
    fn eq(&self, other: &u128) -> bool {
        u128::from(*self) == *other
    }
}
