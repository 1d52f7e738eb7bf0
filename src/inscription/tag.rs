//! Envelope field tags

use super::Field;

/// Recognised envelope field tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    ContentType,
    Pointer,
    Parent,
    Metadata,
    Metaprotocol,
    ContentEncoding,
    Delegate,
}

impl Tag {
    pub const fn value(self) -> u128 {
        match self {
            Tag::ContentType => 1,
            Tag::Pointer => 2,
            Tag::Parent => 3,
            Tag::Metadata => 5,
            Tag::Metaprotocol => 7,
            Tag::ContentEncoding => 9,
            Tag::Delegate => 11,
        }
    }

    /// Value of the first field carrying this tag
    pub fn first(self, fields: &[Field]) -> Option<&[u8]> {
        self.all(fields).next()
    }

    /// Values of every field carrying this tag, in envelope order
    pub fn all(self, fields: &[Field]) -> impl Iterator<Item = &[u8]> {
        let tag = self.value();
        fields
            .iter()
            .filter(move |field| field.tag == tag)
            .map(|field| field.value.as_slice())
    }
}
