use super::tag::{Fields, Tag};
use super::{Edict, Flaw, RuneId};

/// Integers of a runestone payload grouped into fields and edicts
pub(super) struct Message {
    pub(super) flaw: Option<Flaw>,
    pub(super) edicts: Vec<Edict>,
    pub(super) fields: Fields,
}

impl Message {
    /// Group `payload` as `(tag, value)` pairs until the body tag, then as
    /// delta-encoded edicts of four integers each
    pub(super) fn from_integers(output_count: usize, payload: &[u128]) -> Self {
        let mut edicts = Vec::new();
        let mut fields = Fields::new();
        let mut flaw = None;

        for i in (0..payload.len()).step_by(2) {
            let tag = payload[i];

            if Tag::Body == tag {
                let mut id = RuneId::default();
                for chunk in payload[i + 1..].chunks(4) {
                    if chunk.len() != 4 {
                        flaw.get_or_insert(Flaw::TruncatedField);
                        break;
                    }

                    let Some(next) = id.next(chunk[0], chunk[1]) else {
                        flaw.get_or_insert(Flaw::EdictRuneId);
                        break;
                    };

                    let Some(edict) = Edict::from_integers(output_count, next, chunk[2], chunk[3])
                    else {
                        flaw.get_or_insert(Flaw::EdictOutput);
                        break;
                    };

                    id = next;
                    edicts.push(edict);
                }
                break;
            }

            let Some(&value) = payload.get(i + 1) else {
                flaw.get_or_insert(Flaw::TrailingIntegers);
                break;
            };

            fields.entry(tag).or_default().push_back(value);
        }

        Self {
            flaw,
            edicts,
            fields,
        }
    }
}
