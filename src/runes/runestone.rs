use super::flag::Flag;
use super::message::Message;
use super::tag::Tag;
use super::{Artifact, Cenotaph, Edict, Etching, Flaw, Rune, RuneId, Terms};
use crate::script::opcodes::{OP_PUSHNUM_13, OP_RETURN};
use crate::script::{decompile, write_push_data, Instruction};
use crate::transaction::Transaction;
use crate::varint;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A well-formed runes message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runestone {
    pub edicts: Vec<Edict>,
    pub etching: Option<Etching>,
    pub mint: Option<RuneId>,
    pub pointer: Option<u32>,
}

#[derive(Debug, PartialEq)]
enum Payload {
    Valid(Vec<u8>),
    Invalid(Flaw),
}

impl Runestone {
    /// Protocol identifier following `OP_RETURN`
    pub const MAGIC_NUMBER: u8 = OP_PUSHNUM_13;

    /// Largest single push in an enciphered payload
    pub const MAX_PUSH_SIZE: usize = 520;

    /// Decode the runes artifact of `transaction`, if it carries a payload
    ///
    /// Never fails: structural problems produce a [`Cenotaph`].
    pub fn decipher(transaction: &Transaction) -> Option<Artifact> {
        let payload = match Runestone::payload(transaction)? {
            Payload::Valid(payload) => payload,
            Payload::Invalid(flaw) => {
                debug!("Transaction {} runestone is a cenotaph: {}", transaction.txid, flaw);
                return Some(Artifact::Cenotaph(Cenotaph::from_flaw(flaw)));
            }
        };

        let Ok(integers) = varint::decode_all(&payload) else {
            debug!("Transaction {} runestone has an invalid varint", transaction.txid);
            return Some(Artifact::Cenotaph(Cenotaph::from_flaw(Flaw::Varint)));
        };

        let output_count = transaction.vout.len();

        let Message {
            flaw,
            edicts,
            mut fields,
        } = Message::from_integers(output_count, &integers);

        let mut flaws = Vec::new();
        if let Some(flaw) = flaw {
            flaws.push(flaw);
        }

        let mut flags = Tag::Flags
            .take(&mut fields, |[flags]| Some(flags))
            .unwrap_or_default();

        let etching = Flag::Etching.take(&mut flags).then(|| Etching {
            divisibility: Tag::Divisibility.take(&mut fields, |[divisibility]| {
                let divisibility = u8::try_from(divisibility).ok()?;
                (divisibility <= Etching::MAX_DIVISIBILITY).then_some(divisibility)
            }),
            premine: Tag::Premine.take(&mut fields, |[premine]| Some(premine)),
            rune: Tag::Rune.take(&mut fields, |[rune]| Some(Rune(rune))),
            spacers: Tag::Spacers.take(&mut fields, |[spacers]| {
                let spacers = u32::try_from(spacers).ok()?;
                (spacers <= Etching::MAX_SPACERS).then_some(spacers)
            }),
            symbol: Tag::Symbol.take(&mut fields, |[symbol]| {
                char::from_u32(u32::try_from(symbol).ok()?)
            }),
            terms: Flag::Terms.take(&mut flags).then(|| Terms {
                cap: Tag::Cap.take(&mut fields, |[cap]| Some(cap)),
                height: (
                    Tag::HeightStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
                    Tag::HeightEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
                ),
                amount: Tag::Amount.take(&mut fields, |[amount]| Some(amount)),
                offset: (
                    Tag::OffsetStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
                    Tag::OffsetEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
                ),
            }),
            turbo: Flag::Turbo.take(&mut flags),
        });

        let mint = Tag::Mint.take(&mut fields, |[block, tx]| {
            RuneId::new(block.try_into().ok()?, tx.try_into().ok()?)
        });

        // out of range pointers are dropped without poisoning the runestone
        let pointer = Tag::Pointer.consume(&mut fields, |[pointer]| {
            let pointer = u32::try_from(pointer).ok()?;
            (u64::from(pointer) < output_count as u64).then_some(pointer)
        });

        if etching.is_some_and(|etching| etching.supply().is_none()) {
            record(&mut flaws, Flaw::SupplyOverflow);
        }

        if flags != 0 {
            record(&mut flaws, Flaw::UnrecognizedFlag);
        }

        if fields.keys().any(|tag| tag % 2 == 0) {
            record(&mut flaws, Flaw::UnrecognizedEvenTag);
        }

        if !flaws.is_empty() {
            debug!(
                "Transaction {} runestone is a cenotaph: {:?}",
                transaction.txid, flaws
            );
            return Some(Artifact::Cenotaph(Cenotaph {
                etching: etching.and_then(|etching| etching.rune),
                flaws,
                mint,
            }));
        }

        Some(Artifact::Runestone(Self {
            edicts,
            etching,
            mint,
            pointer,
        }))
    }

    /// Encode as an `OP_RETURN OP_PUSHNUM_13 <payload>` scriptPubKey
    ///
    /// Edicts are written sorted by rune id. Ids that cannot be delta-encoded
    /// after sorting do not exist, so every edict is always written.
    pub fn encipher(&self) -> Vec<u8> {
        let mut payload = Vec::new();

        if let Some(etching) = self.etching {
            let mut flags = 0;
            Flag::Etching.set(&mut flags);

            if etching.terms.is_some() {
                Flag::Terms.set(&mut flags);
            }

            if etching.turbo {
                Flag::Turbo.set(&mut flags);
            }

            Tag::Flags.encode([flags], &mut payload);

            Tag::Rune.encode_option(etching.rune.map(|rune| rune.0), &mut payload);
            Tag::Divisibility.encode_option(etching.divisibility, &mut payload);
            Tag::Spacers.encode_option(etching.spacers, &mut payload);
            Tag::Symbol.encode_option(etching.symbol, &mut payload);
            Tag::Premine.encode_option(etching.premine, &mut payload);

            if let Some(terms) = etching.terms {
                Tag::Amount.encode_option(terms.amount, &mut payload);
                Tag::Cap.encode_option(terms.cap, &mut payload);
                Tag::HeightStart.encode_option(terms.height.0, &mut payload);
                Tag::HeightEnd.encode_option(terms.height.1, &mut payload);
                Tag::OffsetStart.encode_option(terms.offset.0, &mut payload);
                Tag::OffsetEnd.encode_option(terms.offset.1, &mut payload);
            }
        }

        if let Some(RuneId { block, tx }) = self.mint {
            Tag::Mint.encode([block.into(), tx.into()], &mut payload);
        }

        Tag::Pointer.encode_option(self.pointer, &mut payload);

        if !self.edicts.is_empty() {
            varint::encode_to_vec(Tag::Body.into(), &mut payload);

            let mut edicts = self.edicts.clone();
            edicts.sort_by_key(|edict| edict.id);

            let mut previous = RuneId::default();
            for edict in edicts {
                let (block, tx) = previous.delta(edict.id).unwrap_or_default();
                varint::encode_to_vec(block, &mut payload);
                varint::encode_to_vec(tx, &mut payload);
                varint::encode_to_vec(edict.amount, &mut payload);
                varint::encode_to_vec(edict.output.into(), &mut payload);
                previous = edict.id;
            }
        }

        let mut script = vec![OP_RETURN, Runestone::MAGIC_NUMBER];

        for chunk in payload.chunks(Runestone::MAX_PUSH_SIZE) {
            write_push_data(&mut script, chunk);
        }

        script
    }

    /// Find the first `OP_RETURN OP_PUSHNUM_13` output and join its pushes
    fn payload(transaction: &Transaction) -> Option<Payload> {
        for output in &transaction.vout {
            let Some(script) = output.script_bytes() else {
                continue;
            };

            let mut instructions = decompile(&script);

            // payload starts with OP_RETURN
            if instructions.next() != Some(Ok(Instruction::Opcode(OP_RETURN))) {
                continue;
            }

            // followed by the protocol identifier, ignoring errors, since
            // OP_RETURN scripts may be invalid
            if instructions.next() != Some(Ok(Instruction::Opcode(Runestone::MAGIC_NUMBER))) {
                continue;
            }

            let mut payload = Vec::new();

            for result in instructions {
                match result {
                    Ok(Instruction::Data(data)) => payload.extend_from_slice(data),
                    Ok(Instruction::Opcode(_)) => return Some(Payload::Invalid(Flaw::Opcode)),
                    Err(_) => return Some(Payload::Invalid(Flaw::InvalidScript)),
                }
            }

            return Some(Payload::Valid(payload));
        }

        None
    }
}

fn record(flaws: &mut Vec<Flaw>, flaw: Flaw) {
    if !flaws.contains(&flaw) {
        flaws.push(flaw);
    }
}
