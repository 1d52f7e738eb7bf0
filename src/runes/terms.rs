use serde::{Deserialize, Serialize};

/// Open-mint terms of an etching
///
/// `height` is an absolute block range and `offset` a range relative to the
/// etching block; either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    pub amount: Option<u128>,
    pub cap: Option<u128>,
    pub height: (Option<u64>, Option<u64>),
    pub offset: (Option<u64>, Option<u64>),
}
