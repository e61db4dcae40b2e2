//! Serialization of notation types as their string form.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{LogicalMove, OpSequence};

impl Serialize for OpSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OpSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::parse_ops(&s).map_err(D::Error::custom)
    }
}

impl Serialize for LogicalMove {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LogicalMove {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        match crate::parse_solution(&s).map_err(D::Error::custom)?.as_slice() {
            [mv] => Ok(*mv),
            _ => Err(D::Error::custom(format!("expected a single move, got {s:?}"))),
        }
    }
}
