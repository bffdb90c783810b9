use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::int_set::IntSet;

/// Serializes as a sequence of members in insertion order.
impl<const N: usize> Serialize for IntSet<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Rejects sequences with repeated values or more than `N` entries.
impl<'de, const N: usize> Deserialize<'de> for IntSet<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(IntSetVisitor::<N>)
    }
}

struct IntSetVisitor<const N: usize>;

impl<'de, const N: usize> Visitor<'de> for IntSetVisitor<N> {
    type Value = IntSet<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of at most {N} distinct integers")
    }

    // Stops reading at the first rejected element.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = IntSet::new();
        while let Some(value) = seq.next_element::<i32>()? {
            set.try_add(value).map_err(de::Error::custom)?;
        }
        Ok(set)
    }
}
