//! Optional serde support, behind the `serde` feature.
//!
//! Content is raw bytes, so both types serialize with `serialize_bytes`;
//! formats without a native byte type (JSON) fall back to a sequence of
//! numbers, which the deserializer accepts alongside byte and string inputs.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{TStr, TString};

impl Serialize for TString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl Serialize for TStr<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

struct TStringVisitor;

impl<'de> de::Visitor<'de> for TStringVisitor {
    type Value = TString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<TString, E> {
        Ok(TString::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TString, E> {
        Ok(TString::from(v))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<TString, A::Error> {
        let mut out = TString::with_capacity(seq.size_hint().unwrap_or(0) + 1);
        while let Some(byte) = seq.next_element::<u8>()? {
            out.push(byte);
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for TString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<TString, D::Error> {
        deserializer.deserialize_byte_buf(TStringVisitor)
    }
}
