//! Shared value types and lenient serde helpers.
//!
//! The node's JSON codec writes 64-bit integers as strings, while hand-built
//! fixtures often use plain numbers. Integer fields accept both.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::codec::pubkey::InternalPubKey;

/// An amount of LNO, already rescaled from the chain's base unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }
}

/// A `(key, value)` pair returned by a subspace query.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultKv<V> {
    pub key: String,
    pub value: V,
}

/// One entry of a post's external link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdToUrlMapping {
    pub identifier: String,
    pub url: String,
}

struct IntVisitor;

impl<'de> Visitor<'de> for IntVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("an integer or a string containing an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        i64::try_from(v).map_err(|_| E::custom(format!("integer {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
        v.trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid integer string {v:?}")))
    }

    fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
        Ok(0)
    }
}

/// Deserialize an `i64` written either as a JSON number or as a decimal string.
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IntVisitor)
}

/// Deserialize a `{type, value}` public key into its prefixed hex form.
pub fn pub_key_hex<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let internal = InternalPubKey::deserialize(deserializer)?;
    internal.to_prefixed_hex().map_err(de::Error::custom)
}

/// Deserialize a possibly-null list as an empty `Vec`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
