use serde::{Deserialize, Deserializer, Serializer};

/// Serializes a value through its `Display` form and parses it back with `FromStr`.
///
/// Coordinates travel through build metadata as `group:artifact:version` strings,
/// so they are stored the same way.
pub mod serde_display {
    use super::*;
    use std::fmt::Display;
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
