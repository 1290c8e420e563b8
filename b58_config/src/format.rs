use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Deserializer,
    de::Error as DeserializerError,
};

/// Textual representation of binary data on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DataFormat {
    #[default]
    Hex,
    Utf8,
}

#[derive(thiserror::Error, Debug)]
#[error("unknown data format")]
pub struct DataFormatError;

impl FromStr for DataFormat {
    type Err = DataFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let format = match value {
            "hex" => Self::Hex,
            "utf8" | "utf-8" => Self::Utf8,
            _ => return Err(DataFormatError),
        };
        Ok(format)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format_str = match self {
            Self::Hex => "hex",
            Self::Utf8 => "utf8",
        };
        write!(formatter, "{}", format_str)
    }
}

impl<'de> Deserialize<'de> for DataFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let format_str = String::deserialize(deserializer)?;
        format_str.parse()
            .map_err(|_| DeserializerError::custom("unknown data format"))
    }
}
