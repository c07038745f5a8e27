use core::str::FromStr;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::errors::TxError;

/// The type of a transcript interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Exon,
    Intron,
}

impl FromStr for Feature {
    type Err = TxError;
    fn from_str(s: &str) -> Result<Self, TxError> {
        match s {
            "exon" => Ok(Feature::Exon),
            "intron" => Ok(Feature::Intron),
            _ => Err(TxError::new(format!(
                "invalid type '{}', must be 'exon' or 'intron'",
                s
            ))),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Feature::Exon => "exon",
                Feature::Intron => "intron",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature() {
        assert_eq!(Feature::from_str("exon").unwrap(), Feature::Exon);
        assert_eq!(Feature::from_str("intron").unwrap(), Feature::Intron);
        assert!(Feature::from_str("CDS").is_err());
    }
}
