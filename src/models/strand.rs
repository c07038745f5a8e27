use core::str::FromStr;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::errors::TxError;

/// Strand of a genomic interval
///
/// `*` denotes an interval without strand information
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "*")]
    Unknown,
}

impl FromStr for Strand {
    type Err = TxError;
    fn from_str(s: &str) -> Result<Self, TxError> {
        match s {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            "*" => Ok(Strand::Unknown),
            _ => Err(TxError::new(format!(
                "invalid strand '{}', must be one of '+', '-', '*'",
                s
            ))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strand::Plus => "+",
                Strand::Minus => "-",
                Strand::Unknown => "*",
            }
        )
    }
}
