use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Counter update discipline of a TRIEST run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Variant {
    /// Counters track the triangles currently inside the sample; every
    /// admission adds and every eviction subtracts.
    #[default]
    #[serde(rename = "base")]
    Base,
    /// Every arriving edge adds reweighted counts before sampling and
    /// evictions never subtract.
    #[serde(rename = "impr", alias = "improved")]
    Improved,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Improved => "impr",
        }
    }

    /// Whether the global counter can only grow over the stream.
    pub fn is_monotone(&self) -> bool {
        matches!(self, Variant::Improved)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(Variant::Base),
            "impr" | "improved" => Ok(Variant::Improved),
            other => Err(GraphError::invalid_parameter(format!(
                "unknown variant '{}', expected 'base' or 'impr'",
                other
            ))),
        }
    }
}

/// Configuration of a single estimator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriestConfig {
    /// Maximum number of sampled edges (M)
    pub capacity: usize,
    #[serde(default)]
    pub variant: Variant,
    /// Seed for the reservoir's random source; `None` draws from entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TriestConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            variant: Variant::default(),
            seed: None,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(GraphError::invalid_parameter("capacity must be a positive integer"));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TriestConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variant_parsing() {
        assert_eq!("base".parse::<Variant>().unwrap(), Variant::Base);
        assert_eq!("IMPR".parse::<Variant>().unwrap(), Variant::Improved);
        assert_eq!("improved".parse::<Variant>().unwrap(), Variant::Improved);
        assert!("fd".parse::<Variant>().is_err());
        assert_eq!(Variant::Improved.to_string(), "impr");
    }

    #[test]
    fn test_config_from_json() {
        let config = TriestConfig::from_json_str(r#"{"capacity": 500, "variant": "impr", "seed": 9}"#).unwrap();
        assert_eq!(config, TriestConfig::new(500).with_variant(Variant::Improved).with_seed(9));

        let config = TriestConfig::from_json_str(r#"{"capacity": 10}"#).unwrap();
        assert_eq!(config.variant, Variant::Base);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(TriestConfig::new(0).validate().is_err());
        assert!(TriestConfig::from_json_str(r#"{"capacity": 0}"#).is_err());
        assert!(TriestConfig::from_json_str(r#"{"variant": "base"}"#).is_err());
    }
}
