//! Configuration options for the engine

use anyhow::{bail, ensure, Result};

use crate::core::{BoardSnapshot, ChainPolicy, MAX_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Board dimension N of the N×N grid
    pub size: usize,
    /// How capture chains continue from a shared landing square
    pub chain: ChainPolicy,
    /// Stop at the first protocol error
    pub strict_mode: bool,
    /// ANSI colors in board output
    pub color: bool,
    /// Print search counters after each move listing
    pub debug: bool,
}

impl EngineOptions {
    pub const NAMES: [&'static str; 5] = ["size", "chain", "strictmode", "color", "debug"];

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "size" => {
                let size: usize = value.parse()?;
                ensure!((1..=MAX_SIZE).contains(&size), "size must be between 1 and {}", MAX_SIZE);
                self.size = size;
            }
            "chain" => self.chain = value.parse()?,
            "strictmode" => self.strict_mode = value.parse()?,
            "color" => self.color = value.parse()?,
            "debug" => self.debug = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }

    /// Protocol line describing one option
    pub fn describe(&self, name: &str) -> Option<String> {
        let line = match name {
            "size" => format!("option name size type spin default {} min 1 max {}", self.size, MAX_SIZE),
            "chain" => format!("option name chain type combo default {} var first var own", match self.chain {
                ChainPolicy::FirstMatch => "first",
                ChainPolicy::OwnPath => "own",
            }),
            "strictmode" => format!("option name strictmode type check default {}", self.strict_mode),
            "color" => format!("option name color type check default {}", self.color),
            "debug" => format!("option name debug type check default {}", self.debug),
            _ => return None,
        };
        Some(line)
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            size: BoardSnapshot::DEFAULT_SIZE,
            chain: ChainPolicy::FirstMatch,
            strict_mode: false,
            color: true,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_option() {
        let mut options = EngineOptions::default();

        options.set_option("size", "10").unwrap();
        options.set_option("chain", "own").unwrap();
        options.set_option("strictmode", "true").unwrap();
        options.set_option("debug", "true").unwrap();

        assert_eq!(options.size, 10);
        assert_eq!(options.chain, ChainPolicy::OwnPath);
        assert!(options.strict_mode);
        assert!(options.debug);
    }

    #[test]
    fn test_set_option_rejects_bad_values() {
        let mut options = EngineOptions::default();

        assert!(options.set_option("size", "0").is_err());
        assert!(options.set_option("size", "27").is_err());
        assert!(options.set_option("size", "eight").is_err());
        assert!(options.set_option("chain", "all").is_err());
        assert!(options.set_option("color", "yes").is_err());
        assert!(options.set_option("hash", "16").is_err());
        assert_eq!(options, EngineOptions::default());
    }

    #[test]
    fn test_every_option_is_described() {
        let options = EngineOptions::default();
        for name in EngineOptions::NAMES {
            assert!(options.describe(name).unwrap().starts_with(&format!("option name {name} ")));
        }
        assert!(options.describe("hash").is_none());
    }
}
