use anyhow::{Context, Result};

/// Conversion from the numeric codes the digitizer reports
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;

    /// Parse a decimal code such as `"2"` and convert it
    fn from_index_str(s: &str) -> Result<Self> {
        let idx = s
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid code: {s}"))?;
        Self::from_index(idx)
    }
}

/// Conversion back to a numeric code
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}
