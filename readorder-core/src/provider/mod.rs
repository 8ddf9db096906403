use std::path::Path;

use snafu::ResultExt;

use crate::{
    error::{IoReadSnafu, ReadorderError},
    layout::element::Fragment,
};

pub mod clova;
pub mod upstage;

/// OCR vendors whose response payloads this crate can normalize.
///
/// Both shapes reduce to the same [`Fragment`] collection; the reconstruction
/// pipeline downstream is indifferent to which vendor produced the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Field-level receipt OCR (one fragment per recognized field).
    Clova,
    /// Word-level document OCR (one fragment per recognized word).
    Upstage,
}

impl Provider {
    pub const fn name(&self) -> &str {
        match self {
            Provider::Clova => "clova",
            Provider::Upstage => "upstage",
        }
    }

    /// Decodes a raw response payload into normalized fragments.
    pub fn parse(&self, json: &str) -> Result<Vec<Fragment>, ReadorderError> {
        match self {
            Provider::Clova => clova::parse(json),
            Provider::Upstage => upstage::parse(json),
        }
    }

    /// Reads a response payload saved to disk and decodes it.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Fragment>, ReadorderError> {
        let json = std::fs::read_to_string(path.as_ref()).context(IoReadSnafu {
            path: path.as_ref().to_string_lossy(),
        })?;

        self.parse(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Provider::Clova.load("/definitely/not/here.json");
        assert!(matches!(result, Err(ReadorderError::IoRead { .. })));
    }

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::Clova.name(), "clova");
        assert_eq!(Provider::Upstage.name(), "upstage");
    }
}
