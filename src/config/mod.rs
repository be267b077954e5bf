//! Configuration for the I/O adapters.
//!
//! The transforms take caller-provided buffers and need no configuration.
//! [`TransformConfig`] sizes the staging buffers that
//! [`TransformReader`](crate::TransformReader),
//! [`TransformWriter`](crate::TransformWriter) and the async stream allocate
//! once at construction.
//!
//! # Example
//!
//! ```
//! use crlfkit::TransformConfig;
//!
//! let config = TransformConfig::new(8192, 16384)?;
//!
//! let config = TransformConfig::default().with_dst_buffer_size(64);
//! assert!(config.validate().is_ok());
//! # Ok::<(), crlfkit::TransformError>(())
//! ```

use crate::error::TransformError;

/// Default input staging size (4 KiB).
pub const DEFAULT_SRC_BUFFER_SIZE: usize = 4 * 1024;

/// Default output staging size (4 KiB).
pub const DEFAULT_DST_BUFFER_SIZE: usize = 4 * 1024;

/// Smallest usable output staging size.
///
/// An LF expands to CR LF, the longest output a single input byte produces.
pub const MIN_DST_BUFFER_SIZE: usize = 2;

/// Staging buffer sizes for the adapters.
///
/// Constraints: `src_buffer_size >= 1`, `dst_buffer_size >= MIN_DST_BUFFER_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformConfig {
    src_buffer_size: usize,
    dst_buffer_size: usize,
}

impl TransformConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidConfig`] if `src_buffer_size` is zero
    /// or `dst_buffer_size` is below [`MIN_DST_BUFFER_SIZE`].
    ///
    /// # Example
    ///
    /// ```
    /// use crlfkit::TransformConfig;
    ///
    /// let config = TransformConfig::new(512, 1024)?;
    /// assert_eq!(config.src_buffer_size(), 512);
    /// assert!(TransformConfig::new(512, 1).is_err());
    /// # Ok::<(), crlfkit::TransformError>(())
    /// ```
    pub fn new(src_buffer_size: usize, dst_buffer_size: usize) -> Result<Self, TransformError> {
        if src_buffer_size == 0 {
            return Err(TransformError::InvalidConfig {
                message: "src_buffer_size must be non-zero",
            });
        }

        if dst_buffer_size < MIN_DST_BUFFER_SIZE {
            return Err(TransformError::InvalidConfig {
                message: "dst_buffer_size must be at least 2",
            });
        }

        Ok(Self {
            src_buffer_size,
            dst_buffer_size,
        })
    }

    /// Sets the input staging size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`TransformConfig::validate`] to check it.
    pub fn with_src_buffer_size(mut self, size: usize) -> Self {
        self.src_buffer_size = size;
        self
    }

    /// Sets the output staging size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`TransformConfig::validate`] to check it.
    pub fn with_dst_buffer_size(mut self, size: usize) -> Self {
        self.dst_buffer_size = size;
        self
    }

    /// Returns the input staging size.
    pub fn src_buffer_size(&self) -> usize {
        self.src_buffer_size
    }

    /// Returns the output staging size.
    pub fn dst_buffer_size(&self) -> usize {
        self.dst_buffer_size
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), TransformError> {
        Self::new(self.src_buffer_size, self.dst_buffer_size).map(|_| ())
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            src_buffer_size: DEFAULT_SRC_BUFFER_SIZE,
            dst_buffer_size: DEFAULT_DST_BUFFER_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.src_buffer_size(), DEFAULT_SRC_BUFFER_SIZE);
        assert_eq!(config.dst_buffer_size(), DEFAULT_DST_BUFFER_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = TransformConfig::default()
            .with_src_buffer_size(1)
            .with_dst_buffer_size(2);

        assert_eq!(config.src_buffer_size(), 1);
        assert_eq!(config.dst_buffer_size(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_zero_src() {
        let result = TransformConfig::new(0, 4096);
        assert!(matches!(result, Err(TransformError::InvalidConfig { .. })));
    }

    #[test]
    fn test_invalid_small_dst() {
        assert!(TransformConfig::new(4096, 0).is_err());
        assert!(TransformConfig::new(4096, 1).is_err());
        assert!(TransformConfig::new(4096, MIN_DST_BUFFER_SIZE).is_ok());
    }

    #[test]
    fn test_validate_after_builder() {
        let config = TransformConfig::default().with_dst_buffer_size(1);
        assert!(config.validate().is_err());
    }
}
