//! Encoder construction options.

use crate::encoder::Encoder;
use crate::error::Result;

/// Builder for configuring an [`Encoder`].
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    initial_capacity: usize,
    max_len: Option<usize>,
}

impl EncoderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes reserved up front.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Caps the total encoded length. Operations that would grow the output
    /// past the limit fail with [`EncodeError::LimitExceeded`](crate::EncodeError::LimitExceeded).
    pub fn max_len(mut self, limit: usize) -> Self {
        self.max_len = Some(limit);
        self
    }

    /// Builds the encoder, reserving the initial capacity.
    pub fn build(self) -> Result<Encoder> {
        let capacity = match self.max_len {
            Some(limit) => self.initial_capacity.min(limit),
            None => self.initial_capacity,
        };
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)?;
        Ok(Encoder::from_parts(buf, self.max_len))
    }
}
