//! Codec configuration.

/// Byte layout of encoded output. All styles decode to the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// No whitespace, keys in stored order.
    #[default]
    Compact,
    /// Two-space indentation, keys in stored order.
    Pretty,
    /// No whitespace, keys sorted at every depth.
    Stable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub output: OutputStyle,
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, output: OutputStyle) -> Self {
        self.output = output;
        self
    }
}
