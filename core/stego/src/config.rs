//! Encode-time configuration. No global or GUI-owned state: every call site
//! passes an explicit [`EncodeConfig`].

/// Selects which embedding scheme an encode call uses. The variant carries
/// whatever parameters that scheme allows the caller to tune; Phase and DSSS
/// have none, since their parameters are fixed constants of the wire format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Algorithm {
    /// Least-significant-bit embedding.
    Lsb,
    /// Echo-hiding via additive delayed copies.
    Echo {
        /// Samples per embedded bit.
        chunk_size: u16,
        /// Echo delay, in samples, used for bit `0`.
        delay_0: u16,
        /// Echo delay, in samples, used for bit `1`.
        delay_1: u16,
        /// Echo gain, expected in `[0.1, 1.0]`.
        alpha: f32,
    },
    /// Phase coding of fixed-size FFT segments.
    Phase,
    /// Direct-sequence spread spectrum.
    Dsss,
}

impl Algorithm {
    /// The wire `algo_id` for this variant.
    pub fn id(self) -> u8 {
        match self {
            Algorithm::Lsb => 1,
            Algorithm::Echo { .. } => 2,
            Algorithm::Phase => 3,
            Algorithm::Dsss => 4,
        }
    }

    /// A short name for diagnostics and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Lsb => "LSB",
            Algorithm::Echo { .. } => "Echo",
            Algorithm::Phase => "Phase",
            Algorithm::Dsss => "DSSS",
        }
    }
}

impl Default for Algorithm {
    /// Defaults to Echo with the spec's reference parameters
    /// (`chunk_size=2048, delay_0=50, delay_1=200, alpha=0.5`).
    fn default() -> Self {
        Algorithm::Echo {
            chunk_size: 2048,
            delay_0: 50,
            delay_1: 200,
            alpha: 0.5,
        }
    }
}

/// Encode-time configuration passed to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodeConfig {
    /// Which embedding scheme to use.
    pub algorithm: Algorithm,
}

impl EncodeConfig {
    /// Shorthand for LSB encoding.
    pub fn lsb() -> Self {
        EncodeConfig {
            algorithm: Algorithm::Lsb,
        }
    }

    /// Shorthand for Phase encoding.
    pub fn phase() -> Self {
        EncodeConfig {
            algorithm: Algorithm::Phase,
        }
    }

    /// Shorthand for DSSS encoding.
    pub fn dsss() -> Self {
        EncodeConfig {
            algorithm: Algorithm::Dsss,
        }
    }

    /// Shorthand for Echo encoding with the spec's reference parameters.
    pub fn echo_default() -> Self {
        EncodeConfig {
            algorithm: Algorithm::default(),
        }
    }
}
