//! Color tokens and fill-color derivation.
//!
//! Series are configured with a single line color. The paired fill tone is
//! derived once at construction: `#RRGGBB` becomes `rgba(R,G,B,0.1)` and any
//! token that is not a well-formed six-digit hex color falls back to
//! translucent black.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Alpha applied to every derived fill color.
pub const FILL_ALPHA: f64 = 0.1;

/// Fill token returned for any line color that cannot be parsed as `#RRGGBB`.
pub const FALLBACK_FILL_COLOR: &str = "rgba(0,0,0,0.1)";

/// Parsed color token with 8-bit channels and a unit-interval alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f64,
}

impl ColorToken {
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses a strict `#RRGGBB` token.
    pub fn from_hex(token: &str) -> ChartResult<Self> {
        let digits = token.strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidColorFormat(format!("missing `#` prefix: {token:?}"))
        })?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColorFormat(format!(
                "expected six hex digits after `#`: {token:?}"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|err| {
                ChartError::InvalidColorFormat(format!("bad hex channel in {token:?}: {err}"))
            })
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parses `#RRGGBB`, `rgb(r,g,b)` or `rgba(r,g,b,a)` tokens.
    pub fn parse(token: &str) -> ChartResult<Self> {
        let token = token.trim();
        if token.starts_with('#') {
            return Self::from_hex(token);
        }

        let (body, expects_alpha) = if let Some(rest) = token.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = token.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(ChartError::InvalidColorFormat(format!(
                "unsupported color token: {token:?}"
            )));
        };
        let body = body.strip_suffix(')').ok_or_else(|| {
            ChartError::InvalidColorFormat(format!("unterminated color token: {token:?}"))
        })?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(ChartError::InvalidColorFormat(format!(
                "expected {expected} components in {token:?}"
            )));
        }

        let channel = |part: &str| {
            part.parse::<u8>().map_err(|err| {
                ChartError::InvalidColorFormat(format!("bad channel `{part}` in {token:?}: {err}"))
            })
        };
        let alpha = if expects_alpha {
            let alpha = parts[3].parse::<f64>().map_err(|err| {
                ChartError::InvalidColorFormat(format!("bad alpha in {token:?}: {err}"))
            })?;
            if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
                return Err(ChartError::InvalidColorFormat(format!(
                    "alpha must be in [0, 1]: {token:?}"
                )));
            }
            alpha
        } else {
            1.0
        };

        Ok(Self::rgba(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Formats as an explicit-channel `rgba(r,g,b,a)` token without spaces.
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

/// Derives the translucent fill token paired with a series line color.
///
/// Never fails: anything other than a strict `#RRGGBB` token (including
/// prefixed tokens with non-hex digits such as `#zzzzzz`) yields
/// [`FALLBACK_FILL_COLOR`].
#[must_use]
pub fn derive_fill_color(line_color: &str) -> String {
    match ColorToken::from_hex(line_color) {
        Ok(color) => color.with_alpha(FILL_ALPHA).to_rgba_string(),
        Err(err) => {
            debug!(error = %err, "falling back to default fill color");
            FALLBACK_FILL_COLOR.to_owned()
        }
    }
}
