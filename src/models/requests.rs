use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::{FrameButton, MAX_SCORE},
    error::AppError,
};

/// Score submitted by the clicker page when a round ends
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitScoreRequest {
    /// Raw JSON value; validated by [`SubmitScoreRequest::validate_score`]
    #[serde(default)]
    pub score: Value,
}

impl SubmitScoreRequest {
    /// Validate a submitted score
    ///
    /// # Arguments
    ///
    /// * `score` - Raw JSON value from the request body
    ///
    /// # Returns
    ///
    /// The score as an integer if valid, `AppError::InvalidScore` otherwise
    ///
    /// # Validation Rules
    ///
    /// - Must be a JSON number (strings, booleans and null are rejected)
    /// - Must be a whole number (`12.0` is accepted, `12.5` is not)
    /// - Range: 0-1000 inclusive
    pub fn validate_score(score: &Value) -> Result<u32, AppError> {
        let number = match score {
            Value::Number(number) => number,
            _ => return Err(AppError::InvalidScore),
        };

        let whole = if let Some(n) = number.as_u64() {
            n
        } else {
            match number.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(MAX_SCORE) => f as u64,
                _ => return Err(AppError::InvalidScore),
            }
        };

        if whole > u64::from(MAX_SCORE) {
            return Err(AppError::InvalidScore);
        }

        u32::try_from(whole).map_err(|_| AppError::InvalidScore)
    }

    /// Validated score of this request
    pub fn validated_score(&self) -> Result<u32, AppError> {
        Self::validate_score(&self.score)
    }
}

/// Frame action posted by a Farcaster client when a button is pressed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameActionRequest {
    pub untrusted_data: Option<UntrustedData>,
    /// Signed message from the hub; required but not verified
    pub trusted_data: Option<Value>,
}

/// Client-reported part of a frame action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    pub button_index: Option<i64>,
    /// Only logged, so any JSON shape is accepted here
    pub fid: Option<Value>,
}

impl UntrustedData {
    /// Numeric fid, also read from a decimal string; anything else is dropped
    pub fn parsed_fid(&self) -> Option<u64> {
        match self.fid.as_ref()? {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}

/// A frame action that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInteraction {
    pub button: FrameButton,
    pub fid: Option<u64>,
}

impl FrameActionRequest {
    /// Check that both data blocks are present and the button is known
    ///
    /// # Errors
    ///
    /// - `AppError::InvalidFrameMessage` if either data block is missing
    /// - `AppError::UnknownButton` if `buttonIndex` is absent or not 1-3
    pub fn validate(&self) -> Result<FrameInteraction, AppError> {
        let untrusted = self
            .untrusted_data
            .as_ref()
            .ok_or(AppError::InvalidFrameMessage)?;
        if self.trusted_data.is_none() {
            return Err(AppError::InvalidFrameMessage);
        }

        let index = untrusted.button_index.ok_or(AppError::UnknownButton(None))?;
        let button =
            FrameButton::try_from(index).map_err(|other| AppError::UnknownButton(Some(other)))?;

        Ok(FrameInteraction {
            button,
            fid: untrusted.parsed_fid(),
        })
    }
}
