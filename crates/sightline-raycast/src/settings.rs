//! Serializable raycaster configuration.

use serde::{Deserialize, Serialize};

use crate::{RaycastError, Result};

/// Default epsilon below which a ray counts as parallel to a face plane.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Distance window and precision of a [`Raycaster`](crate::Raycaster).
///
/// Missing fields take their defaults, so `{}` is a valid settings
/// document. An unbounded `far` is left out when serializing, since JSON
/// has no infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastSettings {
    /// Hits closer than this are dropped. Default `0`.
    pub near: f64,
    /// Hits farther than this are dropped. Default `+inf`.
    #[serde(skip_serializing_if = "is_unbounded")]
    pub far: f64,
    /// Plane-distance epsilon. Default [`DEFAULT_PRECISION`].
    pub precision: f64,
}

fn is_unbounded(far: &f64) -> bool {
    far.is_infinite() && far.is_sign_positive()
}

impl Default for RaycastSettings {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: f64::INFINITY,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl RaycastSettings {
    /// Check the window and precision for values no query can use.
    pub fn validate(&self) -> Result<()> {
        if self.near.is_nan() || self.far.is_nan() || self.precision.is_nan() {
            return Err(RaycastError::InvalidSettings("values must not be NaN".into()));
        }
        if self.near < 0.0 {
            return Err(RaycastError::InvalidSettings(format!(
                "near must be non-negative, got {}",
                self.near
            )));
        }
        if self.far < self.near {
            return Err(RaycastError::InvalidSettings(format!(
                "far ({}) is less than near ({})",
                self.far, self.near
            )));
        }
        if self.precision <= 0.0 {
            return Err(RaycastError::InvalidSettings(format!(
                "precision must be positive, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RaycastSettings::default();
        assert_eq!(settings.near, 0.0);
        assert_eq!(settings.far, f64::INFINITY);
        assert_eq!(settings.precision, 1e-4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings: RaycastSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, RaycastSettings::default());

        let settings: RaycastSettings = serde_json::from_str(r#"{"far": 25.0}"#).unwrap();
        assert_eq!(settings.far, 25.0);
        assert_eq!(settings.precision, DEFAULT_PRECISION);
    }

    #[test]
    fn test_unbounded_far_is_omitted() {
        let json = serde_json::to_string(&RaycastSettings::default()).unwrap();
        assert!(!json.contains("far"));
        let back: RaycastSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RaycastSettings::default());

        let bounded = RaycastSettings {
            far: 10.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&bounded).unwrap();
        assert!(json.contains("\"far\":10.0"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            RaycastSettings {
                near: -1.0,
                ..Default::default()
            },
            RaycastSettings {
                near: 5.0,
                far: 2.0,
                ..Default::default()
            },
            RaycastSettings {
                far: f64::NAN,
                ..Default::default()
            },
            RaycastSettings {
                precision: 0.0,
                ..Default::default()
            },
        ];
        for settings in bad {
            assert!(
                matches!(settings.validate(), Err(RaycastError::InvalidSettings(_))),
                "{settings:?} should be rejected"
            );
        }
    }
}
