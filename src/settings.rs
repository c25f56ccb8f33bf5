//! Tunable parameters for sparse products, archives and random fill.
//!
//! Settings are constructed with the builder generated by
//! [`derive_builder`], which validates field values before returning:
//!
//! ```
//! use hypermatrix::settings::*;
//!
//! let settings = SettingsBuilder::<f64>::default()
//!     .prune_tolerance(1e-12)
//!     .pretty_archive(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.random_range, (-1., 1.));
//!
//! // negative tolerances are rejected
//! assert!(SettingsBuilder::<f64>::default()
//!     .prune_tolerance(-1.)
//!     .build()
//!     .is_err());
//! ```

use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field {0}")]
    BadFieldValue(&'static str),
}

/// Settings used by sparse products, persistence and random fill.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings<T: FloatT> {
    /// entries of a sparse-sparse product with magnitude at or below
    /// this value are not stored
    #[builder(default = "T::zero()")]
    pub prune_tolerance: T,

    /// write archives as indented JSON
    #[builder(default = "false")]
    pub pretty_archive: bool,

    /// closed interval sampled by `randomize_with`
    #[builder(default = "(-T::one(), T::one())")]
    pub random_range: (T, T),
}

impl<T> Default for Settings<T>
where
    T: FloatT,
{
    fn default() -> Settings<T> {
        SettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> Settings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_prune_tolerance(self.prune_tolerance)?;
        validate_random_range(self.random_range)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SettingsBuilder<T>
where
    T: FloatT,
{
    /// check the fields that have been explicitly set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.prune_tolerance {
            validate_prune_tolerance(tol)?;
        }
        if let Some(range) = self.random_range {
            validate_random_range(range)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_prune_tolerance<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if tol.is_finite() && tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("prune_tolerance"))
    }
}

fn validate_random_range<T: FloatT>(range: (T, T)) -> Result<(), SettingsError> {
    let (lo, hi) = range;
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("random_range"))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = Settings::<f64>::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.prune_tolerance, 0.);
    assert!(!settings.pretty_archive);

    // fail on a reversed range
    assert!(SettingsBuilder::<f64>::default()
        .random_range((1., -1.))
        .build()
        .is_err());

    // fail on a non-finite tolerance
    assert!(SettingsBuilder::<f32>::default()
        .prune_tolerance(f32::NAN)
        .build()
        .is_err());

    // direct field edits are caught by validate
    let mut settings = Settings::<f64>::default();
    settings.random_range = (0., 0.);
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("random_range"))
    );
}
