use std::fmt;

/// Errors raised while loading or validating a drum kit.
///
/// Unknown notes at trigger time are deliberately NOT errors — the whole
/// trigger path degrades to a silent no-op. Only a malformed kit definition
/// is worth reporting, and only at the loading boundary.
#[derive(Debug)]
pub enum KitError {
    InvalidFrequency { note: String, value: f64 },
    InvalidDecay { note: String, value: f64 },
    Json(serde_json::Error),
}

impl fmt::Display for KitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KitError::InvalidFrequency { note, value } => {
                write!(f, "Pad '{note}' has non-positive frequency {value} Hz")
            }
            KitError::InvalidDecay { note, value } => {
                write!(f, "Pad '{note}' has non-positive decay {value} s")
            }
            KitError::Json(e) => write!(f, "Invalid kit JSON: {e}"),
        }
    }
}

impl std::error::Error for KitError {}

impl From<serde_json::Error> for KitError {
    fn from(e: serde_json::Error) -> Self {
        KitError::Json(e)
    }
}
