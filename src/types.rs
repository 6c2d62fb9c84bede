// =============================================================================
// Shared types used across the Hurst estimator and its CLI
// =============================================================================

use serde::{Deserialize, Serialize};

/// Upper bound of the mean-reverting band.
const MEAN_REVERTING_BELOW: f64 = 0.45;

/// Lower bound of the persistent band.
const PERSISTENT_ABOVE: f64 = 0.55;

/// Informative reading of a Hurst exponent.
///
///   H < 0.45  =>  mean-reverting / anti-persistent
///   H ~ 0.50  =>  random walk
///   H > 0.55  =>  trending / persistent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HurstRegime {
    MeanReverting,
    RandomWalk,
    Persistent,
}

impl HurstRegime {
    pub fn classify(h: f64) -> Self {
        if h < MEAN_REVERTING_BELOW {
            Self::MeanReverting
        } else if h > PERSISTENT_ABOVE {
            Self::Persistent
        } else {
            Self::RandomWalk
        }
    }
}

impl std::fmt::Display for HurstRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeanReverting => write!(f, "mean-reverting"),
            Self::RandomWalk => write!(f, "random walk"),
            Self::Persistent => write!(f, "persistent"),
        }
    }
}

/// How the binary prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}
