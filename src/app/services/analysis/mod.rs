//! Statistical analysis of cleaned observation tables
//!
//! Two thin adapters over external numeric primitives:
//! - [`trend`] - linear sea-level-rise estimation over an ordinary
//!   least-squares primitive ([`stats`])
//! - [`harmonics`] - tidal constituent amplitude/phase estimation over an
//!   SVD least-squares solve
//!
//! Both adapters are responsible only for missing-value filtering and
//! time-basis conversion; the numeric solves live behind their own
//! contracts.

pub mod harmonics;
pub mod stats;
pub mod trend;

pub use harmonics::tidal_harmonics;
pub use stats::{Regression, linear_regression};
pub use trend::sea_level_trend;
