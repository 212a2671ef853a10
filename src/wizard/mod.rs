//! Wizard core — step sequencing, navigation gating, error presentation.

pub mod controller;
pub mod error_channel;
pub mod step;

pub use controller::WizardController;
pub use error_channel::ErrorState;
pub use step::WizardStep;
