//! ArchViz Estimator Library
//!
//! Core of the interactive price estimator for architectural 3D visualization:
//! the selection store, the pricing engine, the step navigator and the TUI on top.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod money;
pub mod navigator;
pub mod receipt;
pub mod selections_file;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use config::Settings;
pub use controls::Control;
pub use engine::pricing::{price, LineItem, LineKey, PriceBreakdown, PriceCategory};
pub use error::EstimatorError;
pub use money::Money;
pub use navigator::{
    observe_scroll, Connector, Progress, ScrollAnimation, ScrollUpdate, SectionBand,
    SectionGeometry, StepNavigator, StepState, StepStatus, TrackBand, VisibilityObserver,
};
pub use receipt::Receipt;
pub use store::{SelectionState, SelectionStore};
pub use types::{
    Answer, DetailTier, DocumentationType, FileFormat, HeroAnimation, InvestmentType, Section,
};
