pub mod config;
pub mod domain;
pub mod engine;
pub mod similarity;

pub use config::{Config, ReferenceCompany};
pub use domain::{parse, ParsedDomain};
pub use engine::{FraudEngine, FraudVerdict};
