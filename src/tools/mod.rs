pub mod alerts;
pub mod registry;
