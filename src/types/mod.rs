pub mod filters;
pub mod vehicle;

// Re-export the main types commonly used
pub use filters::FilterCriteria;
pub use vehicle::VehicleRecord;
