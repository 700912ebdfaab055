// Domain layer - Transient data deserialized from the backend, plus pure chart builders
pub mod certificate;
pub mod chart;
pub mod course;
pub mod statistics;
