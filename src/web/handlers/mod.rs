// API route handlers, one module per resource.

pub mod analyses;
pub mod analyze;
pub mod status;
