// Utility functions
// Helper functions for common operations

pub mod dom;
pub mod forecast;
pub mod markup;
pub mod text;
pub mod time;
