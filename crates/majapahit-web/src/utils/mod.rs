/// Utility functions for the sidebar widget

pub mod paths;
