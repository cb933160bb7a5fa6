/// UI components for the sidebar widget

pub mod sidebar;
