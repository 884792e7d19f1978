//! User interface module - terminal output for the bump workflow.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction,
    display_proposed_tag, display_status, display_success,
};
