pub mod feedback;

pub use feedback::render_panel;
