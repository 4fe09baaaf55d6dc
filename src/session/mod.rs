/// Frame loop driving curve sampling, drawing, compositing and sink hand-off.
pub mod render_session;
