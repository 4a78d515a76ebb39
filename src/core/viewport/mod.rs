pub mod limits;
pub mod view_state;
#[allow(clippy::module_inception)]
pub mod viewport;

pub use limits::ViewportLimits;
pub use view_state::ViewState;
pub use viewport::Viewport;
