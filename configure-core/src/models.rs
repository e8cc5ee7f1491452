//! Objects (geometry, proposals, windows) the negotiation works with.
mod configuration;
mod configuration_state;
mod gravity;
mod move_resize_flags;
mod rect;
mod resolved_geometry;
mod surface;
mod window;

pub use configuration::{Configuration, ConfigurationPosition};
pub use configuration_state::{ConfigurationState, Transition};
pub use gravity::Gravity;
pub use move_resize_flags::MoveResizeFlags;
pub use rect::{Rect, Size};
pub use resolved_geometry::ResolvedGeometry;
pub use surface::{ConfigureTarget, Surface, SurfaceWindow};
pub use window::{Handle, MockHandle, WindowHandle};
