pub mod constants;
pub mod coords;
pub mod drag;
pub mod editor;
pub mod error;
pub mod handle;
pub mod legend;
pub mod notify;
pub mod preview;
pub mod shape;
pub mod surface;
pub mod uv;

pub use constants::*;
pub use coords::*;
pub use drag::*;
pub use editor::*;
pub use error::*;
pub use handle::*;
pub use legend::*;
pub use notify::*;
pub use preview::*;
pub use shape::*;
pub use surface::*;
pub use uv::*;
