pub mod corner;
pub mod dimensions;
pub mod notch;
pub mod path;
pub mod rect;
pub mod shape;

pub use corner::{Corner, CornerStyle};
pub use dimensions::Dimensions;
pub use notch::{Notch, NotchStyle};
pub use path::PathCommand;
pub use rect::Rect;
pub use shape::CornerShape;
