/// Subdivision engine and the top-level generation loop
pub mod executor;
/// Break-point, orientation and area-weighted rectangle selection
pub mod selection;
/// Canvas initialization and split operations
pub mod split;

pub use executor::{Subdivision, generate, generate_with, replay};
pub use selection::Orientation;
pub use split::{SplitRecord, initialize, split_horizontally, split_vertically};
