// Mon Oct 12 2026 - Alex

pub mod nibbles;
pub mod window;
pub mod input;
pub mod range;

pub use nibbles::NibbleView;
pub use window::{window_count, window_starts};
pub use input::{InputError, InputFile};
pub use range::{parse_offset, RangeError, SliceEnd};

use std::path::Path;

pub fn open_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<InputFile>, InputError> {
    paths.iter().map(InputFile::open).collect()
}
