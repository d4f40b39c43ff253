pub mod ocr;
pub mod traits;

pub mod prelude {
    pub use super::ocr::prelude::*;
    pub use super::traits::Parser;
}
