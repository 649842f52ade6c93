//! Binary pixel grids consumed by the line scanner.
//!
//! The scanner only needs [`BinaryGrid`]: dimensions plus a foreground test.
//! Several sources are provided:
//!
//! - [`Bitmap`]: owned row-major mask, handy for synthetic input.
//! - `[T]` / `Vec<T>` with `T: AsRef<[bool]>`: nested rows, width taken from
//!   the first row.
//! - [`PixelGrid`]: decoded RGB pixels classified on the fly by a
//!   [`ForegroundRule`](crate::pixel::ForegroundRule).
pub mod bitmap;
pub mod io;
pub mod pixels;
pub mod traits;

pub use self::bitmap::Bitmap;
pub use self::pixels::PixelGrid;
pub use self::traits::BinaryGrid;
