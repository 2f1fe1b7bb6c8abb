pub mod clock;
pub mod format;
pub mod hijri;
pub mod quotes;
pub mod share;
