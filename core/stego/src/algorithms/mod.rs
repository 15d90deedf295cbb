//! The four embedding/extraction schemes (C4–C7).

pub mod dsss;
pub mod echo;
pub mod lsb;
pub mod phase;
