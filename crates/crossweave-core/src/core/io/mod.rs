//! Input/output at the edges of the engine: loading word pools and converting
//! finished layouts to and from their stored record form.

pub mod pool;
pub mod record;
pub mod traits;
