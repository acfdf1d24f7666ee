pub mod locking;
pub mod memory;
