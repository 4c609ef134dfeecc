//! An assortment of fixed capacity containers.
//!
//! All of these containers keep their elements inline in an array whose length is part of the
//! type. Once constructed they never allocate, operations that would need more room than available
//! fail instead. Elements are `Copy` so that storage can be initialized upfront and freed slots
//! need no drop handling.
mod partial;
pub mod slotmap;

pub use self::partial::Partial;
pub use self::slotmap::{Key, SlotMap};
