// Internal types - never serialized to the wire
pub mod item;
