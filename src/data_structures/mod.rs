//! Hand-built data structures for the Malama Triage simulation.
//!
//! The linked containers are constructed from first principles on top
//! of the shared [`node::Node`] link cell; no standard-library
//! collection stands in for the queue, the stack or the hash map's
//! chains. The implementations keep the costs explicit: linked
//! operations are pointer updates, the ring never reallocates, and the
//! map's growth is a visible, all-at-once relink.

pub mod apo_ring;
pub mod koa_stack;
pub mod nalu_queue;
pub mod node;
pub mod ohana_hash_map;

// Re-export common data structures
pub use apo_ring::ApoRing;
pub use koa_stack::KoaStack;
pub use nalu_queue::NaluQueue;
pub use ohana_hash_map::OhanaHashMap;
