//! Search problems.
//!
//! Road maps place named cities on a plane and join them with roads, so they
//! can be searched with any of the [`crate::algorithms`].

pub mod roadmap;
