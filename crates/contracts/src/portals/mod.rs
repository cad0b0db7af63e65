//! Subject resolution and cross filtering for the technician and customer portals.

pub mod customer;
pub mod technician;
