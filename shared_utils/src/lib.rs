//! Small helpers shared by the provider and narrative clients.

pub mod env;
