pub mod explore;
pub mod suggest;
