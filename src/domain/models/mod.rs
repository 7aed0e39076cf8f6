pub mod participant;
pub mod restaurant;
pub mod session;
pub mod vote;
