pub mod codes;
pub mod naming;
pub mod progression;
pub mod results;
