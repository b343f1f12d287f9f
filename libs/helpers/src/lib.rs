pub mod check;
pub mod streams;
