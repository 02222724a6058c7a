pub mod email;
pub mod invoke;
pub mod serve;
