pub mod assemble;
pub mod check;
pub mod show;
