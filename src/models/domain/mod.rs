pub mod mcq;
pub use mcq::{Mcq, McqOptions};
