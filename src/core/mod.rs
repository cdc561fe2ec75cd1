// Core modules implementing encoding, file output, and error modeling.
pub mod error;
pub mod output;
pub mod writer;
