pub mod uli;
