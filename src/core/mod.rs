pub mod calculator;
pub mod config;
pub mod filter;
pub mod form;
pub mod list;
