/// HTTP module contains the `reqwest` implementation of the core
/// client trait, talking to a real execution service.
pub mod client;
