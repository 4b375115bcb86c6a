/// Descriptor service: wire types, the HTTP client, and download handling.
///
/// The service computes molecular weight, LogP, donor/acceptor counts and
/// Rule-of-Five violations; this crate only sends SMILES and renders the
/// answer.

pub mod client;
pub mod download;
pub mod model;
