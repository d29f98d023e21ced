// Library root. The binary in `main.rs` is a thin clap front end over
// these modules; keeping them in a lib target lets the integration
// tests under `tests/` drive the same code paths the commands use.

// `core` holds the scanning pipeline: reader -> scanner -> registry.
pub mod core;

// `builders` consumes the registry: extraction, inventory export, and
// the console listing report.
pub mod builders;

// `utils` is the command glue shared by `main.rs`: input validation and
// the per-command orchestration.
pub mod utils;

#[cfg(test)]
mod tests;
