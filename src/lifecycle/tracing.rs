//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Logs go to stderr so the CLI's stdout stays machine-readable.
//!
//! ```bash
//! # Store load/save failures only (default)
//! inventory list
//!
//! # Every request, with structured fields
//! RUST_LOG=info inventory adjust A1 -3
//!
//! # Full payloads and defaulted numeric fields
//! RUST_LOG=debug inventory add A1 Tools Widget abc 12,50
//! ```
//!
//! With `RUST_LOG=info` a quantity change reads:
//!
//! ```text
//! INFO Loaded inventory path="Inventarioproductos.csv" size=3
//! INFO Actor started path="Inventarioproductos.csv" size=3
//! INFO adjust_quantity: Quantity adjusted code=A1 delta=-3 quantity=7
//! INFO adjust_quantity: Modify succeeded code=A1
//! INFO Shutdown size=3 persisted=true
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
