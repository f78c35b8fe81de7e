// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural sign-language animation engine for humanoid avatars.
//!
//! Handsign converts arbitrary input text into a time-ordered queue of
//! incremental skeletal-joint transforms and drives that queue forward
//! one rendered frame at a time: a small cooperative scheduler with a
//! pause/resume state machine, clamped numeric integration, and
//! lifecycle coupling to an asynchronously loaded rig and a resizable
//! viewport.
//!
//! # Key entry points
//!
//! - [`engine::SignEngine`] - per-viewport engine and playback controller
//! - [`playback`] - the instruction compiler and per-frame scheduler
//! - [`dictionary`] - the sign-definition provider contract
//! - [`options::Options`] - persisted settings (speed, pause, camera,
//!   avatar)
//!
//! # Architecture
//!
//! The host calls [`engine::SignEngine::frame`] once per display refresh.
//! Each frame polls the background rig-loader thread, advances at most
//! one scheduler step against the live avatar, and renders the scene
//! unconditionally. Rig loading runs on a named worker thread delivering
//! generation-tagged results over a channel; everything else is
//! single-threaded and cooperative.

pub mod asset;
pub mod camera;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod options;
pub mod playback;
pub mod render;
pub mod runner;
pub mod scene;
pub mod util;

pub use error::HandsignError;
