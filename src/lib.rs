// SPDX-License-Identifier: MPL-2.0
//! NeuroLens: a desktop client for MRI-based Alzheimer's stage classification.
//!
//! The crate is split into a pure core and a UI shell. `workflow` owns the
//! submission state machine, `api` talks to the remote CNN service, `domain`
//! holds the classification vocabulary, and `app`/`ui` render everything
//! with Iced.

pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod workflow;
