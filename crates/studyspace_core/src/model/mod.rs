//! Domain model for the studyspace document.
//!
//! # Responsibility
//! - Define the persisted root document and every entity nested in it.
//! - Own the canonical seed data installed on first run and by the
//!   structural migrations.
//!
//! # Invariants
//! - Wire field names match the historically persisted document exactly,
//!   so blobs written by earlier releases keep loading unchanged.
//! - `PrayerId`, `SportId` and `AchievementId` are closed sets; the
//!   reconciled document contains exactly the canonical members.

pub mod document;
pub mod seed;
