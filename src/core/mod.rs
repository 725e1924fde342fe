//! Core data types of the result model.
//!
//! Each submodule holds one cohesive sub-record with its own query surface.
//! [`model::ResultModel`] composes them into the per-file aggregate.

pub mod certificate;
pub mod digests;
pub mod dotnet;
pub mod dynamic;
pub mod exports;
pub mod flags;
pub mod header;
pub mod identity;
pub mod imports;
pub mod layout;
pub mod loader;
pub mod model;
pub mod notes;
pub mod numeric;
pub mod pattern;
pub mod pdb;
pub mod relocations;
pub mod resources;
pub mod rich_header;
pub mod status;
pub mod strings;
pub mod symbols;
pub mod tls;
pub mod tools;
pub mod visual_basic;
