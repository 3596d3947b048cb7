// Copyright 2026 the Tickdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording draw surface and texture table for tickdraw.
//!
//! This crate provides a headless stand-in for a host renderer. It defines:
//!
//! - [`DrawCommand`]: a single recorded line or image draw
//! - [`DrawList`]: an ordered list of draw commands for one tick, which
//!   implements [`DrawSurface`](tickdraw_core::draw::DrawSurface)
//! - [`TextureTable`]: hands out texture ids for uploaded frames, which
//!   implements [`TextureUploader`](tickdraw_core::texture::TextureUploader)

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod list;
mod textures;

pub use list::{DrawCommand, DrawList};
pub use textures::TextureTable;
