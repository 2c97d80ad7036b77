//! LuaData marketing site.
//!
//! The browser build (`wasm32`) mounts a yew app; the host build runs a
//! small development server that serves the trunk output and stands in
//! for the hosted form backend. Everything outside `frontend` and
//! `backend` is plain Rust shared by both targets.

pub mod analytics;
pub mod contact;
pub mod content;
pub mod counter;
pub mod navigation;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod tabs;

#[cfg(not(target_arch = "wasm32"))]
pub mod backend;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
