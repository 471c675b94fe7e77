//! Community and marketplace backend: articles and products with comments,
//! comment likes, de-duplicated view counting and accounts with follows.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
