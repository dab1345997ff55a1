#[macro_use] extern crate shrinkwraprs;
#[macro_use] extern crate log;

pub mod appearance;
pub mod components;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod orbit;
pub mod resources;
pub mod systems;
pub mod tools;
