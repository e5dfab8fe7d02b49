// handlers/mod.rs - HTTP handler modules, one directory per resource.
pub mod products;
