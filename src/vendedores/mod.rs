// src/vendedores/mod.rs

pub mod vendedor_structs;
pub mod vendedor_router;
