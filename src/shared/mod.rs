// src/shared/mod.rs

// Estruturas compartilhadas entre os módulos (respostas da API)
pub mod shared_structs;
