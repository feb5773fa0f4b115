//! Vocabulario - Biblioteca para construir listas de vocabulario
//!
//! Combina un listado de sustantivos y preposiciones frecuentes con un
//! listado de verbos conjugados en una lista única, deduplicada y ordenada.

pub mod builder;
pub mod config;
pub mod logging;
pub mod wordlist;

pub use builder::VocabularyBuilder;
pub use config::Config;
