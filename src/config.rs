//! Configuración y argumentos CLI

use std::path::PathBuf;

/// Archivo de sustantivos y preposiciones frecuentes
pub const NOUNS_FILE: &str = "top-500-words";
/// Archivo de verbos frecuentes con sus conjugaciones
pub const VERBS_FILE: &str = "top-100-verbs-with-conjugation";

#[derive(Debug, Clone)]
pub struct Config {
    /// Listado de sustantivos y preposiciones (una palabra por línea)
    pub nouns_file: PathBuf,
    /// Listado de verbos con conjugaciones (una familia por línea)
    pub verbs_file: PathBuf,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nouns_file: PathBuf::from(NOUNS_FILE),
            verbs_file: PathBuf::from(VERBS_FILE),
            show_help: false,
        }
    }
}

impl Config {
    /// La herramienta no admite opciones de configuración: los dos
    /// archivos de entrada se leen siempre del directorio actual.
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Saltar nombre del programa

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                _ => {
                    return Err(format!("Opción desconocida: {}", arg));
                }
            }
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"Vocabulario - Generador de listas de vocabulario

USO:
    vocabulario [OPCIONES]

Lee 'top-500-words' y 'top-100-verbs-with-conjugation' del directorio
actual y escribe en la salida estándar una línea `palabra 0` por cada
palabra distinta, en orden ascendente.

OPCIONES:
    -h, --help    Muestra esta ayuda"#
        );
    }
}
