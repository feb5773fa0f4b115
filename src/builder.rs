//! Motor principal de construcción del vocabulario

use std::io::Write;

use crate::config::Config;
use crate::wordlist::{WordList, WordListLoader};

/// Construye la lista combinada de vocabulario a partir de los dos
/// listados de entrada.
pub struct VocabularyBuilder {
    words: WordList,
}

impl VocabularyBuilder {
    /// Crea el constructor cargando ambos listados
    ///
    /// Si alguno de los archivos no puede abrirse, la construcción falla
    /// y no se produce salida parcial.
    pub fn new(config: &Config) -> Result<Self, String> {
        let mut words = WordList::new();

        WordListLoader::load_nouns(&mut words, &config.nouns_file).map_err(|e| {
            format!("Error cargando '{}': {}", config.nouns_file.display(), e)
        })?;
        log::info!(
            "Cargadas {} palabras de '{}'",
            words.len(),
            config.nouns_file.display()
        );

        WordListLoader::load_verbs(&mut words, &config.verbs_file).map_err(|e| {
            format!("Error cargando '{}': {}", config.verbs_file.display(), e)
        })?;
        log::info!("Lista combinada: {} palabras distintas", words.len());

        Ok(Self { words })
    }

    /// Lista combinada y deduplicada
    pub fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Escribe la lista ordenada: una línea `palabra valor` por entrada
    pub fn write_list<W: Write>(&self, writer: &mut W) -> Result<(), String> {
        for (word, value) in self.words.iter() {
            writeln!(writer, "{} {}", word, value)
                .map_err(|e| format!("Error escribiendo: {}", e))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_config(dir: &Path, nouns: &str, verbs: &str) -> Config {
        let nouns_file = dir.join("top-500-words");
        let verbs_file = dir.join("top-100-verbs-with-conjugation");
        fs::write(&nouns_file, nouns).unwrap();
        fs::write(&verbs_file, verbs).unwrap();
        Config {
            nouns_file,
            verbs_file,
            show_help: false,
        }
    }

    #[test]
    fn test_merges_both_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path(), "house\ncar\n", "eat eating\n");

        let builder = VocabularyBuilder::new(&config).unwrap();
        let words = builder.word_list();

        assert_eq!(words.len(), 4);
        assert!(words.contains("house"));
        assert!(words.contains("eating"));
    }

    #[test]
    fn test_dedup_across_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path(), "run\n", "run running ran run\n");

        let builder = VocabularyBuilder::new(&config).unwrap();

        // "run" aparece en ambos archivos y duplicado en la línea de verbos
        assert_eq!(builder.word_list().len(), 3);
    }

    #[test]
    fn test_missing_nouns_file_fails() {
        let dir = TempDir::new().unwrap();
        let verbs_file = dir.path().join("top-100-verbs-with-conjugation");
        fs::write(&verbs_file, "eat\n").unwrap();
        let config = Config {
            nouns_file: dir.path().join("no-existe"),
            verbs_file,
            show_help: false,
        };

        assert!(VocabularyBuilder::new(&config).is_err());
    }

    #[test]
    fn test_missing_verbs_file_fails() {
        let dir = TempDir::new().unwrap();
        let nouns_file = dir.path().join("top-500-words");
        fs::write(&nouns_file, "house\n").unwrap();
        let config = Config {
            nouns_file,
            verbs_file: dir.path().join("no-existe"),
            show_help: false,
        };

        assert!(VocabularyBuilder::new(&config).is_err());
    }

    #[test]
    fn test_write_list_format() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path(), "house\ncar\n", "");

        let builder = VocabularyBuilder::new(&config).unwrap();
        let mut out = Vec::new();
        builder.write_list(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "car 0\nhouse 0\n");
    }
}
