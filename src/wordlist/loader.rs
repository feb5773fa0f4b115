//! Cargador de listas de palabras desde archivos

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::list::WordList;

pub struct WordListLoader;

impl WordListLoader {
    /// Carga el listado de sustantivos y preposiciones (una palabra por línea)
    ///
    /// Cada línea se recorta de espacios en blanco y se inserta tal cual,
    /// incluida la entrada de cadena vacía que produce una línea en blanco.
    pub fn load_nouns<P: AsRef<Path>>(list: &mut WordList, path: P) -> Result<usize, String> {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("No se pudo abrir el archivo: {}", e))?;

        let reader = BufReader::new(file);
        let mut count = 0;

        for line_result in reader.lines() {
            let line = line_result.map_err(|e| format!("Error leyendo: {}", e))?;
            list.insert(line.trim());
            count += 1;
        }

        Ok(count)
    }

    /// Carga el listado de verbos con sus conjugaciones
    ///
    /// Formato esperado: infinitivo y formas conjugadas separadas por
    /// espacios en una misma línea. Las líneas que comienzan con '#' son
    /// comentarios. Una línea ilegible se descarta en silencio y se
    /// continúa con la siguiente.
    pub fn load_verbs<P: AsRef<Path>>(list: &mut WordList, path: P) -> Result<usize, String> {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("No se pudo abrir el archivo: {}", e))?;

        let reader = BufReader::new(file);
        let mut count = 0;

        for line_result in reader.lines() {
            let line = match line_result {
                Ok(line) => line,
                Err(e) => {
                    log::debug!("Línea descartada en el listado de verbos: {}", e);
                    continue;
                }
            };

            // El comentario se detecta sobre la línea sin recortar
            if line.starts_with('#') {
                continue;
            }

            let mut inserted = false;
            for word in line.split_whitespace() {
                list.insert(word);
                inserted = true;
            }
            if inserted {
                count += 1;
            }
        }

        Ok(count)
    }
}
