use std::io::{self, BufWriter, Write};
use std::process;

use vocabulario::logging;
use vocabulario::{Config, VocabularyBuilder};

fn main() {
    if let Err(e) = logging::setup_logging() {
        eprintln!("Advertencia: No se pudo inicializar el registro: {}", e);
    }

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let builder = match VocabularyBuilder::new(&config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if let Err(e) = builder.write_list(&mut writer) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
    if let Err(e) = writer.flush() {
        eprintln!("Error escribiendo: {}", e);
        process::exit(1);
    }
}
