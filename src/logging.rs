//! Configuración del registro de diagnóstico
//!
//! La salida estándar transporta la lista de palabras, así que el
//! registro se envía siempre a stderr.

use log::LevelFilter;

pub fn setup_logging() -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%d-%m-%Y][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()
}
