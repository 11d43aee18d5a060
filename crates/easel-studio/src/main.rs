mod sketches;

use easel::Sketch;
use easel_engine::logging::{init_logging, LoggingConfig};

fn main() {
    init_logging(LoggingConfig::default());

    let name = std::env::args().nth(1).unwrap_or_else(|| "clock".to_string());
    let Some(script) = sketches::by_name(&name) else {
        log::error!("unknown sketch {name:?} (expected clock or dot)");
        std::process::exit(2);
    };

    log::info!("showing sketch {name:?}");

    if let Err(e) = Sketch::new(name).script(script).run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
