/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the [targets] below.

No logger is installed by the library itself.
The binaries install a [log4rs] console logger writing to stderr through [init], when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [search loop](crate::procedures::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [encoding](crate::procedures::encode)
    pub const ENCODER: &str = "encoder";

    /// Logs related to [solving](crate::procedures::solve)
    pub const SOLVER: &str = "solver";

    /// Logs related to reading a [graph](crate::io::dimacs)
    pub const GRAPH: &str = "graph";

    /// Logs related to [formula and solution files](crate::io::artifacts)
    pub const ARTIFACTS: &str = "artifacts";
}

/// Maps a count of `-v` flags (or `-q`) to a level filter.
pub fn level_from_verbosity(verbose: u8, quiet: bool) -> log::LevelFilter {
    if quiet {
        return log::LevelFilter::Off;
    }
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Installs a stderr logger at the given level.
#[cfg(feature = "log")]
pub fn init(level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("c {l:<5} [{t}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

/// Without the `log` feature there is no logger to install.
#[cfg(not(feature = "log"))]
pub fn init(_level: log::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}
