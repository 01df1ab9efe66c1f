use std::io::Write;

use env_logger::{Builder, Target, fmt::Formatter};
use log::Level;

use crate::Result;
use crate::cli::{LogFormat, LogOptions};

pub fn init_logger(options: &LogOptions) -> Result<()> {
    let log_format = options.format;
    let log_timestamp = options.timestamp;

    let mut builder = Builder::new();
    builder
        .filter_level(options.level)
        .write_style(env_logger::WriteStyle::Never)
        .format(move |buf: &mut Formatter, record| {
            if log_timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }

            match log_format {
                LogFormat::Compact => {
                    writeln!(buf, "{} {}", level_tag(record.level()), record.args())
                }
                LogFormat::Pretty => {
                    writeln!(
                        buf,
                        "{} [{}] {}",
                        level_tag(record.level()),
                        record.target(),
                        record.args()
                    )
                }
            }
        })
        .target(Target::Stderr);

    builder
        .try_init()
        .map_err(|e| crate::Error::other(format!("logger init failed: {e}")))
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
