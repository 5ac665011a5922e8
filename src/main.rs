use anyhow::{bail, Result};
use reltime::{i18n, relative_time_str, Settings};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(timestamp) = args.next() else {
        bail!("usage: reltime <timestamp> [language]");
    };

    let settings = Settings::load();
    settings.apply(i18n::global())?;

    let language = args.next().unwrap_or(settings.default_language);
    println!("{}", relative_time_str(&timestamp, &language)?);
    Ok(())
}
