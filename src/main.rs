use osc::core::config::ShellConfig;
use osc::flags::Flags;
use osc::logging;
use osc::shell::Shell;
use std::env;

fn main() -> Result<(), osc::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("osc {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags);
    logging::init(&config);

    let mut shell = Shell::new(config);
    shell.run()
}
