use {
    brent_lens::{Cli, run_app},
    clap::Parser,
    std::panic,
};

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let args = Cli::parse();

    let (global_level, my_code_level) = if args.verbose {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("brent_lens"), my_code_level)
        .parse_default_env()
        .init();

    let output = run_app(&args)?;
    print!("{}", output);

    Ok(())
}
