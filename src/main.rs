use clap::Parser;

fn main() {
    let args = rommaker::cli::Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(err) = rommaker::run(args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
