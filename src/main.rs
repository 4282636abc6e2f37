use clap::Parser;
use ltb::{
    cli::Args,
    config::Config,
    pipeline::{run_check_key, run_generate, run_setup},
};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let config = Config::default();
    let res = if args.setup_project {
        run_setup(&config)
    } else if args.check_key {
        run_check_key(&config)
    } else {
        run_generate(&config, args.model)
    };
    res.unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
}
