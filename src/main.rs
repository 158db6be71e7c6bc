use wsf::DemoConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = wsf::run(DemoConfig::default()) {
        log::error!("{err}");
        std::process::exit(1);
    }
}
