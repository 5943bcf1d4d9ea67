use clap::Parser;
use zonemap::app::ZoneMapApp;

fn main() {
    env_logger::init();
    let args = ZoneMapApp::parse();
    if let Err(e) = args.run() {
        log::error!("{e}");
        eprintln!("zonemap failed: {e}");
        std::process::exit(1);
    }
}
