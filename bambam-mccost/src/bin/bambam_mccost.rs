//! builds multi-criteria cost parameters from the defaults plus user overrides and
//! prints them, or checks OSM smoothness tags against a minimum smoothness.
use bambam_mccost::app::McCostApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = McCostApp::parse();
    match args.op.run() {
        Ok(out) => println!("{out}"),
        Err(e) => {
            log::error!("bambam-mccost failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
