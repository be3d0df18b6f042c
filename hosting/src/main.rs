use log::{error, info};
use potato_host::{Configuration, FarmHostingThread};

fn main() {
    env_logger::init();
    let config = Configuration::from_env();
    info!("Host farm {:?}", config);
    match FarmHostingThread::spawn(config) {
        Ok(mut host) => host.join(),
        Err(error) => {
            error!("Unable to host farm: {}", error);
            std::process::exit(1);
        }
    }
}
