//! Six-touch enrollment followed by identification attempts

use std::thread;
use std::time::Duration;

use fp1020a::{EnrollStage, Sensor, TcpTransport, UserLevel};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> fp1020a::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Change to your bridge address
    let host = std::env::var("SENSOR_HOST").unwrap_or_else(|_| "192.168.4.1".to_string());
    let port = std::env::var("SENSOR_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(23);

    let mut transport = TcpTransport::new(host, port);
    transport.connect()?;

    let mut sensor = Sensor::new(transport);
    let user_id = 1;

    let touches = EnrollStage::MAX_TOUCHES;
    for (touch, stage) in EnrollStage::sequence(touches)?.enumerate() {
        info!("Please press your finger, {}/{}", touch + 1, touches);
        match sensor.enroll(stage, user_id, UserLevel::Level1) {
            Ok(()) => info!("Touch accepted"),
            Err(e) => error!("Touch rejected: {}", e),
        }
    }

    for attempt in 1..=10 {
        info!("Now try your finger, {}/10", attempt);
        match sensor.authenticate() {
            Ok(auth) => info!("Returned user ID {}, level {}", auth.user_id, auth.level),
            Err(e) => error!("Authentication failed: {}", e),
        }
        thread::sleep(Duration::from_secs(1));
    }

    info!("Deleting all records");
    sensor.remove_all()?;

    let mut transport = sensor.into_inner();
    transport.disconnect()?;

    Ok(())
}
