//! Sensor status query example

use fp1020a::{BaudRate, Error, Sensor, TcpTransport};

fn main() -> fp1020a::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let host = std::env::var("SENSOR_HOST").unwrap_or_else(|_| "192.168.4.1".to_string());

    let mut transport = TcpTransport::new(host, 23);
    transport.connect()?;

    let mut sensor = Sensor::new(transport);

    println!("Enrolled users: {}", sensor.get_user_count()?);

    match sensor.get_next_available_id(1, 1000) {
        Ok(id) => println!("Next free user ID: {}", id),
        Err(Error::Device(ack)) => println!("No free user ID ({})", ack),
        Err(e) => return Err(e),
    }

    sensor.set_compare_level(5)?;
    println!("Compare level reset to 5");

    // Re-selecting the current speed reports the previous one
    let previous = sensor.set_baud_rate(BaudRate::default());
    println!("Baud rate was {}", previous);

    sensor.sleep();

    sensor.into_inner().disconnect()?;
    Ok(())
}
