use compass_heading::HeadingCalculator;
use nalgebra::Vector3;

const STEP_DEGREES: f32 = 30.0;

fn main() {
    let calculator = HeadingCalculator::new();

    for step in 0..12 {
        // this loop should repeat each time new sensor data is available
        let turn = (step as f32 * STEP_DEGREES).to_radians();
        let accelerometer = Vector3::new(0.0, 0.0, 9.81); // replace this with actual accelerometer data in m/s²
        let magnetometer = Vector3::new(-22.0 * turn.sin(), 22.0 * turn.cos(), -40.0); // replace this with actual magnetometer data in µT

        match calculator.update(accelerometer, magnetometer) {
            Ok(update) => println!(
                "Heading: {:>6.2}, Direction: {:<2}, Needle: {:>7.2}",
                update.heading.degrees(),
                update.direction,
                update.needle_rotation()
            ),
            Err(err) => println!("No heading: {}", err),
        }
    }
}
