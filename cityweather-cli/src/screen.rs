use cityweather_core::{ViewFrame, WeatherDisplay};

/// Terminal implementation of the weather display: one line per display slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDisplay;

impl WeatherDisplay for TerminalDisplay {
    fn show(&mut self, frame: &ViewFrame) {
        match frame {
            ViewFrame::Idle => {}
            ViewFrame::Loading => println!("Fetching weather data..."),
            ViewFrame::Weather(w) => {
                println!();
                println!("{}", w.location);
                println!("{}", w.date);
                println!();
                println!("  {}  {}", w.temperature, w.description);
                println!("  icon: {}", w.icon_url);
                println!();
                println!("  Feels like: {}", w.feels_like);
                println!("  Humidity:   {}", w.humidity);
                println!("  Wind:       {}", w.wind_speed);
                println!("  Pressure:   {}", w.pressure);
                println!();
            }
            ViewFrame::Error(message) => eprintln!("{message}"),
        }
    }
}
