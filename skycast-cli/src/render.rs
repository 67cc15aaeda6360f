//! Terminal rendering of the UI state: a small weather card, colored by the
//! active theme.

use chrono::{Local, Utc};
use crossterm::style::{Color, Stylize};
use skycast_core::{UiState, View, WeatherSnapshot, display};

pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub dim: Color,
}

pub fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGrey,
        }
    } else {
        Palette {
            accent: Color::Blue,
            text: Color::Reset,
            dim: Color::Grey,
        }
    }
}

pub fn draw(state: &UiState) {
    let pal = palette(state.dark_mode);

    match &state.view {
        View::Idle => println!(
            "{}",
            "Enter a city name or use your location to get weather data.".with(pal.dim)
        ),
        View::Loading => draw_loading(state),
        View::Error(message) => println!("{}", message.as_str().with(Color::Red)),
        View::Showing(snapshot) => draw_card(snapshot, &pal),
    }
}

pub fn draw_loading(state: &UiState) {
    let pal = palette(state.dark_mode);
    println!("{}", "Loading...".with(pal.dim));
}

fn draw_card(snapshot: &WeatherSnapshot, pal: &Palette) {
    println!();
    println!(
        "  {}  {}",
        display::icon_glyph(&snapshot.icon_code),
        snapshot.location_name.as_str().with(pal.accent).bold()
    );
    println!("  {}", snapshot.description.as_str().with(pal.text));
    println!(
        "  {}",
        format!("{}\u{b0}C", snapshot.temperature_c).with(pal.text).bold()
    );
    println!(
        "  {}",
        display::format_date(Local::now().date_naive()).with(pal.dim)
    );
    println!(
        "  {}",
        display::local_time(Utc::now(), snapshot.utc_offset_secs).with(pal.dim)
    );
    println!(
        "  {}   {}",
        format!("Humidity {}%", snapshot.humidity_pct).with(pal.text),
        format!("Wind {} m/s", snapshot.wind_speed_mps).with(pal.text)
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_use_distinct_palettes() {
        let light = palette(false);
        let dark = palette(true);
        assert_ne!(light.accent, dark.accent);
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn toggling_twice_restores_palette() {
        let mut mode = false;
        let initial = palette(mode);
        mode = !mode;
        mode = !mode;
        let back = palette(mode);
        assert_eq!(initial.accent, back.accent);
        assert_eq!(initial.text, back.text);
        assert_eq!(initial.dim, back.dim);
    }
}
