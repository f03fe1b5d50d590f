//! Bar chart models. Rendering lives in the UI crate; these types carry the
//! bars, axis labels and palette so the charts can also be inspected
//! headlessly.

use serde::{Deserialize, Serialize};

use crate::commute::CommuteDistances;
use crate::config::{DECIMALS_DEFAULT, GJ_TO_KWH};
use crate::factory::FactoryEnergy;
use crate::materials::MaterialInputs;

const PALETTE_LOW: f64 = 0.15;
const PALETTE_HIGH: f64 = 0.85;

/// Sequential palettes, sampled evenly for the number of bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Viridis,
    Magma,
    Inferno,
}

impl Palette {
    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Palette::Viridis => &[
                [68, 1, 84],
                [59, 82, 139],
                [33, 145, 140],
                [94, 201, 98],
                [253, 231, 37],
            ],
            Palette::Magma => &[
                [0, 0, 4],
                [81, 18, 124],
                [183, 55, 121],
                [252, 137, 97],
                [252, 253, 191],
            ],
            Palette::Inferno => &[
                [0, 0, 4],
                [87, 16, 110],
                [188, 55, 84],
                [249, 142, 9],
                [252, 255, 164],
            ],
        }
    }

    /// RGB colour for bar `index` of `count`, sampled from the inner part of
    /// the gradient so no bar is drawn near-black or near-white.
    pub fn color(self, index: usize, count: usize) -> [u8; 3] {
        let t = if count <= 1 {
            0.5
        } else {
            index.min(count - 1) as f64 / (count - 1) as f64
        };
        self.sample(PALETTE_LOW + t * (PALETTE_HIGH - PALETTE_LOW))
    }

    /// Linear interpolation between stops at `pos` in 0..=1.
    fn sample(self, pos: f64) -> [u8; 3] {
        let stops = self.stops();
        let scaled = pos.clamp(0.0, 1.0) * (stops.len() - 1) as f64;
        let i = (scaled.floor() as usize).min(stops.len() - 2);
        let frac = scaled - i as f64;
        let (a, b) = (stops[i], stops[i + 1]);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
        [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    /// Text drawn above the bar.
    pub fn annotation(&self) -> String {
        format!("{:.*}", DECIMALS_DEFAULT, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub heading: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub palette: Palette,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Largest bar value, at least zero, used to scale the plot.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    pub fn bar_color(&self, index: usize) -> [u8; 3] {
        self.palette.color(index, self.bars.len())
    }
}

/// Equipment, heating and lighting energy on one kWh axis.
pub fn energy_chart(equipment_kwh: f64, factory: &FactoryEnergy) -> BarChart {
    BarChart {
        heading: "Energy Consumption (kWh and GJ)".to_string(),
        title: "Energy Consumption for Different Categories".to_string(),
        x_label: "Category".to_string(),
        y_label: "Energy Consumption (kWh)".to_string(),
        palette: Palette::Viridis,
        bars: vec![
            Bar::new("Equipment Energy (kWh)", equipment_kwh),
            Bar::new("Heating Energy (GJ)", factory.heating_gj * GJ_TO_KWH),
            Bar::new("Lighting Energy (kWh)", factory.lighting_kwh),
        ],
    }
}

pub fn commute_chart(commute: &CommuteDistances) -> BarChart {
    BarChart {
        heading: "Commute Distance by Transport Type".to_string(),
        title: "Commute Distance by Transport Type".to_string(),
        x_label: "Transport Type".to_string(),
        y_label: "Total Distance (km)".to_string(),
        palette: Palette::Magma,
        bars: vec![
            Bar::new("Car", commute.car_km),
            Bar::new("Public Transport", commute.public_transport_km),
        ],
    }
}

pub fn material_chart(materials: &MaterialInputs) -> BarChart {
    BarChart {
        heading: "Material Inputs (kg)".to_string(),
        title: "Material Inputs for 10m²".to_string(),
        x_label: "Material".to_string(),
        y_label: "Quantity (kg)".to_string(),
        palette: Palette::Inferno,
        bars: materials
            .iter()
            .map(|(kind, line)| Bar::new(kind.label(), line.quantity_kg))
            .collect(),
    }
}
