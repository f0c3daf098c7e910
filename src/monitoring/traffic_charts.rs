use crate::error::{Result, TrafficAppError};
use crate::global_variables::{GRAPH_SIZE, MAP_BORDER_WIDTH, MAP_SIZE};
use crate::shared_data::Dataset;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use plotters::element::BitMapElement;
use plotters::prelude::*;
use std::path::Path;

const CORAL: RGBColor = RGBColor(0xFF, 0x7F, 0x50);
const LIGHT_BLUE: RGBColor = RGBColor(0xAD, 0xD8, 0xE6);

fn chart_err<E: std::fmt::Display>(e: E) -> TrafficAppError {
    TrafficAppError::Chart(e.to_string())
}

/// The static map shown beside the prediction, already scaled for display.
#[derive(Debug, Clone)]
pub struct MapView {
    image: DynamicImage,
}

impl MapView {
    /// Scales `image` to the display size, ignoring its aspect ratio.
    pub fn from_image(image: DynamicImage) -> Self {
        let (width, height) = MAP_SIZE;
        Self {
            image: image.resize_exact(width, height, FilterType::Lanczos3),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Loads the map asset. A missing or unreadable file is fatal at startup.
pub fn load_map_image(path: &Path) -> Result<MapView> {
    let image = image::open(path).map_err(|source| TrafficAppError::MissingAsset {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded map image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(MapView::from_image(image))
}

/// Draws the map inside a solid border.
pub fn render_map_view(map: &MapView, output: &Path) -> Result<()> {
    let (map_width, map_height) = map.dimensions();
    let (width, height) = (
        map_width + 2 * MAP_BORDER_WIDTH,
        map_height + 2 * MAP_BORDER_WIDTH,
    );

    // The black fill left visible around the map is the border.
    let root = BitMapBackend::new(output, (width, height)).into_drawing_area();
    root.fill(&BLACK).map_err(chart_err)?;

    let offset = MAP_BORDER_WIDTH as i32;
    let element: BitMapElement<(i32, i32)> = ((offset, offset), map.image.clone()).into();
    root.draw(&element).map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    log::info!("Map view saved to {}", output.display());
    Ok(())
}

/// Line-and-fill chart of traffic volume for each hour of the dataset.
pub fn render_traffic_graph(dataset: &Dataset, output: &Path) -> Result<()> {
    let points: Vec<(u32, f64)> = dataset
        .volume_series()
        .into_iter()
        .map(|(hour, volume)| (u32::from(hour), volume))
        .collect();
    if points.is_empty() {
        return Err(TrafficAppError::InvalidDataset(
            "no traffic volumes to plot".to_string(),
        ));
    }

    let max_hour = points.iter().map(|p| p.0).max().unwrap_or(0);
    let min_hour = points.iter().map(|p| p.0).min().unwrap_or(0);
    // A flat zero series still needs a non-empty y range.
    let max_volume = points.iter().map(|p| p.1).fold(0.0, f64::max).max(1.0);

    let root = BitMapBackend::new(output, GRAPH_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Traffic Volume Throughout the Day", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(min_hour..max_hour.max(min_hour + 1), 0.0..max_volume * 1.1)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_labels(points.len())
        .x_desc("Hour of Day")
        .y_desc("Traffic Volume")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(AreaSeries::new(
            points.iter().copied(),
            0.0,
            LIGHT_BLUE.mix(0.5).filled(),
        ))
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), CORAL.stroke_width(2)).point_size(4))
        .map_err(chart_err)?
        .label("Traffic Volume")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CORAL.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    log::info!("Traffic graph saved to {}", output.display());
    Ok(())
}
