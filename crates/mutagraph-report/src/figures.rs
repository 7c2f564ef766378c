//! Chart rendering using plotters (SVG output).
//!
//! Consumes declarative [`ChartSpec`]s and draws them onto a drawing area.
//! Uses the SVG backend to avoid system font dependencies. This is the only
//! module that knows how a chart kind maps to draw calls.

use crate::chart::{
    percent_label, Bar, ChartSpec, HeatmapMatrix, HistogramBin, NetworkEdge, NetworkNode,
    SequenceCell, Wedge,
};
use anyhow::{bail, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render one chart spec onto a drawing area.
pub fn draw_chart(area: &Area<'_>, spec: &ChartSpec) -> Result<()> {
    match spec {
        ChartSpec::HorizontalBars {
            title,
            x_label,
            bars,
        } => draw_horizontal_bars(area, title, x_label, bars),
        ChartSpec::Pie { title, wedges } => draw_pie(area, title, wedges),
        ChartSpec::SequenceTrack {
            title,
            x_label,
            cells,
            markers,
            marker_color,
        } => draw_sequence(area, title, x_label, cells, markers, marker_color),
        ChartSpec::VerticalBars {
            title,
            y_label,
            bars,
        } => draw_vertical_bars(area, title, y_label, bars),
        ChartSpec::Heatmap { title, matrix } => draw_heatmap(area, title, matrix),
        ChartSpec::Histogram {
            title,
            x_label,
            y_label,
            bins,
            mean,
            mean_label,
        } => draw_histogram(area, title, x_label, y_label, bins, *mean, mean_label),
        ChartSpec::Network {
            title,
            edges,
            nodes,
            edge_color,
            bounds,
        } => draw_network(area, title, edges, nodes, edge_color, *bounds),
        ChartSpec::GroupedBars {
            title,
            x_label,
            y_label,
            categories,
            series,
        } => draw_grouped_bars(area, title, x_label, y_label, categories, series),
    }
}

/// Parse a "#RRGGBB" hex color.
fn parse_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        bail!("malformed color '{hex}'");
    }
    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;
    Ok(RGBColor(r, g, b))
}

/// Map value [0, 1] to a white -> yellow -> red ramp.
fn heat_color(value: f64) -> RGBColor {
    let v = value.clamp(0.0, 1.0);
    if v < 0.5 {
        let t = v * 2.0;
        RGBColor(255, 255, (255.0 * (1.0 - t)) as u8)
    } else {
        let t = (v - 0.5) * 2.0;
        RGBColor(255, (255.0 * (1.0 - t * 0.85)) as u8, 0)
    }
}

fn centered(size: i32) -> TextStyle<'static> {
    ("sans-serif", size)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center))
}

fn draw_no_data(area: &Area<'_>, title: &str) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        title.to_string(),
        (w as i32 / 2, 15),
        centered(18),
    ))?;
    area.draw(&Text::new(
        "No data available",
        (w as i32 / 2, h as i32 / 2),
        centered(20),
    ))?;
    Ok(())
}

fn draw_horizontal_bars(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    bars: &[Bar],
) -> Result<()> {
    if bars.is_empty() {
        return draw_no_data(area, title);
    }

    let xmax = bars.iter().map(|b| b.value).fold(0.0f64, f64::max).max(1.0) * 1.25;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..xmax, (0..bars.len()).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .y_labels(bars.len())
        .y_label_formatter(&|y| match y {
            SegmentValue::CenterOf(i) if *i < bars.len() => bars[*i].label.clone(),
            _ => String::new(),
        })
        .draw()?;

    for (i, bar) in bars.iter().enumerate() {
        let color = parse_color(&bar.color)?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (0.0, SegmentValue::Exact(i)),
                (bar.value, SegmentValue::Exact(i + 1)),
            ],
            color.mix(0.8).filled(),
        )))?;
        // Annotation sits just past the bar end, never on top of it
        chart.draw_series(std::iter::once(Text::new(
            bar.annotation.clone(),
            (bar.value + xmax * 0.01, SegmentValue::CenterOf(i)),
            ("sans-serif", 12)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center)),
        )))?;
    }

    Ok(())
}

fn draw_vertical_bars(area: &Area<'_>, title: &str, y_label: &str, bars: &[Bar]) -> Result<()> {
    if bars.is_empty() {
        return draw_no_data(area, title);
    }

    let ymax = bars.iter().map(|b| b.value).fold(0.0f64, f64::max).max(1.0) * 1.2;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(50)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0.0..ymax)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc(y_label)
        .x_labels(bars.len())
        .x_label_formatter(&|x| match x {
            SegmentValue::CenterOf(i) if *i < bars.len() => bars[*i].label.clone(),
            _ => String::new(),
        })
        .draw()?;

    for (i, bar) in bars.iter().enumerate() {
        let color = parse_color(&bar.color)?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value),
            ],
            color.mix(0.8).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            bar.annotation.clone(),
            (SegmentValue::CenterOf(i), bar.value + ymax * 0.02),
            ("sans-serif", 12)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        )))?;
    }

    Ok(())
}

fn draw_pie(area: &Area<'_>, title: &str, wedges: &[Wedge]) -> Result<()> {
    if wedges.is_empty() {
        return draw_no_data(area, title);
    }

    let (w, h) = area.dim_in_pixel();
    area.draw(&Text::new(
        title.to_string(),
        (w as i32 / 2, 15),
        centered(18),
    ))?;

    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0 + 10.0;
    let r = (w.min(h) as f64 / 2.0 - 60.0).max(20.0);

    // Start at twelve o'clock
    let mut start = -std::f64::consts::FRAC_PI_2;
    for wedge in wedges {
        let sweep = wedge.fraction * std::f64::consts::TAU;
        let end = start + sweep;

        let steps = ((sweep.to_degrees() / 2.0).ceil() as usize).max(2);
        let mut points = vec![(cx as i32, cy as i32)];
        for s in 0..=steps {
            let ang = start + sweep * s as f64 / steps as f64;
            points.push(((cx + r * ang.cos()) as i32, (cy + r * ang.sin()) as i32));
        }
        area.draw(&Polygon::new(
            points,
            parse_color(&wedge.color)?.mix(0.9).filled(),
        ))?;

        let mid = (start + end) / 2.0;
        // Category label outside the rim, percentage inside the wedge
        area.draw(&Text::new(
            wedge.label.clone(),
            (
                (cx + (r + 18.0) * mid.cos()) as i32,
                (cy + (r + 18.0) * mid.sin()) as i32,
            ),
            centered(13),
        ))?;
        area.draw(&Text::new(
            percent_label(wedge.fraction * 100.0),
            (
                (cx + r * 0.6 * mid.cos()) as i32,
                (cy + r * 0.6 * mid.sin()) as i32,
            ),
            ("sans-serif", 12)
                .into_font()
                .color(&WHITE)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))?;

        start = end;
    }

    Ok(())
}

fn draw_sequence(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    cells: &[SequenceCell],
    markers: &[usize],
    marker_color: &str,
) -> Result<()> {
    if cells.is_empty() {
        return draw_no_data(area, title);
    }

    let n = cells.len() as f64;
    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(35)
        .y_label_area_size(10)
        .build_cartesian_2d(0.0..n, 0.0..2.0)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_desc(x_label)
        .draw()?;

    for (i, cell) in cells.iter().enumerate() {
        let x0 = i as f64;
        let color = parse_color(&cell.color)?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.8), (x0 + 1.0, 1.2)],
            color.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.8), (x0 + 1.0, 1.2)],
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            cell.base.to_string(),
            (x0 + 0.5, 1.0),
            centered(10),
        )))?;
    }

    let marker_fill = parse_color(marker_color)?;
    for &pos in markers {
        let x = pos as f64 + 0.5;
        chart.draw_series(std::iter::once(Circle::new(
            (x, 1.6),
            9,
            marker_fill.mix(0.85).filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            "M",
            (x, 1.6),
            ("sans-serif", 10)
                .into_font()
                .color(&WHITE)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )))?;
    }

    Ok(())
}

fn draw_heatmap(area: &Area<'_>, title: &str, matrix: &HeatmapMatrix) -> Result<()> {
    let nrows = matrix.row_labels.len();
    let ncols = matrix.col_labels.len();
    if nrows == 0 || ncols == 0 {
        return draw_no_data(area, title);
    }

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(70)
        .build_cartesian_2d(0..ncols, 0..nrows)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(ncols)
        .y_labels(nrows)
        .x_label_formatter(&|x| {
            matrix
                .col_labels
                .get(*x)
                .cloned()
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| {
            matrix
                .row_labels
                .get(*y)
                .cloned()
                .unwrap_or_default()
        })
        .draw()?;

    for (row, values) in matrix.values.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            chart.draw_series(std::iter::once(Rectangle::new(
                [(col, row), (col + 1, row + 1)],
                heat_color(value).filled(),
            )))?;
        }
    }

    Ok(())
}

fn draw_histogram(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    y_label: &str,
    bins: &[HistogramBin],
    mean: f64,
    mean_label: &str,
) -> Result<()> {
    if bins.is_empty() {
        return draw_no_data(area, title);
    }

    let lo = bins[0].lo;
    let hi = bins[bins.len() - 1].hi;
    let ymax = bins.iter().map(|b| b.count).max().unwrap_or(1).max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0..ymax + 1)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    for bin in bins {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin.lo, 0), (bin.hi, bin.count)],
            BLUE.mix(0.7).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(bin.lo, 0), (bin.hi, bin.count)],
            BLACK.stroke_width(1),
        )))?;
    }

    // Mean reference marker with its label alongside
    chart.draw_series(LineSeries::new(
        [(mean, 0), (mean, ymax)],
        RED.stroke_width(2),
    ))?;
    chart.draw_series(std::iter::once(Text::new(
        mean_label.to_string(),
        (mean + (hi - lo) * 0.02, ymax),
        ("sans-serif", 13)
            .into_font()
            .color(&RED)
            .pos(Pos::new(HPos::Left, VPos::Center)),
    )))?;

    Ok(())
}

fn draw_network(
    area: &Area<'_>,
    title: &str,
    edges: &[NetworkEdge],
    nodes: &[NetworkNode],
    edge_color: &str,
    bounds: (f64, f64),
) -> Result<()> {
    if nodes.is_empty() {
        return draw_no_data(area, title);
    }

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .build_cartesian_2d(0.0..bounds.0, 0.0..bounds.1)?;

    let edge_style = parse_color(edge_color)?.mix(0.6).stroke_width(2);
    for edge in edges {
        chart.draw_series(LineSeries::new([edge.from, edge.to], edge_style))?;
    }

    for node in nodes {
        let fill = parse_color(&node.color)?;
        chart.draw_series(std::iter::once(Circle::new(
            (node.x, node.y),
            16,
            fill.mix(0.9).filled(),
        )))?;
        chart.draw_series(std::iter::once(Circle::new(
            (node.x, node.y),
            16,
            BLACK.stroke_width(1),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            node.name.clone(),
            (node.x, node.y),
            ("sans-serif", 11)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )))?;
    }

    Ok(())
}

fn draw_grouped_bars(
    area: &Area<'_>,
    title: &str,
    x_label: &str,
    y_label: &str,
    categories: &[String],
    series: &[crate::chart::BarSeries],
) -> Result<()> {
    if categories.is_empty() || series.is_empty() {
        return draw_no_data(area, title);
    }

    let ncat = categories.len();
    let ymax = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0f64, f64::max)
        .max(0.1)
        * 1.2;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5..(ncat as f64 - 0.5), 0.0..ymax)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(ncat)
        .x_label_formatter(&|x| {
            let i = x.round();
            if (x - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < ncat {
                categories[i as usize].clone()
            } else {
                String::new()
            }
        })
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    let group_width = 0.8;
    let bar_width = group_width / series.len() as f64;
    for (k, s) in series.iter().enumerate() {
        let color = parse_color(&s.color)?;
        chart
            .draw_series(s.values.iter().enumerate().map(|(i, &v)| {
                let x0 = i as f64 - group_width / 2.0 + k as f64 * bar_width;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, v)], color.mix(0.85).filled())
            }))?
            .label(&s.name)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
