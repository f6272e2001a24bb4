// File: crates/demo/src/main.rs
// Summary: Demo lays out a titled figure with two stacked subplots, a color scale and a legend, then prints every rect.

use anyhow::{Context, Result};
use chart_layout::{
    build_legend, Axis, AxisRect, Chart, ColorScale, ElementKind, LayoutOptions, LegendOptions, MarginSide,
    MarginSides,
};
use std::rc::Rc;

fn main() -> Result<()> {
    env_logger::init();

    // Optional surface size from the CLI: `demo [width] [height]`
    let mut args = std::env::args().skip(1);
    let defaults = LayoutOptions::default();
    let width = parse_dim(args.next(), defaults.width).context("invalid width")?;
    let height = parse_dim(args.next(), defaults.height).context("invalid height")?;
    println!("Surface: {width}x{height}");

    let mut chart = Chart::with_options(
        LayoutOptions { width, height, ..defaults },
        Rc::new(chart_layout::FixedAdvanceMetrics::default()),
    );

    let root = chart.root();
    let metrics = chart.metrics();

    // 1) Two stacked subplots whose left/right margins line up
    let price = chart.add_axis_rect(0, 0, "Time", "Price")?;
    let volume = chart.add_axis_rect(1, 0, "Time", "Volume")?;
    set_ticks(&mut chart, price, MarginSide::Left, &["0.45", "0.50", "0.55"]);
    set_ticks(&mut chart, volume, MarginSide::Left, &["0", "250000", "500000"]);
    let aligned = chart.tree.add_margin_group();
    for plot in [price, volume] {
        chart.tree.set_margin_group(plot, MarginSides::LEFT | MarginSides::RIGHT, Some(aligned))?;
    }
    if let Some(grid) = chart.tree.grid_mut(root) {
        grid.set_row_stretch_factors(&[3.0, 1.0])?;
    }

    // 2) Color scale next to the price plot
    let scale_axis = Axis::new("Density").with_tick_labels(["0", "1"]);
    let scale = chart.tree.add_leaf(ColorScale::new(MarginSide::Right, scale_axis, Rc::clone(&metrics)));
    chart.tree.add_to_grid(root, 0, 1, scale)?;

    // 3) Legend in the price plot's overlay, top-right corner
    let legend = build_legend(&mut chart.tree, &["close", "vwap"], metrics, LegendOptions::default())?;
    let overlay = chart.tree.inset_layout(price).context("price plot vanished")?;
    chart.tree.add_to_inset(overlay, legend, Default::default())?;

    // 4) Title on top
    chart.set_title("CRV/USDT 6h")?;

    chart.relayout();

    for (id, depth) in chart.tree.walk(root) {
        let Some(base) = chart.tree.base(id) else { continue };
        let what = match chart.tree.kind(id) {
            Some(ElementKind::Layout(_)) => "layout".to_string(),
            Some(ElementKind::Leaf(content)) => format!("{content:?}").split(['(', ' ', '{']).next().unwrap_or("leaf").to_string(),
            None => continue,
        };
        let (o, r) = (base.outer_rect(), base.rect());
        println!(
            "{:indent$}{what:<12} outer=({}, {}, {}x{}) inner=({}, {}, {}x{})",
            "",
            o.left,
            o.top,
            o.width(),
            o.height(),
            r.left,
            r.top,
            r.width(),
            r.height(),
            indent = depth * 2
        );
    }
    Ok(())
}

fn parse_dim(arg: Option<String>, default: i32) -> Result<i32> {
    match arg {
        Some(s) => {
            let v: i32 = s.parse().with_context(|| format!("'{s}' is not a pixel count"))?;
            if v <= 0 {
                anyhow::bail!("dimension must be positive, got {v}");
            }
            Ok(v)
        }
        None => Ok(default),
    }
}

fn set_ticks(chart: &mut Chart, plot: chart_layout::ElementId, side: MarginSide, labels: &[&str]) {
    if let Some(rect) = chart.tree.leaf_mut::<AxisRect>(plot) {
        if let Some(axis) = rect.axes_mut(side).first_mut() {
            axis.tick_labels = labels.iter().map(|l| l.to_string()).collect();
        }
    }
}
