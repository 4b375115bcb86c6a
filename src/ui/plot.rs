use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Plot};

use crate::color::descriptor_color;
use crate::service::model::{BoxSummary, Descriptor, Hist};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Histogram geometry
// ---------------------------------------------------------------------------

/// `(center, width, count)` for every histogram bar.
///
/// `bins` holds the edges; if the service sent a mismatched edge list the
/// bars fall back to unit-width slots at their index.
pub fn histogram_bars(hist: &Hist) -> Vec<(f64, f64, f64)> {
    let edges_match = hist.bins.len() == hist.counts.len() + 1;
    hist.counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            if edges_match {
                let (lo, hi) = (hist.bins[i], hist.bins[i + 1]);
                ((lo + hi) / 2.0, (hi - lo).abs(), count as f64)
            } else {
                (i as f64, 1.0, count as f64)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Distribution plots (central panel, below the summary)
// ---------------------------------------------------------------------------

/// Histogram and box plot for each descriptor in the current summary.
pub fn distributions(ui: &mut Ui, state: &AppState) {
    let Some(summary) = &state.summary else {
        return;
    };

    for descriptor in Descriptor::ALL {
        let dist = summary.distribution(descriptor);
        let title = match descriptor.unit() {
            "" => format!("{} distribution", descriptor.label()),
            unit => format!("{} distribution ({unit})", descriptor.label()),
        };

        ui.add_space(12.0);
        ui.strong(title);

        if dist.hist.counts.is_empty() {
            ui.label("No data");
            continue;
        }
        histogram(ui, descriptor, &dist.hist);
        box_plot(ui, descriptor, &dist.box_summary);
    }
}

fn histogram(ui: &mut Ui, descriptor: Descriptor, hist: &Hist) {
    let color = descriptor_color(descriptor);
    let bars: Vec<Bar> = histogram_bars(hist)
        .into_iter()
        .map(|(center, width, count)| Bar::new(center, count).width(width * 0.95))
        .collect();

    Plot::new(format!("hist_{}", descriptor.label()))
        .height(140.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .y_axis_label("count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color).name(descriptor.label()));
        });
}

fn box_plot(ui: &mut Ui, descriptor: Descriptor, summary: &BoxSummary) {
    let Some([min, q1, median, q3, max]) = summary.values() else {
        return;
    };
    let color = descriptor_color(descriptor);
    let elem = BoxElem::new(0.0, BoxSpread::new(min, q1, median, q3, max))
        .name(descriptor.label())
        .box_width(0.6);

    Plot::new(format!("box_{}", descriptor.label()))
        .height(60.0)
        .show_y(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).horizontal().color(color));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_sit_between_edges() {
        let hist = Hist {
            bins: vec![0.0, 100.0, 300.0],
            counts: vec![4, 1],
        };
        assert_eq!(
            histogram_bars(&hist),
            vec![(50.0, 100.0, 4.0), (200.0, 200.0, 1.0)]
        );
    }

    #[test]
    fn mismatched_edges_fall_back_to_index() {
        let hist = Hist {
            bins: vec![0.0],
            counts: vec![2, 3],
        };
        assert_eq!(histogram_bars(&hist), vec![(0.0, 1.0, 2.0), (1.0, 1.0, 3.0)]);
    }
}
