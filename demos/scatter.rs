use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_scatterplot::{Chart, ChartConfig, Color, Sample, SampleStyle, ScatterView, StyleTable};

const SPECIES: [(&str, Color); 3] = [
    ("setosa", Color::new(0.2, 0.5, 0.9, 1.0)),
    ("versicolor", Color::new(0.9, 0.4, 0.2, 1.0)),
    ("virginica", Color::new(0.3, 0.7, 0.3, 1.0)),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(520.0), px(520.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let samples = (0..150)
                .map(|i| {
                    let species = i % SPECIES.len();
                    let t = i as f64 * 0.37;
                    let x = 4.0 + species as f64 * 1.2 + t.sin() * 0.6;
                    let y = 2.0 + species as f64 * 0.8 + (t * 1.7).cos() * 0.5;
                    Sample::new((x, y), SPECIES[species].0)
                })
                .collect();
            let styles: StyleTable<&'static str> = SPECIES
                .iter()
                .map(|(label, color)| (*label, SampleStyle::color(*color)))
                .collect();

            let chart = Chart::builder(samples)
                .config(
                    ChartConfig::with_size(500.0)
                        .with_axes_labels("sepal length", "petal length")
                        .with_transparency(0.6),
                )
                .styles(styles)
                .on_select(|sample| match sample {
                    Some(sample) => tracing::info!(label = sample.label, point = ?sample.point, "selected"),
                    None => tracing::info!("selection cleared"),
                })
                .build()
                .expect("valid chart config");

            cx.new(|_| ScatterView::new(chart))
        })
        .unwrap();
    });
}
