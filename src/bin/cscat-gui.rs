/*!
 * Interactive window for census-scatter.
 *
 * Renders the age vs. smoking-rate scatter chart from the current window
 * size on every frame, so a resize is simply the next frame's geometry:
 * nothing from a previous frame survives, and exactly one chart surface
 * exists at any time. Hovering a marker shows the offset tooltip for the
 * record under the pointer.
 *
 * Dataset loads run on a background thread. Every requested load carries a
 * monotonically increasing generation; a result arriving for an older
 * generation is discarded, so rapid reloads can never apply stale data.
 */

use census_scatter::layout::Viewport;
use census_scatter::{CensusRecord, ChartGeometry, ChartStyle, dataset, tooltip};
use eframe::egui;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([300.0, 200.0])
            .with_title("Census Scatter - age vs. smoking rate"),
        ..Default::default()
    };

    eframe::run_native(
        "Census Scatter",
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new()))),
    )
}

/// Outcome of one background load, tagged with its generation.
struct LoadResult {
    generation: u64,
    outcome: Result<Vec<CensusRecord>, String>,
}

/// Main application state.
struct ChartApp {
    data_path: String,
    style: ChartStyle,

    // Chart state: `None` means no chart is shown (initial state, or the
    // last load failed).
    records: Option<Vec<CensusRecord>>,

    // UI state
    is_loading: bool,
    error_message: String,

    // Background load plumbing. All loads report into one channel; the
    // generation decides whether a result still applies.
    generation: u64,
    load_sender: mpsc::Sender<LoadResult>,
    load_receiver: mpsc::Receiver<LoadResult>,
}

impl ChartApp {
    fn new() -> Self {
        let (load_sender, load_receiver) = mpsc::channel();
        let mut app = Self {
            data_path: "assets/data.csv".to_string(),
            style: ChartStyle::default(),
            records: None,
            is_loading: false,
            error_message: String::new(),
            generation: 0,
            load_sender,
            load_receiver,
        };
        // First render happens as soon as the initial load lands.
        app.start_load();
        app
    }

    fn start_load(&mut self) {
        self.generation += 1;
        self.is_loading = true;
        self.error_message.clear();

        let sender = self.load_sender.clone();
        let path = self.data_path.clone();
        let generation = self.generation;
        thread::spawn(move || {
            let outcome = dataset::load_csv(&path).map_err(|e| e.to_string());
            let _ = sender.send(LoadResult { generation, outcome });
        });
    }

    fn check_load_results(&mut self) {
        while let Ok(result) = self.load_receiver.try_recv() {
            if result.generation != self.generation {
                // A newer load was requested while this one was in flight;
                // the last one requested wins, never the last to finish.
                log::debug!(
                    "discarding stale dataset load (generation {} < {})",
                    result.generation,
                    self.generation
                );
                continue;
            }
            self.is_loading = false;

            match result.outcome {
                Ok(records) => {
                    self.records = Some(records);
                    self.error_message.clear();
                }
                Err(err) => {
                    log::error!("dataset load failed: {err}");
                    self.records = None;
                    self.error_message = err;
                }
            }
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Keep repainting while a load is pending (for the spinner).
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Dataset:");
                ui.text_edit_singleline(&mut self.data_path)
                    .on_hover_text("Path to a CSV with state, abbr, age, smokes columns");
                if ui.button("Browse").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                {
                    self.data_path = path.to_string_lossy().to_string();
                    self.start_load();
                }
                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Reload"))
                    .clicked()
                {
                    self.start_load();
                }
                if self.is_loading {
                    ui.spinner();
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_ui(ui);
        });
    }
}

impl ChartApp {
    /// Draw the whole chart from scratch for the current panel size.
    fn chart_ui(&self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());

        // No chart surface while there is no data (initial state or failed
        // load); the panel simply stays empty.
        let Some(records) = &self.records else {
            return;
        };

        let viewport = Viewport::new(rect.width() as f64, rect.height() as f64);
        let geom = ChartGeometry::fit(records, viewport, &self.style);
        let painter = ui.painter_at(rect);
        let origin = rect.min
            + egui::vec2(
                self.style.margins.left as f32,
                self.style.margins.top as f32,
            );
        let to_screen =
            |(x, y): (f64, f64)| egui::pos2(origin.x + x as f32, origin.y + y as f32);

        self.draw_axes(&painter, &geom, origin, rect);
        self.draw_markers(&painter, records, &geom, to_screen);

        if let Some(hover) = response.hover_pos()
            && let Some(record) = self.hit_test(records, &geom, to_screen, hover)
        {
            self.draw_tooltip(ui, &geom, to_screen, record);
        }
    }

    fn draw_axes(
        &self,
        painter: &egui::Painter,
        geom: &ChartGeometry,
        origin: egui::Pos2,
        rect: egui::Rect,
    ) {
        let w = geom.layout.drawable_width();
        let h = geom.layout.drawable_height();
        if w <= 0.0 || h <= 0.0 {
            // Degenerate viewport: nothing worth drawing, but never a crash.
            return;
        }

        let axis_color = egui::Color32::DARK_GRAY;
        let stroke = egui::Stroke::new(1.0, axis_color);
        let tick_font = egui::FontId::proportional(self.style.tick_font_px);
        let caption_font = egui::FontId::proportional(self.style.caption_font_px);
        let (wf, hf) = (w as f32, h as f32);

        // Bottom axis with ticks from the horizontal scale.
        painter.line_segment(
            [
                egui::pos2(origin.x, origin.y + hf),
                egui::pos2(origin.x + wf, origin.y + hf),
            ],
            stroke,
        );
        for t in geom.x.ticks(10) {
            let px = origin.x + geom.x.map(t) as f32;
            painter.line_segment(
                [egui::pos2(px, origin.y + hf), egui::pos2(px, origin.y + hf + 5.0)],
                stroke,
            );
            painter.text(
                egui::pos2(px, origin.y + hf + 8.0),
                egui::Align2::CENTER_TOP,
                fmt_tick(t),
                tick_font.clone(),
                axis_color,
            );
        }

        // Left axis with ticks from the vertical scale.
        painter.line_segment(
            [egui::pos2(origin.x, origin.y), egui::pos2(origin.x, origin.y + hf)],
            stroke,
        );
        for t in geom.y.ticks(10) {
            let py = origin.y + geom.y.map(t) as f32;
            painter.line_segment(
                [egui::pos2(origin.x - 5.0, py), egui::pos2(origin.x, py)],
                stroke,
            );
            painter.text(
                egui::pos2(origin.x - 8.0, py),
                egui::Align2::RIGHT_CENTER,
                fmt_tick(t),
                tick_font.clone(),
                axis_color,
            );
        }

        // Horizontal caption centered beneath the bottom axis.
        painter.text(
            egui::pos2(origin.x + wf / 2.0, rect.max.y - 6.0),
            egui::Align2::CENTER_BOTTOM,
            &self.style.x_caption,
            caption_font.clone(),
            axis_color,
        );

        // Vertical caption rotated 90° counter-clockwise, centered along the
        // left margin. The galley anchors at its pre-rotation top-left, so
        // start half the text width below the vertical center.
        let galley = painter.layout_no_wrap(self.style.y_caption.clone(), caption_font, axis_color);
        let pos = egui::pos2(
            rect.min.x + 4.0,
            origin.y + hf / 2.0 + galley.size().x / 2.0,
        );
        painter.add(
            egui::epaint::TextShape::new(pos, galley, axis_color)
                .with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }

    fn draw_markers(
        &self,
        painter: &egui::Painter,
        records: &[CensusRecord],
        geom: &ChartGeometry,
        to_screen: impl Fn((f64, f64)) -> egui::Pos2,
    ) {
        let fill = egui::Color32::from_rgba_unmultiplied(
            self.style.marker_fill.r,
            self.style.marker_fill.g,
            self.style.marker_fill.b,
            (self.style.marker_opacity * 255.0) as u8,
        );
        let label_color = egui::Color32::from_rgb(
            self.style.label_fill.r,
            self.style.label_fill.g,
            self.style.label_fill.b,
        );
        let label_font = egui::FontId::proportional(self.style.label_font_px);

        for record in records {
            let pos = to_screen(geom.position(record));
            if !pos.x.is_finite() || !pos.y.is_finite() {
                // NaN coordinates from malformed rows have nowhere to go.
                continue;
            }
            // Marker and label always together, one pair per record.
            painter.circle_filled(pos, self.style.marker_radius as f32, fill);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                &record.abbr,
                label_font.clone(),
                label_color,
            );
        }
    }

    /// Topmost record whose marker contains the pointer.
    fn hit_test<'a>(
        &self,
        records: &'a [CensusRecord],
        geom: &ChartGeometry,
        to_screen: impl Fn((f64, f64)) -> egui::Pos2,
        pointer: egui::Pos2,
    ) -> Option<&'a CensusRecord> {
        records.iter().rev().find(|r| {
            let pos = to_screen(geom.position(r));
            pos.x.is_finite() && pointer.distance(pos) <= self.style.marker_radius as f32
        })
    }

    fn draw_tooltip(
        &self,
        ui: &egui::Ui,
        geom: &ChartGeometry,
        to_screen: impl Fn((f64, f64)) -> egui::Pos2,
        record: &CensusRecord,
    ) {
        let marker = to_screen(geom.position(record));
        let (dx, dy) = self.style.tooltip_offset;
        let anchor = marker + egui::vec2(dx as f32, dy as f32);

        let painter = ui.painter();
        let font = egui::FontId::proportional(self.style.tick_font_px);
        let galleys: Vec<_> = tooltip::lines(record)
            .into_iter()
            .map(|line| painter.layout_no_wrap(line, font.clone(), egui::Color32::WHITE))
            .collect();

        let pad = 6.0;
        let line_gap = 2.0;
        let width = galleys
            .iter()
            .map(|g| g.size().x)
            .fold(0.0f32, f32::max);
        let height: f32 =
            galleys.iter().map(|g| g.size().y).sum::<f32>() + line_gap * (galleys.len() - 1) as f32;
        let rect = egui::Rect::from_min_size(
            anchor,
            egui::vec2(width + 2.0 * pad, height + 2.0 * pad),
        );

        painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(200));
        let mut y = rect.min.y + pad;
        for galley in galleys {
            painter.galley(egui::pos2(rect.min.x + pad, y), galley.clone(), egui::Color32::WHITE);
            y += galley.size().y + line_gap;
        }
    }
}

fn fmt_tick(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
