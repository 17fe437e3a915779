//! Application shell: route history, page rendering, and the glue between
//! the contact form and the delivery worker.

use std::sync::Arc;
use std::time::{Duration, Instant};

use catalog::filter::{FilterCriteria, FilterMemo, SortMode};
use catalog::Catalog;
use chrono::Datelike;
use contact::{ContactField, ContactForm, SubmissionStatus, SUBMISSION_FAILED_MESSAGE};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{Project, ProjectId};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::theme::{self, Palette};
use crate::ui::widgets;

const OWNER_NAME: &str = "Hamza Lamkhailif";
const OWNER_TAGLINE: &str = "Data Analyst";
const OWNER_EMAIL: &str = "lamkhailifhamza@gmail.com";
const OWNER_LOCATION: &str = "Chefchaouen, Morocco";
const GITHUB_URL: &str = "https://github.com/hamza-lamkhailif";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/hamza-lamkhailif-908333229/";

const ROTATING_ROLES: [&str; 4] = [
    "Data Analyst",
    "SQL Expert",
    "Python Developer",
    "Excel Specialist",
];
const ROLE_ROTATION_SECS: u64 = 2;

const INTRO_BLURB: &str = "Transforming complex data into actionable insights. Specialized in \
    SQL, Python, and Excel to drive data-driven decision making and business growth.";

const ABOUT_BIO: &str = "I'm a data analyst from Chefchaouen, Morocco. I enjoy collecting messy \
    data and turning it into clear, actionable stories. Most of my work happens in SQL, Python, \
    and Excel, from cleaning and aggregation through KPI design and dashboarding. I also build \
    for the web with React and JavaScript, which lets me ship my own analysis tools end to end. \
    I'm currently open to freelance projects, collaborations, and full-time opportunities.";

const ABOUT_SKILLS: [&str; 4] = [
    "SQL & Databases",
    "Web Development (React, JS)",
    "Data Visualization",
    "Problem Solving",
];

const METHODOLOGY_STEPS: [&str; 4] = [
    "Sales data extracted and aggregated using MySQL",
    "KPIs calculated in SQL and validated against Power BI measures",
    "Dashboards designed to analyze performance, trends, and product contribution",
    "Data validation and quality assurance performed throughout",
];

const SUBMISSION_SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// One entry in the route history. Detail routes carry the project id so
/// back and forward restore the exact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    ProjectDetail(ProjectId),
    About,
    Contact,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

/// App-level notice pinned above the page content until dismissed.
#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

/// Top-level application state, driven by [`eframe`] once per frame.
pub struct PortfolioApp {
    // Channels to and from the delivery worker.
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    catalog: Arc<Catalog>,
    maintenance_mode: bool,

    // Browser-style history. `history_index` always points at the current
    // route; entries past it are the forward stack.
    history: Vec<Route>,
    history_index: usize,

    // Per-page view state, reset on page entry.
    criteria: FilterCriteria,
    filter_memo: FilterMemo,
    contact: ContactForm,
    detail_image_index: usize,

    status: String,
    status_banner: Option<StatusBanner>,
    theme_applied: bool,
    started_at: Instant,
}

impl PortfolioApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        catalog: Arc<Catalog>,
        maintenance_mode: bool,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            catalog,
            maintenance_mode,
            history: vec![Route::Home],
            history_index: 0,
            criteria: FilterCriteria::default(),
            filter_memo: FilterMemo::default(),
            contact: ContactForm::new(),
            detail_image_index: 0,
            status: "Ready".to_string(),
            status_banner: None,
            theme_applied: false,
            started_at: Instant::now(),
        }
    }

    fn route(&self) -> Route {
        self.history
            .get(self.history_index)
            .cloned()
            .unwrap_or(Route::Home)
    }

    /// Push a new route, discarding any forward stack, exactly like a
    /// browser address bar. Re-selecting the current route is a no-op.
    fn navigate_to(&mut self, route: Route) {
        if self.route() == route {
            return;
        }
        self.history.truncate(self.history_index + 1);
        self.history.push(route);
        self.history_index = self.history.len().saturating_sub(1);
        self.on_route_entered();
    }

    /// Swap the current history entry in place. Used when a detail page
    /// turns out not to exist, so Back does not return to the broken route.
    fn replace_route(&mut self, route: Route) {
        if let Some(slot) = self.history.get_mut(self.history_index) {
            *slot = route;
        } else {
            self.history.push(route);
            self.history_index = self.history.len().saturating_sub(1);
        }
        self.on_route_entered();
    }

    fn can_go_back(&self) -> bool {
        self.history_index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.history_index + 1 < self.history.len()
    }

    fn go_back(&mut self) {
        if self.can_go_back() {
            self.history_index -= 1;
            self.on_route_entered();
        }
    }

    fn go_forward(&mut self) {
        if self.can_go_forward() {
            self.history_index += 1;
            self.on_route_entered();
        }
    }

    /// Entry hooks fire on every arrival at a page, whether by navigation
    /// or by history traversal. Filters and the contact form never leak
    /// state from an earlier visit.
    fn on_route_entered(&mut self) {
        match self.route() {
            Route::Projects => {
                self.criteria = FilterCriteria::default();
                self.filter_memo = FilterMemo::default();
            }
            Route::Contact => {
                self.contact.reset();
            }
            Route::ProjectDetail(_) => {
                self.detail_image_index = 0;
            }
            Route::Home | Route::About | Route::NotFound => {}
        }
    }

    /// The nav highlights Projects while a detail page is open; a detail
    /// page lives inside the Projects section.
    fn nav_route_is_active(&self, nav: &Route) -> bool {
        match self.route() {
            Route::ProjectDetail(_) => *nav == Route::Projects,
            current => current == *nav,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::WorkerFailed { detail } => {
                    self.status = format!("Delivery worker failed: {detail}");
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: "The contact form is unavailable in this session.".to_string(),
                    });
                }
                UiEvent::ContactDelivered { seq } => {
                    self.contact.record_success(seq);
                    self.status = "Message delivered".to_string();
                }
                UiEvent::ContactFailed { seq, detail } => {
                    tracing::warn!(seq, "contact delivery failed: {detail}");
                    self.contact.record_failure(seq);
                    self.status = "Message delivery failed".to_string();
                }
                UiEvent::ContactResetDue { seq } => {
                    self.contact.expire_success(seq);
                }
            }
        }
    }

    fn submit_contact_form(&mut self) {
        let Some(ticket) = self.contact.begin_submission() else {
            return;
        };
        let seq = ticket.seq;
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SubmitContact(ticket),
            &mut self.status,
        );
        if !queued {
            // The attempt never reached the worker, so fail it here instead
            // of leaving the form stuck in Submitting.
            self.contact.record_failure(seq);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        let palette = theme::palette();
        egui::TopBottomPanel::top("top_nav")
            .frame(
                egui::Frame::new()
                    .fill(palette.panel_background)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let logo = egui::Button::new(
                        egui::RichText::new("HL")
                            .strong()
                            .size(18.0)
                            .color(palette.on_accent_text),
                    )
                    .fill(palette.accent)
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(36.0, 36.0));
                    if ui.add(logo).clicked() {
                        self.navigate_to(Route::Home);
                    }
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(OWNER_NAME)
                                .strong()
                                .color(palette.title_text),
                        );
                        ui.label(
                            egui::RichText::new(OWNER_TAGLINE)
                                .small()
                                .color(palette.muted_text),
                        );
                    });

                    ui.add_space(8.0);
                    let back = widgets::icon_btn("◀", palette.muted_text);
                    if ui.add_enabled(self.can_go_back(), back).clicked() {
                        self.go_back();
                    }
                    let forward = widgets::icon_btn("▶", palette.muted_text);
                    if ui.add_enabled(self.can_go_forward(), forward).clicked() {
                        self.go_forward();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Declared in visual order; the layout fills from
                        // the right, so the list is reversed.
                        let entries = [
                            ("Contact", Route::Contact),
                            ("About", Route::About),
                            ("Projects", Route::Projects),
                            ("Home", Route::Home),
                        ];
                        for (label, route) in entries {
                            let active = self.nav_route_is_active(&route);
                            let text = if active {
                                egui::RichText::new(label).strong().color(palette.accent)
                            } else {
                                egui::RichText::new(label).color(palette.body_text)
                            };
                            let button = egui::Button::new(text)
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE);
                            if ui.add(button).clicked() {
                                self.navigate_to(route);
                            }
                        }
                    });
                });
            });
    }

    fn show_status_strip(&self, ctx: &egui::Context) {
        let palette = theme::palette();
        egui::TopBottomPanel::bottom("status_strip")
            .frame(
                egui::Frame::new()
                    .fill(palette.panel_background)
                    .inner_margin(egui::Margin::symmetric(16, 4)),
            )
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&self.status)
                        .small()
                        .color(palette.hint_text),
                );
            });
    }

    fn show_page(&mut self, ctx: &egui::Context) {
        let palette = theme::palette();
        let route = self.route();
        let scroll_id = match &route {
            Route::Home => "page_home",
            Route::Projects => "page_projects",
            Route::ProjectDetail(_) => "page_project_detail",
            Route::About => "page_about",
            Route::Contact => "page_contact",
            Route::NotFound => "page_not_found",
        };
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.app_background)
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt(scroll_id)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.show_status_banner(ui, &palette);
                        match &route {
                            Route::Home => self.show_home_page(ui, &palette),
                            Route::Projects => self.show_projects_page(ui, &palette),
                            Route::ProjectDetail(project_id) => {
                                self.show_project_detail_page(ui, &palette, project_id)
                            }
                            Route::About => self.show_about_page(ui, &palette),
                            Route::Contact => self.show_contact_page(ui, &palette),
                            Route::NotFound => self.show_not_found_page(ui, &palette),
                        }
                        self.show_footer(ui, &palette);
                    });
            });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let Some(banner) = self.status_banner.clone() else {
            return;
        };
        let (fill, stroke) = match banner.severity {
            StatusBannerSeverity::Error => (palette.error_fill, palette.error_stroke),
        };
        egui::Frame::new()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(palette.title_text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_home_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let elapsed = self.started_at.elapsed().as_secs();
        let mut go: Option<Route> = None;

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Hi, I'm")
                    .size(18.0)
                    .color(palette.muted_text),
            );
            ui.label(
                egui::RichText::new(OWNER_NAME)
                    .strong()
                    .size(34.0)
                    .color(palette.accent),
            );
            ui.label(
                egui::RichText::new(rotating_role(elapsed))
                    .size(20.0)
                    .color(palette.body_text),
            );
            ui.add_space(6.0);
            ui.label(egui::RichText::new(INTRO_BLURB).color(palette.muted_text));
        });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.allocate_ui_with_layout(
                egui::vec2(320.0, 40.0),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    let view_work = egui::Button::new(
                        egui::RichText::new("View Projects")
                            .strong()
                            .color(palette.on_accent_text),
                    )
                    .fill(palette.accent)
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(150.0, 38.0));
                    if ui.add(view_work).clicked() {
                        go = Some(Route::Projects);
                    }
                    let get_in_touch = egui::Button::new(
                        egui::RichText::new("Get In Touch").color(palette.title_text),
                    )
                    .fill(palette.card_background)
                    .stroke(egui::Stroke::new(1.0, palette.stroke_active))
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(150.0, 38.0));
                    if ui.add(get_in_touch).clicked() {
                        go = Some(Route::Contact);
                    }
                },
            );
        });

        ui.add_space(28.0);
        ui.label(
            egui::RichText::new("Featured Projects")
                .strong()
                .size(20.0)
                .color(palette.title_text),
        );
        ui.add_space(8.0);
        let catalog = Arc::clone(&self.catalog);
        let featured: Vec<&Project> = catalog.projects().iter().take(3).collect();
        ui.columns(featured.len().max(1), |columns| {
            for (index, project) in featured.iter().copied().enumerate() {
                if let Some(column) = columns.get_mut(index) {
                    if widgets::project_card(column, palette, project).clicked() {
                        go = Some(Route::ProjectDetail(project.id.clone()));
                    }
                }
            }
        });
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if ui
                .link(egui::RichText::new("View All Projects").color(palette.accent))
                .clicked()
            {
                go = Some(Route::Projects);
            }
        });

        if let Some(route) = go {
            self.navigate_to(route);
        }
    }

    fn show_projects_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.label(
            egui::RichText::new("My Projects")
                .strong()
                .size(26.0)
                .color(palette.title_text),
        );
        ui.label(
            egui::RichText::new(
                "A collection of data analysis projects built with SQL, Python, and \
                 visualization tools.",
            )
            .color(palette.muted_text),
        );
        ui.add_space(12.0);

        let catalog = Arc::clone(&self.catalog);

        ui.horizontal_wrapped(|ui| {
            for category in catalog.categories() {
                let selected = self.criteria.category == category;
                if widgets::category_pill(ui, palette, &category, selected).clicked() {
                    self.criteria.category = category;
                }
            }
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let search = egui::TextEdit::singleline(&mut self.criteria.query)
                .id_salt("projects_search")
                .hint_text(egui::RichText::new("Search projects...").color(palette.hint_text))
                .desired_width(260.0);
            ui.add(search);
            if !self.criteria.query.is_empty()
                && ui.add(widgets::icon_btn("✖", palette.muted_text)).clicked()
            {
                self.criteria.query.clear();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("projects_sort")
                    .selected_text(self.criteria.sort.label())
                    .show_ui(ui, |ui| {
                        for mode in SortMode::ALL {
                            ui.selectable_value(&mut self.criteria.sort, mode, mode.label());
                        }
                    });
                ui.label(
                    egui::RichText::new("Sort by")
                        .small()
                        .color(palette.muted_text),
                );
            });
        });

        ui.add_space(10.0);
        let selected = self.filter_memo.resolve(catalog.projects(), &self.criteria);
        if selected.is_empty() {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No projects match the current filters.")
                        .color(palette.muted_text),
                );
            });
            return;
        }

        ui.label(
            egui::RichText::new(format!("{} of {} projects", selected.len(), catalog.len()))
                .small()
                .color(palette.hint_text),
        );
        ui.add_space(6.0);

        let mut go: Option<Route> = None;
        for row in selected.chunks(2) {
            ui.columns(2, |columns| {
                for (index, project) in row.iter().copied().enumerate() {
                    if let Some(column) = columns.get_mut(index) {
                        if widgets::project_card(column, palette, project).clicked() {
                            go = Some(Route::ProjectDetail(project.id.clone()));
                        }
                    }
                }
            });
            ui.add_space(8.0);
        }
        if let Some(route) = go {
            self.navigate_to(route);
        }
    }

    fn show_project_detail_page(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        project_id: &ProjectId,
    ) {
        let catalog = Arc::clone(&self.catalog);
        let Some(project) = catalog.project(project_id) else {
            tracing::warn!(project = %project_id, "unknown project id, showing not-found page");
            self.replace_route(Route::NotFound);
            self.show_not_found_page(ui, palette);
            return;
        };

        let mut go: Option<Route> = None;

        let back = egui::Button::new(
            egui::RichText::new("← Back to Projects").color(palette.muted_text),
        )
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::NONE);
        if ui.add(back).clicked() {
            go = Some(Route::Projects);
        }
        ui.add_space(8.0);

        ui.label(
            egui::RichText::new(&project.category)
                .small()
                .color(palette.accent),
        );
        ui.label(
            egui::RichText::new(&project.title)
                .strong()
                .size(26.0)
                .color(palette.title_text),
        );
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&project.description).color(palette.body_text));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if let Some(github) = &project.github {
                ui.hyperlink_to(egui::RichText::new("View Code").color(palette.accent), github);
            }
            if let Some(live) = &project.live {
                ui.hyperlink_to(egui::RichText::new("Live Demo").color(palette.accent), live);
            }
        });
        ui.horizontal_wrapped(|ui| {
            for tool in &project.tools {
                widgets::tool_tag(ui, palette, tool);
            }
        });

        if !project.kpis.is_empty() {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Key Metrics")
                    .strong()
                    .size(18.0)
                    .color(palette.title_text),
            );
            ui.add_space(6.0);
            for row in project.kpis.chunks(4) {
                ui.columns(4, |columns| {
                    for (index, entry) in row.iter().enumerate() {
                        if let Some(column) = columns.get_mut(index) {
                            widgets::kpi_tile(column, palette, entry);
                        }
                    }
                });
            }
        }

        if !project.images.is_empty() {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Project Showcase")
                    .strong()
                    .size(18.0)
                    .color(palette.title_text),
            );
            ui.add_space(6.0);
            self.show_image_showcase(ui, palette, project);
        }

        ui.add_space(16.0);
        ui.label(
            egui::RichText::new("Methodology")
                .strong()
                .size(18.0)
                .color(palette.title_text),
        );
        ui.add_space(4.0);
        for step in METHODOLOGY_STEPS {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("•").color(palette.accent));
                ui.label(egui::RichText::new(step).color(palette.body_text));
            });
        }

        if !project.insights.is_empty() {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Key Insights")
                    .strong()
                    .size(18.0)
                    .color(palette.title_text),
            );
            ui.add_space(4.0);
            for (index, insight) in project.insights.iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("{}.", index + 1))
                            .strong()
                            .color(palette.accent),
                    );
                    ui.label(egui::RichText::new(insight).color(palette.body_text));
                });
            }
        }

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            let all = egui::Button::new(
                egui::RichText::new("View All Projects").color(palette.title_text),
            )
            .fill(palette.card_background)
            .stroke(egui::Stroke::new(1.0, palette.stroke_active))
            .corner_radius(egui::CornerRadius::same(8))
            .min_size(egui::vec2(150.0, 36.0));
            if ui.add(all).clicked() {
                go = Some(Route::Projects);
            }
            let discuss = egui::Button::new(
                egui::RichText::new("Discuss Similar Project")
                    .strong()
                    .color(palette.on_accent_text),
            )
            .fill(palette.accent)
            .corner_radius(egui::CornerRadius::same(8))
            .min_size(egui::vec2(190.0, 36.0));
            if ui.add(discuss).clicked() {
                go = Some(Route::Contact);
            }
        });

        if let Some(route) = go {
            self.navigate_to(route);
        }
    }

    // Dashboards ship as exported images on the website; here the showcase
    // renders a named placeholder panel per image with the same pager.
    fn show_image_showcase(&mut self, ui: &mut egui::Ui, palette: &Palette, project: &Project) {
        let count = project.images.len();
        if count == 0 {
            return;
        }
        // A stale index can survive a catalog swap between detail pages.
        self.detail_image_index = self.detail_image_index.min(count - 1);
        let current = self.detail_image_index;

        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 260.0), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(10), palette.card_background);
            ui.painter().rect_stroke(
                rect,
                egui::CornerRadius::same(10),
                egui::Stroke::new(1.0, palette.stroke),
                egui::StrokeKind::Middle,
            );
            let label = project
                .images
                .get(current)
                .map(String::as_str)
                .unwrap_or("dashboard");
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(15.0),
                palette.muted_text,
            );
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.add(widgets::icon_btn("◀", palette.body_text)).clicked() {
                self.detail_image_index = previous_image_index(current, count);
            }
            ui.label(
                egui::RichText::new(format!("{} / {}", current + 1, count))
                    .small()
                    .color(palette.muted_text),
            );
            if ui.add(widgets::icon_btn("▶", palette.body_text)).clicked() {
                self.detail_image_index = next_image_index(current, count);
            }
            ui.add_space(12.0);
            for index in 0..count {
                let selected = index == current;
                let text = if selected {
                    egui::RichText::new((index + 1).to_string())
                        .strong()
                        .color(palette.on_accent_text)
                } else {
                    egui::RichText::new((index + 1).to_string())
                        .small()
                        .color(palette.muted_text)
                };
                let mut pill = egui::Button::new(text)
                    .corner_radius(egui::CornerRadius::same(10))
                    .min_size(egui::vec2(22.0, 22.0));
                pill = if selected {
                    pill.fill(palette.accent).stroke(egui::Stroke::NONE)
                } else {
                    pill.fill(palette.card_background)
                        .stroke(egui::Stroke::new(1.0, palette.stroke))
                };
                if ui.add(pill).clicked() {
                    self.detail_image_index = index;
                }
            }
        });
    }

    fn show_about_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.label(
            egui::RichText::new("About Me")
                .strong()
                .size(26.0)
                .color(palette.title_text),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new(ABOUT_BIO).color(palette.body_text));
        ui.add_space(16.0);
        ui.label(
            egui::RichText::new("What I Do")
                .strong()
                .size(18.0)
                .color(palette.title_text),
        );
        ui.add_space(6.0);
        for row in ABOUT_SKILLS.chunks(2) {
            ui.columns(2, |columns| {
                for (index, skill) in row.iter().enumerate() {
                    if let Some(column) = columns.get_mut(index) {
                        egui::Frame::new()
                            .fill(palette.card_background)
                            .stroke(egui::Stroke::new(1.0, palette.stroke))
                            .corner_radius(egui::CornerRadius::same(8))
                            .inner_margin(egui::Margin::symmetric(12, 10))
                            .show(column, |ui| {
                                ui.label(
                                    egui::RichText::new(*skill)
                                        .strong()
                                        .color(palette.title_text),
                                );
                            });
                    }
                }
            });
            ui.add_space(8.0);
        }
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Email:")
                    .strong()
                    .color(palette.title_text),
            );
            ui.hyperlink_to(
                egui::RichText::new(OWNER_EMAIL).color(palette.accent),
                format!("mailto:{OWNER_EMAIL}"),
            );
        });
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Location:")
                    .strong()
                    .color(palette.title_text),
            );
            ui.label(egui::RichText::new(OWNER_LOCATION).color(palette.body_text));
        });
    }

    fn show_contact_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        ui.vertical_centered(|ui| {
            egui::Frame::new()
                .fill(palette.card_background)
                .corner_radius(14.0)
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new("Get In Touch")
                            .small()
                            .color(palette.accent),
                    );
                });
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new("Let's Start a Conversation")
                    .strong()
                    .size(26.0)
                    .color(palette.title_text),
            );
            ui.label(
                egui::RichText::new(
                    "Have a project in mind or just want to chat about data? I'd love to hear \
                     from you.",
                )
                .color(palette.muted_text),
            );
        });
        ui.add_space(16.0);
        ui.columns(2, |columns| {
            if let Some(column) = columns.get_mut(0) {
                self.show_contact_details(column, palette);
            }
            if let Some(column) = columns.get_mut(1) {
                self.show_contact_form(column, palette);
            }
        });
    }

    fn show_contact_details(&self, ui: &mut egui::Ui, palette: &Palette) {
        ui.label(
            egui::RichText::new("Contact Information")
                .strong()
                .size(18.0)
                .color(palette.title_text),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("📧").size(16.0));
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Email")
                        .small()
                        .color(palette.muted_text),
                );
                ui.hyperlink_to(
                    egui::RichText::new(OWNER_EMAIL).color(palette.accent),
                    format!("mailto:{OWNER_EMAIL}"),
                );
            });
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("📍").size(16.0));
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Location")
                        .small()
                        .color(palette.muted_text),
                );
                ui.label(egui::RichText::new(OWNER_LOCATION).color(palette.body_text));
            });
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("🕑").size(16.0));
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Response Time")
                        .small()
                        .color(palette.muted_text),
                );
                ui.label(egui::RichText::new("Within 24 hours").color(palette.body_text));
            });
        });
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new("Connect With Me")
                .strong()
                .color(palette.title_text),
        );
        ui.hyperlink_to(
            egui::RichText::new("GitHub (@hamza-lamkhailif)").color(palette.accent),
            GITHUB_URL,
        );
        ui.hyperlink_to(
            egui::RichText::new("LinkedIn").color(palette.accent),
            LINKEDIN_URL,
        );
        ui.add_space(12.0);
        egui::Frame::new()
            .fill(palette.panel_background)
            .stroke(egui::Stroke::new(1.0, palette.stroke))
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("●").color(palette.accent));
                    ui.label(
                        egui::RichText::new("Currently Available")
                            .strong()
                            .color(palette.title_text),
                    );
                });
                ui.label(
                    egui::RichText::new(
                        "Open to freelance projects, collaborations, and full-time opportunities.",
                    )
                    .small()
                    .color(palette.muted_text),
                );
            });
    }

    fn show_contact_form(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        egui::Frame::new()
            .fill(palette.card_background)
            .stroke(egui::Stroke::new(1.0, palette.stroke))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::symmetric(14, 12))
            .show(ui, |ui| {
                self.show_form_outcome_banner(ui, palette);

                let submitting = self.contact.status() == SubmissionStatus::Submitting;
                // Enter finishes a single-line field and doubles as Send; the
                // message body keeps Enter for its newlines.
                let mut enter_submitted = false;

                for (field, id, label, hint) in [
                    (ContactField::Name, "contact_name", "Full Name *", "John Doe"),
                    (
                        ContactField::Email,
                        "contact_email",
                        "Email Address *",
                        "john@example.com",
                    ),
                    (
                        ContactField::Subject,
                        "contact_subject",
                        "Subject",
                        "What's this about?",
                    ),
                ] {
                    let response = self.form_text_field(ui, palette, field, id, label, hint);
                    enter_submitted |=
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    ui.add_space(6.0);
                }

                ui.label(
                    egui::RichText::new("Your Message *")
                        .strong()
                        .color(palette.title_text),
                );
                let mut message = self.contact.field(ContactField::Message).to_string();
                let message_edit = egui::TextEdit::multiline(&mut message)
                    .id_salt("contact_message")
                    .hint_text(
                        egui::RichText::new("Tell me about your project or just say hi...")
                            .color(palette.hint_text),
                    )
                    .desired_rows(5)
                    .desired_width(f32::INFINITY);
                let message_response = ui
                    .add_enabled_ui(!submitting, |ui| ui.add(message_edit))
                    .inner;
                if message_response.changed() {
                    self.contact.edit_field(ContactField::Message, message);
                }
                ui.add_space(10.0);

                let submit_requested = enter_submitted && !submitting;

                let send_label = if submitting { "Sending..." } else { "Send Message" };
                let send = egui::Button::new(
                    egui::RichText::new(send_label)
                        .strong()
                        .color(palette.on_accent_text),
                )
                .fill(palette.accent)
                .corner_radius(egui::CornerRadius::same(8))
                .min_size(egui::vec2(ui.available_width(), 38.0));
                if ui.add_enabled(!submitting, send).clicked() || submit_requested {
                    self.submit_contact_form();
                }

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(
                        "By submitting this form, you agree to be contacted via email.",
                    )
                    .small()
                    .color(palette.hint_text),
                );
            });
    }

    fn form_text_field(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        field: ContactField,
        id: &str,
        label: &str,
        hint: &str,
    ) -> egui::Response {
        let submitting = self.contact.status() == SubmissionStatus::Submitting;
        ui.label(egui::RichText::new(label).strong().color(palette.title_text));
        let mut value = self.contact.field(field).to_string();
        let edit = egui::TextEdit::singleline(&mut value)
            .id_salt(id)
            .hint_text(egui::RichText::new(hint).color(palette.hint_text))
            .desired_width(f32::INFINITY);
        let response = ui
            .add_enabled_ui(!submitting, |ui| {
                ui.add_sized([ui.available_width(), 30.0], edit)
            })
            .inner;
        if response.changed() {
            self.contact.edit_field(field, value);
        }
        response
    }

    fn show_form_outcome_banner(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let notice = match self.contact.status() {
            SubmissionStatus::Success => Some((
                palette.success_fill,
                palette.success_stroke,
                SUBMISSION_SUCCESS_MESSAGE.to_string(),
            )),
            SubmissionStatus::Error => Some((
                palette.error_fill,
                palette.error_stroke,
                self.contact
                    .error_message()
                    .unwrap_or(SUBMISSION_FAILED_MESSAGE)
                    .to_string(),
            )),
            // An idle form still shows a pending validation message.
            SubmissionStatus::Idle => self
                .contact
                .error_message()
                .map(|message| (palette.error_fill, palette.error_stroke, message.to_string())),
            SubmissionStatus::Submitting => None,
        };
        let Some((fill, stroke, message)) = notice else {
            return;
        };
        egui::Frame::new()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(message).color(palette.title_text));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.contact.dismiss_outcome();
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_not_found_page(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let mut go: Option<Route> = None;
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("404")
                    .strong()
                    .size(72.0)
                    .color(palette.accent),
            );
            ui.label(
                egui::RichText::new("Page Not Found")
                    .strong()
                    .size(24.0)
                    .color(palette.title_text),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(
                    "Sorry, the page you're looking for doesn't exist, was removed, or is \
                     temporarily unavailable.",
                )
                .color(palette.muted_text),
            );
            ui.add_space(14.0);
            ui.allocate_ui_with_layout(
                egui::vec2(340.0, 40.0),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    let home = egui::Button::new(
                        egui::RichText::new("Go back home")
                            .strong()
                            .color(palette.on_accent_text),
                    )
                    .fill(palette.accent)
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(150.0, 36.0));
                    if ui.add(home).clicked() {
                        go = Some(Route::Home);
                    }
                    let projects = egui::Button::new(
                        egui::RichText::new("Back to Projects").color(palette.title_text),
                    )
                    .fill(palette.card_background)
                    .stroke(egui::Stroke::new(1.0, palette.stroke_active))
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(150.0, 36.0));
                    if ui.add(projects).clicked() {
                        go = Some(Route::Projects);
                    }
                },
            );
        });
        if let Some(route) = go {
            self.navigate_to(route);
        }
    }

    fn show_footer(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let mut go: Option<Route> = None;
        ui.add_space(28.0);
        ui.separator();
        ui.add_space(10.0);
        ui.columns(3, |columns| {
            if let Some(column) = columns.get_mut(0) {
                column.horizontal(|ui| {
                    egui::Frame::new()
                        .fill(palette.accent)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::symmetric(8, 4))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new("HL")
                                    .strong()
                                    .color(palette.on_accent_text),
                            );
                        });
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new(OWNER_NAME)
                                .strong()
                                .color(palette.title_text),
                        );
                        ui.label(
                            egui::RichText::new(OWNER_TAGLINE)
                                .small()
                                .color(palette.muted_text),
                        );
                    });
                });
                column.label(
                    egui::RichText::new(INTRO_BLURB)
                        .small()
                        .color(palette.muted_text),
                );
            }
            if let Some(column) = columns.get_mut(1) {
                column.label(
                    egui::RichText::new("Navigation")
                        .strong()
                        .color(palette.title_text),
                );
                for (label, route) in [
                    ("Home", Route::Home),
                    ("Projects", Route::Projects),
                    ("About", Route::About),
                    ("Contact", Route::Contact),
                ] {
                    if column
                        .link(egui::RichText::new(label).small().color(palette.muted_text))
                        .clicked()
                    {
                        go = Some(route);
                    }
                }
            }
            if let Some(column) = columns.get_mut(2) {
                column.label(
                    egui::RichText::new("Resources")
                        .strong()
                        .color(palette.title_text),
                );
                column.hyperlink_to(
                    egui::RichText::new("GitHub").small().color(palette.muted_text),
                    GITHUB_URL,
                );
                column.hyperlink_to(
                    egui::RichText::new("LinkedIn")
                        .small()
                        .color(palette.muted_text),
                    LINKEDIN_URL,
                );
                column.horizontal(|ui| {
                    ui.label(egui::RichText::new("●").small().color(palette.accent));
                    ui.label(
                        egui::RichText::new("Available for new opportunities")
                            .small()
                            .color(palette.muted_text),
                    );
                });
            }
        });
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "© {} {}. All rights reserved.",
                    current_year(),
                    OWNER_NAME
                ))
                .small()
                .color(palette.hint_text),
            );
        });
        if let Some(route) = go {
            self.navigate_to(route);
        }
    }

    fn show_maintenance_screen(&self, ctx: &egui::Context) {
        let palette = theme::palette();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.app_background))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.25);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("🔧").size(48.0));
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("We're under maintenance")
                            .strong()
                            .size(28.0)
                            .color(palette.title_text),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(
                            "We're making some improvements. Please check back soon.",
                        )
                        .color(palette.muted_text),
                    );
                    ui.add_space(10.0);
                    ui.hyperlink_to(
                        egui::RichText::new(format!("Reach me meanwhile: {OWNER_EMAIL}"))
                            .color(palette.accent),
                        format!("mailto:{OWNER_EMAIL}"),
                    );
                });
            });
    }
}

fn rotating_role(elapsed_secs: u64) -> &'static str {
    let slot = (elapsed_secs / ROLE_ROTATION_SECS) as usize % ROTATING_ROLES.len();
    ROTATING_ROLES[slot]
}

fn next_image_index(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}

fn previous_image_index(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + count - 1) % count
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        if self.maintenance_mode {
            self.show_maintenance_screen(ctx);
            ctx.request_repaint_after(Duration::from_millis(250));
            return;
        }

        self.show_top_bar(ctx);
        self.show_status_strip(ctx);
        self.show_page(ctx);

        // The hero role ticker and the success auto-reset rely on periodic
        // repaints even without input.
        let repaint = if self.contact.status() == SubmissionStatus::Submitting {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };
        ctx.request_repaint_after(repaint);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use catalog::filter::SortMode;
    use catalog::{Catalog, ALL_CATEGORY};
    use contact::{ContactField, SubmissionStatus, SUBMISSION_FAILED_MESSAGE};
    use crossbeam_channel::{bounded, Receiver, Sender};
    use eframe::egui;
    use shared::domain::ProjectId;

    use super::{
        next_image_index, previous_image_index, rotating_role, PortfolioApp, Route, ROTATING_ROLES,
    };
    use crate::backend_bridge::commands::BackendCommand;
    use crate::controller::events::UiEvent;

    fn test_app() -> (PortfolioApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
        let (ui_tx, ui_rx) = bounded::<UiEvent>(8);
        let catalog = Arc::new(Catalog::bundled().expect("bundled catalog loads"));
        let app = PortfolioApp::new(cmd_tx, ui_rx, catalog, false);
        (app, cmd_rx, ui_tx)
    }

    fn fill_valid_form(app: &mut PortfolioApp) {
        app.contact.edit_field(ContactField::Name, "Ada");
        app.contact.edit_field(ContactField::Email, "ada@example.com");
        app.contact.edit_field(ContactField::Message, "Hello there");
    }

    #[test]
    fn navigation_pushes_history_and_clears_the_forward_stack() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::Projects);
        app.navigate_to(Route::About);
        assert_eq!(app.route(), Route::About);

        app.go_back();
        assert_eq!(app.route(), Route::Projects);
        assert!(app.can_go_forward());

        app.navigate_to(Route::Contact);
        assert!(!app.can_go_forward());
        assert_eq!(
            app.history,
            vec![Route::Home, Route::Projects, Route::Contact]
        );
    }

    #[test]
    fn history_traversal_stops_at_both_ends() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        assert!(!app.can_go_back());
        app.go_back();
        assert_eq!(app.route(), Route::Home);

        app.navigate_to(Route::About);
        assert!(!app.can_go_forward());
        app.go_forward();
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn renavigating_to_the_current_route_does_not_grow_history() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::Projects);
        app.navigate_to(Route::Projects);
        assert_eq!(app.history, vec![Route::Home, Route::Projects]);
    }

    #[test]
    fn replacing_a_route_keeps_history_depth() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::ProjectDetail(ProjectId::new("no-such-project")));
        let depth = app.history.len();
        app.replace_route(Route::NotFound);
        assert_eq!(app.history.len(), depth);
        assert_eq!(app.route(), Route::NotFound);
        assert!(app.can_go_back());
    }

    #[test]
    fn entering_projects_resets_filter_criteria() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::Projects);
        app.criteria.category = "SQL Analysis".to_string();
        app.criteria.query = "pizza".to_string();
        app.criteria.sort = SortMode::Title;

        app.navigate_to(Route::Home);
        app.navigate_to(Route::Projects);

        assert_eq!(app.criteria.category, ALL_CATEGORY);
        assert!(app.criteria.query.is_empty());
        assert_eq!(app.criteria.sort, SortMode::Recency);
    }

    #[test]
    fn returning_to_projects_via_history_also_resets_criteria() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::Projects);
        app.criteria.query = "sql".to_string();
        app.navigate_to(Route::About);

        app.go_back();
        assert_eq!(app.route(), Route::Projects);
        assert!(app.criteria.query.is_empty());
    }

    #[test]
    fn entering_contact_resets_the_form() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::Contact);
        app.contact.edit_field(ContactField::Name, "Ada");
        app.navigate_to(Route::Home);
        app.navigate_to(Route::Contact);

        assert!(app.contact.field(ContactField::Name).is_empty());
    }

    #[test]
    fn entering_a_project_detail_resets_the_showcase_index() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::ProjectDetail(ProjectId::new(
            "pizza-sales-dashboard",
        )));
        app.detail_image_index = 2;
        app.navigate_to(Route::ProjectDetail(ProjectId::new(
            "telecom-churn-analysis",
        )));

        assert_eq!(app.detail_image_index, 0);
    }

    #[test]
    fn detail_pages_highlight_the_projects_nav_entry() {
        let (mut app, _cmd_rx, _ui_tx) = test_app();

        app.navigate_to(Route::ProjectDetail(ProjectId::new(
            "pizza-sales-dashboard",
        )));
        assert!(app.nav_route_is_active(&Route::Projects));
        assert!(!app.nav_route_is_active(&Route::Home));
    }

    #[test]
    fn submitting_a_valid_form_queues_one_delivery_command() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.navigate_to(Route::Contact);
        fill_valid_form(&mut app);

        app.submit_contact_form();
        assert_eq!(app.contact.status(), SubmissionStatus::Submitting);
        let BackendCommand::SubmitContact(ticket) = cmd_rx.try_recv().expect("one command queued");
        assert_eq!(ticket.message.name, "Ada");

        // A second attempt while the first is in flight queues nothing.
        app.submit_contact_form();
        assert!(cmd_rx.try_recv().is_err());
    }

    #[test]
    fn an_invalid_form_queues_nothing() {
        let (mut app, cmd_rx, _ui_tx) = test_app();
        app.navigate_to(Route::Contact);
        app.contact.edit_field(ContactField::Name, "Ada");
        app.contact.edit_field(ContactField::Email, "not-an-email");
        app.contact.edit_field(ContactField::Message, "Hello");

        app.submit_contact_form();
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.contact.status(), SubmissionStatus::Idle);
        assert!(app.contact.error_message().is_some());
    }

    #[test]
    fn delivery_outcome_events_drive_the_form() {
        let (mut app, cmd_rx, ui_tx) = test_app();
        fill_valid_form(&mut app);
        app.submit_contact_form();
        let BackendCommand::SubmitContact(ticket) = cmd_rx.try_recv().expect("command queued");

        ui_tx
            .send(UiEvent::ContactDelivered { seq: ticket.seq })
            .expect("event sent");
        app.process_ui_events();
        assert_eq!(app.contact.status(), SubmissionStatus::Success);
        assert!(app.contact.field(ContactField::Name).is_empty());

        ui_tx
            .send(UiEvent::ContactResetDue { seq: ticket.seq })
            .expect("event sent");
        app.process_ui_events();
        assert_eq!(app.contact.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn a_failed_delivery_shows_the_generic_retry_message() {
        let (mut app, cmd_rx, ui_tx) = test_app();
        fill_valid_form(&mut app);
        app.submit_contact_form();
        let BackendCommand::SubmitContact(ticket) = cmd_rx.try_recv().expect("command queued");

        ui_tx
            .send(UiEvent::ContactFailed {
                seq: ticket.seq,
                detail: "endpoint returned HTTP 500".to_string(),
            })
            .expect("event sent");
        app.process_ui_events();

        assert_eq!(app.contact.status(), SubmissionStatus::Error);
        assert_eq!(app.contact.error_message(), Some(SUBMISSION_FAILED_MESSAGE));
        assert_eq!(app.contact.field(ContactField::Name), "Ada");
    }

    #[test]
    fn a_full_command_queue_fails_the_submission_without_losing_fields() {
        // Rendezvous channel with nobody receiving: try_send reports Full.
        let (cmd_tx, _cmd_rx) = bounded::<BackendCommand>(0);
        let (_ui_tx, ui_rx) = bounded::<UiEvent>(8);
        let catalog = Arc::new(Catalog::bundled().expect("bundled catalog loads"));
        let mut app = PortfolioApp::new(cmd_tx, ui_rx, catalog, false);
        fill_valid_form(&mut app);

        app.submit_contact_form();

        assert_eq!(app.contact.status(), SubmissionStatus::Error);
        assert_eq!(app.contact.field(ContactField::Name), "Ada");
        assert!(app.status.contains("full"));
    }

    #[test]
    fn worker_failure_raises_the_app_banner() {
        let (mut app, _cmd_rx, ui_tx) = test_app();

        ui_tx
            .send(UiEvent::WorkerFailed {
                detail: "runtime build failed".to_string(),
            })
            .expect("event sent");
        app.process_ui_events();

        assert!(app.status_banner.is_some());
        assert!(app.status.contains("runtime build failed"));
    }

    #[test]
    fn backend_info_updates_the_status_line() {
        let (mut app, _cmd_rx, ui_tx) = test_app();

        ui_tx
            .send(UiEvent::Info("Delivery worker ready".to_string()))
            .expect("event sent");
        app.process_ui_events();

        assert_eq!(app.status, "Delivery worker ready");
    }

    #[test]
    fn rotating_role_advances_every_two_seconds() {
        assert_eq!(rotating_role(0), ROTATING_ROLES[0]);
        assert_eq!(rotating_role(1), ROTATING_ROLES[0]);
        assert_eq!(rotating_role(2), ROTATING_ROLES[1]);
        assert_eq!(rotating_role(7), ROTATING_ROLES[3]);
        assert_eq!(rotating_role(8), ROTATING_ROLES[0]);
    }

    #[test]
    fn showcase_image_indices_wrap_in_both_directions() {
        assert_eq!(next_image_index(0, 3), 1);
        assert_eq!(next_image_index(2, 3), 0);
        assert_eq!(previous_image_index(0, 3), 2);
        assert_eq!(previous_image_index(2, 3), 1);
        assert_eq!(next_image_index(0, 0), 0);
        assert_eq!(previous_image_index(0, 0), 0);
    }

    // A singleline edit surrenders focus during the frame Enter lands, so the
    // shortcut has to read lost_focus rather than has_focus.
    #[test]
    fn finishing_a_single_line_field_with_enter_triggers_the_submit_gate() {
        let ctx = egui::Context::default();
        let mut text = String::new();

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add(egui::TextEdit::singleline(&mut text).id_salt("subject"))
                    .request_focus();
            });
        });

        let mut input = egui::RawInput::default();
        input.events.push(egui::Event::Key {
            key: egui::Key::Enter,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        });
        let mut submit_requested = false;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(egui::TextEdit::singleline(&mut text).id_salt("subject"));
                submit_requested |=
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            });
        });

        assert!(submit_requested);
    }
}
