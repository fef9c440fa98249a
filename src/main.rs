use iced::event::{self, Event};
use iced::widget::container;
use iced::{window, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

mod analysis;
mod config;
mod imaging;
mod state;
mod ui;

use analysis::{AnalysisError, Analyzer, GeminiClient};
use imaging::Preview;
use state::data::{ImageMime, SelectedImage};
use state::inspection::Inspection;
use ui::strings::Strings;

/// Main application state
struct ThermalInspector {
    /// Selected image, preview and analysis status
    inspection: Inspection,
    /// Where images are sent for analysis
    analyzer: Arc<dyn Analyzer>,
    /// Interface text in the configured language
    strings: &'static Strings,
    /// A file is being dragged over the window
    drag_hover: bool,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the drop zone to open the file picker
    BrowseClicked,
    /// A file is being dragged over the window
    FileHovered,
    /// The dragged file left the window without being dropped
    FileHoverLeft,
    /// A file was dropped on the window
    FileDropped(PathBuf),
    /// User clicked "Analyze"
    AnalyzeClicked,
    /// Background analysis finished (request id, outcome)
    AnalysisComplete(u64, Result<String, AnalysisError>),
    /// The window is going away
    WindowClosed,
}

impl ThermalInspector {
    /// Create a new instance of the application
    fn new(analyzer: Arc<dyn Analyzer>, strings: &'static Strings) -> (Self, Task<Message>) {
        (
            ThermalInspector {
                inspection: Inspection::new(),
                analyzer,
                strings,
                drag_hover: false,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseClicked => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title(self.strings.picker_title)
                    .add_filter(self.strings.picker_filter, &ImageMime::EXTENSIONS)
                    .pick_file();

                if let Some(path) = file {
                    self.select_path(path);
                }

                Task::none()
            }
            Message::FileHovered => {
                self.drag_hover = true;
                Task::none()
            }
            Message::FileHoverLeft => {
                self.drag_hover = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                self.drag_hover = false;
                self.select_path(path);
                Task::none()
            }
            Message::AnalyzeClicked => match self.analysis_job() {
                Some((id, job)) => {
                    Task::perform(job, move |result| Message::AnalysisComplete(id, result))
                }
                None => Task::none(),
            },
            Message::AnalysisComplete(id, result) => {
                self.inspection.complete(id, result);
                Task::none()
            }
            Message::WindowClosed => {
                self.inspection.teardown();
                Task::none()
            }
        }
    }

    /// Picker and drop both land here, so both get the same type check
    fn select_path(&mut self, path: PathBuf) {
        match SelectedImage::from_path(path) {
            Ok(image) => {
                let preview = Preview::from_path(&image.path);
                self.inspection.select_image(image, preview);
            }
            Err(err) => self.inspection.reject_image(err),
        }
    }

    /// Move to `Loading` and build the request future, or `None` if nothing should run
    fn analysis_job(&mut self) -> Option<(u64, impl Future<Output = Result<String, AnalysisError>>)> {
        let ticket = self.inspection.begin_analysis()?;
        let analyzer = Arc::clone(&self.analyzer);
        Some((ticket.id, analysis::run(analyzer, ticket.image)))
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        container(ui::panels::page(&self.inspection, self.strings, self.drag_hover))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Window events: drag-and-drop and close
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            Event::Window(window::Event::Closed) => Some(Message::WindowClosed),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("─── thermal-inspector v{} starting ───", env!("CARGO_PKG_VERSION"));

    // Without a key the app cannot do anything, so refuse to start
    let config = match config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Cannot start: {}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Model: {}, API: {}, locale: {:?}",
        config.settings.model,
        config.settings.api_base_url,
        config.settings.locale
    );

    let strings = Strings::for_locale(config.settings.locale);
    let analyzer: Arc<dyn Analyzer> = Arc::new(GeminiClient::new(config.analysis));

    iced::application(strings.title, ThermalInspector::update, ThermalInspector::view)
        .subscription(ThermalInspector::subscription)
        .theme(ThermalInspector::theme)
        .window_size((1100.0, 800.0))
        .centered()
        .run_with(move || ThermalInspector::new(analyzer, strings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::testing::MockAnalyzer;
    use state::inspection::Status;
    use ui::strings::Locale;

    const PNG_BYTES: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn app_with(mock: Arc<MockAnalyzer>) -> ThermalInspector {
        ThermalInspector::new(mock, Strings::for_locale(Locale::English)).0
    }

    fn png_on_disk(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("thermal-app-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, PNG_BYTES).unwrap();
        path
    }

    /// Click analyze and drive the request to completion
    async fn analyze(app: &mut ThermalInspector) {
        let (id, job) = app.analysis_job().expect("analysis should start");
        assert!(app.inspection.is_loading());
        let result = job.await;
        let _ = app.update(Message::AnalysisComplete(id, result));
    }

    #[tokio::test]
    async fn test_successful_analysis_shows_exact_text() {
        let reply = "- Transformer bushing: High Concern - loose connection";
        let mock = MockAnalyzer::replying(reply);
        let mut app = app_with(mock.clone());

        let _ = app.update(Message::FileDropped(png_on_disk("photo.png")));
        assert!(app.inspection.can_analyze());

        analyze(&mut app).await;

        assert_eq!(app.inspection.result().unwrap().text, reply);
        assert!(!app.inspection.is_loading());
        assert!(app.inspection.error().is_none());
        assert_eq!(mock.call_count(), 1);
    }

    #[test]
    fn test_analyze_without_image_makes_no_call() {
        let mock = MockAnalyzer::replying("unused");
        let mut app = app_with(mock.clone());

        let _ = app.update(Message::AnalyzeClicked);

        assert_eq!(app.inspection.error(), Some(&AnalysisError::NoImageSelected));
        assert_eq!(
            app.strings.error_message(app.inspection.error().unwrap()),
            "Please select an image first"
        );
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_generic_message() {
        let mock = MockAnalyzer::failing(AnalysisError::AnalysisFailed(
            "request to AI service failed: connection reset".into(),
        ));
        let mut app = app_with(mock);

        let _ = app.update(Message::FileDropped(png_on_disk("failing.png")));
        analyze(&mut app).await;

        let err = app.inspection.error().expect("error should be shown");
        let message = app.strings.error_message(err);
        assert!(message.starts_with("Analysis failed"));
        assert!(!app.inspection.is_loading());
        assert!(app.inspection.result().is_none());
    }

    #[tokio::test]
    async fn test_second_image_clears_previous_result() {
        let mut app = app_with(MockAnalyzer::replying("- Normal"));

        let _ = app.update(Message::FileDropped(png_on_disk("first.png")));
        analyze(&mut app).await;
        assert!(app.inspection.result().is_some());

        let _ = app.update(Message::FileDropped(png_on_disk("second.png")));

        assert_eq!(app.inspection.status(), &Status::Ready);
        assert_eq!(app.inspection.image().unwrap().name, "second.png");
    }

    #[test]
    fn test_dropped_file_of_wrong_type_is_rejected() {
        let mut app = app_with(MockAnalyzer::replying("unused"));

        let _ = app.update(Message::FileHovered);
        assert!(app.drag_hover);
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/wiring.pdf")));

        assert!(!app.drag_hover);
        assert!(matches!(app.inspection.error(), Some(AnalysisError::UnsupportedImage(_))));
        assert!(!app.inspection.can_analyze());
    }

    #[test]
    fn test_window_close_releases_preview() {
        let mut app = app_with(MockAnalyzer::replying("unused"));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/panel.jpg")));
        assert!(app.inspection.preview().is_some());

        let _ = app.update(Message::WindowClosed);

        assert!(app.inspection.preview().is_none());
    }
}
