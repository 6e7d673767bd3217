use iced::widget::{column, text_input, Stack};
use iced::{event, keyboard, time, touch, window, Element, Length, Subscription, Task, Theme};
use std::time::{Duration, Instant};

mod config;
mod error;
mod input;
mod photo;
mod state;
mod ui;

use chrono::Datelike;
use config::GalleryConfig;
use error::LoadError;
use input::{KeyIntent, SwipeDirection, SwipeTracker};
use photo::{load_photo, LoadPurpose, LoadedPhoto, PhotoCache};
use state::collection::PhotoCollection;
use state::gate::{Gate, GATE_HIDE_DELAY_MS};
use state::lightbox::{Lightbox, SlideshowChange, SLIDESHOW_INTERVAL};
use state::store::Store;
use ui::confetti::Confetti;

/// Main application state
struct Gallery {
    config: GalleryConfig,
    /// Persisted flags (gate result)
    store: Store,
    gate: Gate,
    /// Working and original photo order
    collection: PhotoCollection,
    lightbox: Lightbox,
    /// Decoded thumbnails and lightbox frames
    cache: PhotoCache,
    swipe: SwipeTracker,
    /// Celebration effect, present only while it plays
    confetti: Option<Confetti>,
    /// Year shown in the footer
    year: i32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    GateInputChanged(String),
    GateSubmit,
    /// Exit transition of the gate finished
    GateHidden,
    /// Grid tile clicked at this position in the current order
    OpenLightbox(usize),
    CloseLightbox,
    Prev,
    Next,
    ToggleSlideshow,
    SlideshowTick,
    Shuffle,
    Reset,
    Key(KeyIntent),
    Touch(touch::Event),
    PhotoLoaded {
        id: u32,
        purpose: LoadPurpose,
        result: Result<LoadedPhoto, LoadError>,
    },
    ConfettiFrame(Instant),
    /// Swallowed event (clicks on lightbox content, scrolls over overlays)
    Noop,
}

impl Gallery {
    /// Create the gallery and start decoding every tile's thumbnail
    fn new(config: GalleryConfig, store: Store) -> (Self, Task<Message>) {
        let gate = Gate::from_store(&store);
        let collection = PhotoCollection::from_config(&config);

        tracing::info!(
            "🎨 Gallery initialized with {} photos from {}",
            collection.len(),
            config.photos_dir.display()
        );

        let mut gallery = Gallery {
            config,
            store,
            gate,
            collection,
            lightbox: Lightbox::new(),
            cache: PhotoCache::new(),
            swipe: SwipeTracker::new(),
            confetti: None,
            year: chrono::Local::now().year(),
        };

        let mut tasks = vec![gallery.load_thumbnails()];
        if gallery.gate.is_locked() {
            tasks.push(text_input::focus(ui::gate::answer_input_id()));
        }

        (gallery, Task::batch(tasks))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let len = self.collection.len();

        match message {
            Message::GateInputChanged(value) => {
                self.gate.set_input(value);
                Task::none()
            }
            Message::GateSubmit => {
                let was_locked = self.gate.is_locked();
                let answer = self.gate.input().to_string();
                let outcome = self.gate.check(&answer, &self.store);

                if outcome.accepted && was_locked {
                    self.confetti = Some(Confetti::new(&mut rand::rng(), Instant::now()));
                    return Task::perform(
                        async {
                            tokio::time::sleep(Duration::from_millis(GATE_HIDE_DELAY_MS)).await;
                        },
                        |_| Message::GateHidden,
                    );
                }
                Task::none()
            }
            Message::GateHidden => {
                self.gate.finish_unlock();
                Task::none()
            }
            Message::OpenLightbox(index) => {
                if self.lightbox.open(index, len) {
                    self.show_current()
                } else {
                    Task::none()
                }
            }
            Message::CloseLightbox => {
                self.close_lightbox();
                Task::none()
            }
            Message::Prev => self.navigate(SwipeDirection::Prev),
            Message::Next => self.navigate(SwipeDirection::Next),
            Message::ToggleSlideshow => match self.lightbox.toggle_slideshow(len) {
                SlideshowChange::Started => self.show_current(),
                SlideshowChange::Stopped | SlideshowChange::Unavailable => Task::none(),
            },
            Message::SlideshowTick => {
                if self.lightbox.tick(len).is_some() {
                    self.show_current()
                } else {
                    Task::none()
                }
            }
            Message::Shuffle => {
                self.collection.shuffle(&mut rand::rng());
                tracing::debug!("🔀 Shuffled {} photos", len);
                self.refresh_open_lightbox()
            }
            Message::Reset => {
                self.collection.reset();
                tracing::debug!("↩️  Restored original order");
                self.refresh_open_lightbox()
            }
            Message::Key(intent) => {
                if !self.lightbox.is_open() {
                    return Task::none();
                }
                match intent {
                    KeyIntent::Close => {
                        self.close_lightbox();
                        Task::none()
                    }
                    KeyIntent::Prev => self.navigate(SwipeDirection::Prev),
                    KeyIntent::Next => self.navigate(SwipeDirection::Next),
                    KeyIntent::ToggleSlideshow => self.update(Message::ToggleSlideshow),
                }
            }
            Message::Touch(event) => {
                if !self.lightbox.is_open() {
                    return Task::none();
                }
                match self.swipe.handle(event) {
                    Some(direction) => self.navigate(direction),
                    None => Task::none(),
                }
            }
            Message::PhotoLoaded { id, purpose, result } => {
                match purpose {
                    LoadPurpose::Tile => self.cache.finish_thumbnail(id, result),
                    LoadPurpose::Frame | LoadPurpose::Preload => {
                        let current = self.current_photo().map(|photo| photo.id);
                        let window = self.frame_window();
                        self.cache.finish_frame(id, result, current, &window);
                    }
                }
                Task::none()
            }
            Message::ConfettiFrame(now) => {
                if let Some(confetti) = &mut self.confetti {
                    confetti.advance(now);
                    if confetti.is_expired() {
                        self.confetti = None;
                    }
                }
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page = column![
            ui::header::view(&self.config, self.lightbox.is_slideshow()),
            ui::grid::view(self.collection.photos(), &self.cache),
            ui::header::footer(self.year),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        let mut layers: Vec<Element<Message>> = vec![page.into()];

        if let Some(photo) = self.current_photo() {
            layers.push(ui::lightbox::view(photo, &self.cache, self.lightbox.is_slideshow()));
        }

        if self.gate.is_visible() {
            layers.push(ui::gate::view(&self.gate, &self.config.for_name));
        }

        if let Some(confetti) = &self.confetti {
            layers.push(
                iced::widget::canvas(confetti)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into(),
            );
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Keyboard and touch only matter while the lightbox is open; the
    /// slideshow timer only exists while the slideshow runs.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        if self.lightbox.is_open() {
            subscriptions.push(keyboard::on_key_press(input::on_key_press));
            subscriptions.push(event::listen_with(input::on_touch));
        }

        if self.lightbox.is_slideshow() {
            subscriptions.push(time::every(SLIDESHOW_INTERVAL).map(|_| Message::SlideshowTick));
        }

        if self.confetti.is_some() {
            subscriptions.push(window::frames().map(Message::ConfettiFrame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn current_photo(&self) -> Option<&state::data::PhotoRecord> {
        self.lightbox
            .current()
            .and_then(|index| self.collection.get(index))
    }

    /// Ids of the current photo and its two neighbours
    fn frame_window(&self) -> Vec<u32> {
        let len = self.collection.len();
        let mut window = Vec::with_capacity(3);
        if let Some(photo) = self.current_photo() {
            window.push(photo.id);
        }
        if let Some((prev, next)) = self.lightbox.neighbors(len) {
            for index in [prev, next] {
                if let Some(photo) = self.collection.get(index) {
                    window.push(photo.id);
                }
            }
        }
        window
    }

    fn navigate(&mut self, direction: SwipeDirection) -> Task<Message> {
        let len = self.collection.len();
        let moved = match direction {
            SwipeDirection::Prev => self.lightbox.prev(len),
            SwipeDirection::Next => self.lightbox.next(len),
        };
        match moved {
            Some(_) => self.show_current(),
            None => Task::none(),
        }
    }

    fn close_lightbox(&mut self) {
        self.lightbox.close();
        self.cache.clear_frames();
    }

    fn refresh_open_lightbox(&mut self) -> Task<Message> {
        if self.lightbox.is_open() {
            self.show_current()
        } else {
            Task::none()
        }
    }

    /// Load the current frame if needed and preload both neighbours.
    /// Frames outside the window are evicted; preloads are fire-and-forget.
    fn show_current(&mut self) -> Task<Message> {
        let window = self.frame_window();
        self.cache.retain_frames(&window);

        let Some(current) = self.current_photo().cloned() else {
            return Task::none();
        };

        let mut tasks = Vec::new();
        if self.cache.begin_frame(current.id) {
            tasks.push(load_task(current.id, current.src.clone(), LoadPurpose::Frame));
        }

        let len = self.collection.len();
        if let Some((prev, next)) = self.lightbox.neighbors(len) {
            for index in [prev, next] {
                let Some(photo) = self.collection.get(index) else {
                    continue;
                };
                if self.cache.begin_frame(photo.id) {
                    tasks.push(load_task(photo.id, photo.src.clone(), LoadPurpose::Preload));
                }
            }
        }

        Task::batch(tasks)
    }

    fn load_thumbnails(&mut self) -> Task<Message> {
        let pending: Vec<(u32, std::path::PathBuf)> = self
            .collection
            .photos()
            .iter()
            .map(|photo| (photo.id, photo.src.clone()))
            .collect();

        let tasks = pending
            .into_iter()
            .filter(|(id, _)| self.cache.begin_thumbnail(*id))
            .map(|(id, src)| load_task(id, src, LoadPurpose::Tile))
            .collect::<Vec<_>>();

        Task::batch(tasks)
    }
}

fn load_task(id: u32, src: std::path::PathBuf, purpose: LoadPurpose) -> Task<Message> {
    Task::perform(load_photo(src, purpose), move |result| Message::PhotoLoaded {
        id,
        purpose,
        result,
    })
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open the on-disk store, falling back to a session-only one.
/// The failure is reported once here and never retried.
fn open_store() -> Store {
    match Store::open_default() {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store, gate result will not persist: {}", e);
            match Store::open_in_memory() {
                Ok(store) => store,
                Err(e) => {
                    tracing::error!("Failed to open in-memory store: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn main() -> iced::Result {
    init_tracing();

    let config = GalleryConfig::load(&GalleryConfig::default_path()).unwrap_or_else(|e| {
        tracing::error!("Failed to load config, using defaults: {}", e);
        GalleryConfig::default()
    });
    let store = open_store();

    iced::application("Moments", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .centered()
        .run_with(move || Gallery::new(config, store))
}
