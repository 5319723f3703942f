use iced::widget::{column, container, scrollable, text, text_editor};
use iced::{Element, Length, Task, Theme};

mod settings;
mod state;
mod ui;

use settings::Settings;
use state::data::Category;
use state::filter::{CategoryFilter, FilterState, SortBy};
use state::library::Library;
use state::post::{ContentKind, DraftError, PostDraft, PostPreview};
use state::profile::{Experience, ProfileError, ProfileForm};

/// Top-level pages reachable from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Profile,
    Create,
}

/// Tabs of the Create page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftTab {
    #[default]
    Product,
    Content,
}

/// Main application state
struct ArtisanMarket {
    /// The seeded catalog plus this session's favorites
    library: Library,
    settings: Settings,
    page: Page,
    /// Replaced on every catalog event, never mutated in place
    filter: FilterState,
    /// How many filtered artworks are currently revealed
    visible: usize,

    profile: ProfileForm,
    summary: Option<String>,
    profile_error: Option<ProfileError>,

    draft: PostDraft,
    draft_tab: DraftTab,
    image_input: String,
    /// Editor buffer mirrored into `draft.content`
    content: text_editor::Content,
    draft_error: Option<DraftError>,
    preview: Option<PostPreview>,
    preview_stamp: String,

    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Background settings load finished
    SettingsLoaded(Settings),
    Navigate(Page),

    // Artworks page
    SearchChanged(String),
    /// Category chip clicked, by display name
    CategorySelected(String),
    SortSelected(SortBy),
    ClearFilters,
    LoadMore,
    ToggleFavorite(String),

    // Profile page
    NameChanged(String),
    AgeChanged(String),
    LocationChanged(String),
    SkillsChanged(String),
    ExperienceSelected(Experience),
    InterestToggled(&'static str),
    GenerateSummary,

    // Create page
    DraftTabSelected(DraftTab),
    ProductNameChanged(String),
    DraftCategorySelected(Category),
    DescriptionChanged(String),
    PriceChanged(String),
    ImageInputChanged(String),
    AddImage,
    RemoveImage(usize),
    ContentKindSelected(ContentKind),
    GenerateContent,
    ContentEdited(text_editor::Action),
    PreviewPost,
    PublishPost,
}

impl ArtisanMarket {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let library = Library::seeded();
        if library.is_empty() {
            log::warn!("Catalog is empty");
        }
        log::info!("🎨 Artisan Market initialized with {} artworks", library.len());

        let settings = Settings::default();
        let settings_path = Settings::path();
        let status = format!("Loading settings from {}", settings::describe(settings_path.as_deref()));

        let app = ArtisanMarket {
            library,
            visible: settings.page_size,
            filter: FilterState::default().with_sort(settings.default_sort),
            settings,
            page: Page::Catalog,
            profile: ProfileForm::default(),
            summary: None,
            profile_error: None,
            draft: PostDraft::default(),
            draft_tab: DraftTab::default(),
            image_input: String::new(),
            content: text_editor::Content::new(),
            draft_error: None,
            preview: None,
            preview_stamp: String::new(),
            status,
        };

        (
            app,
            Task::perform(settings::load_or_default(settings_path), Message::SettingsLoaded),
        )
    }

    /// Swap in a new filter state and start paging from the top again
    fn set_filter(&mut self, filter: FilterState) {
        log::debug!("Filter changed: {:?}", filter);
        self.filter = filter;
        self.visible = self.settings.page_size;
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SettingsLoaded(settings) => {
                if let Ok(json) = settings.to_json() {
                    log::debug!("Effective settings: {}", json);
                }
                let filter = self.filter.clone().with_sort(settings.default_sort);
                self.settings = settings;
                self.set_filter(filter);
                self.status = format!("Ready. {} artworks in the catalog.", self.library.len());
            }
            Message::Navigate(page) => {
                log::debug!("Navigating to {:?}", page);
                self.page = page;
            }

            Message::SearchChanged(search) => {
                self.set_filter(self.filter.clone().with_search(search));
            }
            Message::CategorySelected(name) => {
                let category = CategoryFilter::parse(&name);
                self.set_filter(self.filter.clone().with_category(category));
            }
            Message::SortSelected(sort) => {
                self.set_filter(self.filter.clone().with_sort(sort));
            }
            Message::ClearFilters => {
                self.set_filter(self.filter.clone().cleared());
            }
            Message::LoadMore => {
                self.visible += self.settings.page_size;
            }
            Message::ToggleFavorite(id) => {
                let favorite = self.library.toggle_favorite(&id);
                log::debug!("Listing {} favorite: {}", id, favorite);
            }

            Message::NameChanged(name) => self.profile.name = name,
            Message::AgeChanged(age) => self.profile.age = age,
            Message::LocationChanged(location) => self.profile.location = location,
            Message::SkillsChanged(skills) => self.profile.skills = skills,
            Message::ExperienceSelected(experience) => self.profile.experience = Some(experience),
            Message::InterestToggled(interest) => self.profile.toggle_interest(interest),
            Message::GenerateSummary => match self.profile.summary() {
                Ok(summary) => {
                    log::info!("Generated profile summary for {}", self.profile.name.trim());
                    self.summary = Some(summary);
                    self.profile_error = None;
                }
                Err(e) => {
                    log::debug!("Profile incomplete: {}", e);
                    self.profile_error = Some(e);
                }
            },

            Message::DraftTabSelected(tab) => self.draft_tab = tab,
            Message::ProductNameChanged(name) => self.draft.product_name = name,
            Message::DraftCategorySelected(category) => self.draft.category = Some(category),
            Message::DescriptionChanged(description) => self.draft.description = description,
            Message::PriceChanged(price) => self.draft.price = price,
            Message::ImageInputChanged(input) => self.image_input = input,
            Message::AddImage => {
                if self.draft.add_image(&self.image_input) {
                    self.image_input.clear();
                }
            }
            Message::RemoveImage(index) => {
                self.draft.remove_image(index);
            }
            Message::ContentKindSelected(kind) => self.draft.kind = kind,
            Message::GenerateContent => match self.draft.generate(self.draft.kind) {
                Ok(generated) => {
                    log::info!("Generated {} for \"{}\"", self.draft.kind, self.draft.product_name.trim());
                    self.content = text_editor::Content::with_text(&generated);
                    self.draft.content = generated;
                    self.draft_error = None;
                }
                Err(e) => self.draft_error = Some(e),
            },
            Message::ContentEdited(action) => {
                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.draft.content = self.content.text();
                }
            }
            Message::PreviewPost => match self.draft.preview() {
                Ok(preview) => {
                    self.preview_stamp = chrono::Local::now().format("%B %-d, %Y").to_string();
                    self.preview = Some(preview);
                    self.draft_error = None;
                }
                Err(e) => {
                    self.preview = None;
                    self.draft_error = Some(e);
                }
            },
            Message::PublishPost => {
                if let Some(preview) = &self.preview {
                    log::info!("🚀 Post ready: \"{}\" ({})", preview.product_name, preview.category);
                    self.status = format!("\"{}\" is ready to share.", preview.product_name);
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.page {
            Page::Catalog => ui::catalog::view(&self.library, &self.filter, self.visible),
            Page::Profile => ui::profile::view(
                &self.profile,
                self.summary.as_deref(),
                self.profile_error.as_ref(),
                self.library.favorite_count(),
            ),
            Page::Create => ui::create::view(ui::create::CreateView {
                draft: &self.draft,
                tab: self.draft_tab,
                image_input: &self.image_input,
                content: &self.content,
                error: self.draft_error.as_ref(),
                preview: self
                    .preview
                    .as_ref()
                    .map(|preview| (preview, self.preview_stamp.as_str())),
            }),
        };

        column![
            ui::header::view(self.page),
            scrollable(container(page).padding(24).width(Length::Fill)).height(Length::Fill),
            container(text(&self.status).size(14)).padding([6, 20]),
        ]
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.settings.theme.theme()
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application("Artisan Market", ArtisanMarket::update, ArtisanMarket::view)
        .theme(ArtisanMarket::theme)
        .centered()
        .run_with(ArtisanMarket::new)
}
