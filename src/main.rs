//! `evently` command-line front end.
//!
//! Each subcommand is one page visit: the session is restored from local
//! storage, the page is entered through the navigation rules, and its data
//! is printed as plain text.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use evently::adapters::{ApiClient, FileLocalStorage, HttpAuthApi, HttpEventsApi};
use evently::application::{
    App, BrowseEventsHandler, EventDetailsHandler, GalleryHandler, HomeFeedHandler, PageError,
    SessionStore,
};
use evently::config::{AppConfig, ConfigError, LoggingConfig};
use evently::domain::event::{Event, FilterCriteria};
use evently::domain::foundation::datetime::{format_date, format_long_date, format_time};
use evently::domain::navigation::{Page, EVENT_DETAILS_PREFIX};
use evently::domain::user::{LoginForm, RegistrationForm, COURSES};
use evently::ports::EventsApi;

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Discover and explore campus events", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the signed-in user and the starting page
    Status,

    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create a student account
    Register(RegisterArgs),

    /// Sign out and forget the stored session
    Logout,

    /// Featured and latest events
    Home(FilterArgs),

    /// All events, filtered
    Browse {
        #[command(flatten)]
        filter: FilterArgs,

        /// Also list trending events
        #[arg(long)]
        trending: bool,
    },

    /// Event banners as a gallery
    Gallery,

    /// Details for one event
    Event {
        /// Event slug
        slug: String,
    },

    /// Resolve a page name the way the app would and report where it lands
    Open {
        /// Page name, e.g. `browse` or `event-details-<slug>`
        page: String,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive text matched against title, description and venue
    #[arg(long, default_value = "")]
    search: String,

    /// Category name, or `all`
    #[arg(long, default_value = "all")]
    category: String,

    /// online, offline, hybrid, or `all`
    #[arg(long, default_value = "all")]
    mode: String,
}

impl FilterArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_search(&self.search)
            .with_category(&self.category)
            .with_mode(&self.mode)
    }
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    enrollment: String,
    #[arg(long)]
    college: String,
    /// One of B.Tech, BBA, BCA, MBA, M.Tech, B.Sc, M.Sc, BA, MA
    #[arg(long)]
    course: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

impl From<RegisterArgs> for RegistrationForm {
    fn from(args: RegisterArgs) -> Self {
        RegistrationForm {
            name: args.name,
            email: args.email,
            phone_number: args.phone,
            enrollment_number: args.enrollment,
            clg_name: args.college,
            course: args.course,
            password: args.password,
            confirm_password: args.confirm_password,
        }
    }
}

/// Everything a command needs, wired from configuration.
struct Context {
    app: App,
    events: Arc<dyn EventsApi>,
}

fn build(config: &AppConfig) -> Result<Context, PageError> {
    let storage = Arc::new(FileLocalStorage::in_dir(&config.storage.data_dir));
    let store = Arc::new(SessionStore::new(storage));
    let client = ApiClient::from_config(&config.api, store.clone())?;

    let auth = Arc::new(HttpAuthApi::new(client.clone()));
    let events: Arc<dyn EventsApi> = Arc::new(HttpEventsApi::new(client));

    Ok(Context {
        app: App::start(store, auth),
        events,
    })
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    let mut ctx = match build(&config) {
        Ok(ctx) => ctx,
        Err(e) => return report(&e),
    };

    match run(cli.command, &mut ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

async fn run(command: Commands, ctx: &mut Context) -> Result<(), PageError> {
    match command {
        Commands::Status => {
            match ctx.app.session() {
                Some(session) => {
                    let user = session.user();
                    println!("Signed in as {} [{}]", user.display_name(), user.initial());
                    if let Some(email) = user.email() {
                        println!("Email: {email}");
                    }
                }
                None => println!("Not signed in"),
            }
            println!("Start page: {}", ctx.app.state().current_page());
        }

        Commands::Login { email, password } => {
            ctx.app.navigate(Page::Login.as_str());
            let session = ctx.app.login(&LoginForm::new(email, password)).await?;
            println!("Welcome back, {}!", session.user().display_name());
            println!("Now on: {}", ctx.app.state().current_page());
        }

        Commands::Register(args) => {
            ctx.app.navigate(Page::Register.as_str());
            let session = ctx.app.register(&args.into()).await?;
            println!("Welcome, {}!", session.user().display_name());
            println!("Now on: {}", ctx.app.state().current_page());
        }

        Commands::Logout => {
            let state = ctx.app.logout().await;
            println!("Signed out. Now on: {}", state.current_page());
        }

        Commands::Home(filter) => {
            ctx.app.enter(Page::Home.as_str(), Page::Home)?;
            let feed = HomeFeedHandler::new(ctx.events.clone()).handle().await?;
            let view = feed.filtered(&filter.criteria());

            print_section("Featured events", &view.featured);
            print_section("Upcoming events", &view.latest);
            let categories = feed.categories();
            if !categories.is_empty() {
                println!("\nCategories: {}", categories.join(", "));
            }
            let suggestions = feed.suggestions(&filter.search);
            if !suggestions.is_empty() {
                println!("Suggestions: {}", suggestions.join(", "));
            }
        }

        Commands::Browse { filter, trending } => {
            ctx.app.enter(Page::Browse.as_str(), Page::Browse)?;
            let handler = BrowseEventsHandler::new(ctx.events.clone());
            let page = handler.handle(&filter.criteria()).await?;

            print_section(
                &format!("Events ({} of {})", page.filtered.len(), page.events.len()),
                &page.filtered,
            );
            if trending {
                print_section("Trending events", &handler.trending().await?);
            }
        }

        Commands::Gallery => {
            ctx.app.enter(Page::Gallery.as_str(), Page::Gallery)?;
            let items = GalleryHandler::new(ctx.events.clone()).handle().await?;
            if items.is_empty() {
                println!("No photos yet.");
            }
            for item in items {
                println!("{}  {}  ({})", item.title, item.image_url, item.slug);
            }
        }

        Commands::Event { slug } => {
            ctx.app
                .enter(&format!("{EVENT_DETAILS_PREFIX}{slug}"), Page::EventDetails)?;
            show_event(ctx, &slug).await?;
        }

        Commands::Open { page } => {
            let state = ctx.app.navigate(&page).clone();
            println!("Requested: {page}");
            println!("Landed on: {}", state.current_page());
            if let Some(slug) = state.slug() {
                println!("Event: {slug}");
            }
            if !ctx.app.can_render() {
                println!("Sign in to view this page.");
            } else if let Some(slug) = state.slug() {
                show_event(ctx, slug).await?;
            }
        }
    }

    Ok(())
}

async fn show_event(ctx: &Context, slug: &str) -> Result<(), PageError> {
    let event = EventDetailsHandler::new(ctx.events.clone()).handle(slug).await?;

    println!("{}", event.title);
    println!("{}", "=".repeat(event.title.chars().count()));
    println!("Date:     {}", format_long_date(event.start_datetime.as_deref()));
    println!(
        "Time:     {} - {}",
        format_time(event.start_datetime.as_deref()),
        format_time(event.end_datetime.as_deref())
    );
    println!("Venue:    {}", event.venue.as_deref().unwrap_or("TBA"));
    if let Some(category) = event.category_name() {
        println!("Category: {category}");
    }
    if let Some(mode) = &event.mode {
        println!("Mode:     {mode}");
    }
    if let Some(max) = event.max_participants {
        println!("Capacity: {max}");
    }
    if event.registration_deadline.is_some() {
        println!(
            "Register by: {}",
            format_date(event.registration_deadline.as_deref())
        );
    }
    if let Some(link) = &event.meeting_link {
        println!("Join:     {link}");
    }
    if let Some(description) = &event.description {
        println!("\n{description}");
    }
    Ok(())
}

fn print_section(title: &str, events: &[Event]) {
    println!("\n{title}");
    if events.is_empty() {
        println!("  (none)");
    }
    for event in events {
        println!(
            "  {}  {} {}  {}  [{}]",
            event.title,
            format_date(event.start_datetime.as_deref()),
            format_time(event.start_datetime.as_deref()),
            event.venue.as_deref().unwrap_or("TBA"),
            event.category_name().unwrap_or("General"),
        );
    }
}

fn report(err: &PageError) -> ExitCode {
    eprintln!("{}", err.banner());
    if let Some(errors) = err.field_errors() {
        for field in errors.fields() {
            if let Some(message) = errors.first(field) {
                eprintln!("  {field}: {message}");
            }
        }
        if errors.contains("course") {
            eprintln!("  courses: {}", COURSES.join(", "));
        }
    }
    if err.is_retryable() {
        eprintln!("Run the command again to retry.");
    }
    ExitCode::FAILURE
}
