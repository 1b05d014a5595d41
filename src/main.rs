//! May Pasok Ba? - weather advisory TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use maypasok::action::Action;
use maypasok::api::{LocationOptions, LocationSource, WeatherClient};
use maypasok::components::{AdvisoryView, AdvisoryViewProps, Component};
use maypasok::config::{ConfigError, DEFAULT_WEATHER_BASE_URL, WeatherConfig, resolve_api_key};
use maypasok::effect::Effect;
use maypasok::logging::init_logging;
use maypasok::reducer::reducer;
use maypasok::share::share_to_terminal;
use maypasok::state::{AppState, Coordinates};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// May Pasok Ba? - is there school/work today?
#[derive(Parser, Debug)]
#[command(name = "maypasok")]
#[command(about = "Weather advisory: wind and rain thresholds for class/work suspension")]
struct Args {
    /// OpenWeatherMap API key (default: $OPENWEATHER_API_KEY, then $VITE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Fixed latitude instead of IP-based lookup
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Fixed longitude instead of IP-based lookup
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Weather API base URL
    #[arg(long, default_value = DEFAULT_WEATHER_BASE_URL)]
    base_url: String,

    /// Log file (the terminal is used by the UI)
    #[arg(long, default_value = "maypasok.log")]
    log_file: PathBuf,

    #[command(flatten)]
    debug: DebugCliArgs,
}

/// Collaborators the effects run against
#[derive(Debug)]
struct Services {
    weather: Result<WeatherClient, ConfigError>,
    location: LocationSource,
    location_options: LocationOptions,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum AdvisoryComponentId {
    View,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum AdvisoryContext {
    Main,
}

impl EventRoutingState<AdvisoryComponentId, AdvisoryContext> for AppState {
    fn focused(&self) -> Option<AdvisoryComponentId> {
        Some(AdvisoryComponentId::View)
    }

    fn modal(&self) -> Option<AdvisoryComponentId> {
        None
    }

    fn binding_context(&self, _id: AdvisoryComponentId) -> AdvisoryContext {
        AdvisoryContext::Main
    }

    fn default_context(&self) -> AdvisoryContext {
        AdvisoryContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // A missing .env is fine; the key may come from the flag or the shell.
    let _ = dotenvy::dotenv();

    let Args {
        api_key,
        lat,
        lon,
        base_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    init_logging(&log_file)?;

    let weather = WeatherConfig::new(resolve_api_key(api_key), base_url).map(WeatherClient::new);
    if let Err(error) = &weather {
        tracing::warn!(%error, "weather fetches will fail");
    }

    let location = match (lat, lon) {
        (Some(lat), Some(lon)) => LocationSource::Fixed(Coordinates { lat, lon }),
        _ => LocationSource::ip_lookup(),
    };
    tracing::info!(?location, "starting");

    let services = Arc::new(Services {
        weather,
        location,
        location_options: LocationOptions::default(),
    });

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, services).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct AdvisoryUi {
    view: AdvisoryView,
}

impl AdvisoryUi {
    fn new() -> Self {
        Self { view: AdvisoryView }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<AdvisoryComponentId>,
    ) {
        event_ctx.set_component_area(AdvisoryComponentId::View, area);

        let props = AdvisoryViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = AdvisoryViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    services: Arc<Services>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(AdvisoryUi::new()));
    let mut bus: EventBus<AppState, Action, AdvisoryComponentId, AdvisoryContext> =
        EventBus::new();
    let keybindings: Keybindings<AdvisoryContext> = Keybindings::new();

    let ui_view = Rc::clone(&ui);
    bus.register(AdvisoryComponentId::View, move |event, state| {
        ui_view.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    // Mounting the view requests the location, same as pressing "Get location".
    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::LocationRequest),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &services),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, services: &Arc<Services>) {
    match effect {
        Effect::RequestLocation => {
            let services = Arc::clone(services);
            ctx.tasks().spawn("location", async move {
                match services.location.locate(&services.location_options).await {
                    Ok(coords) => Action::LocationDidLoad(coords),
                    Err(e) => Action::LocationDidError(e.to_string()),
                }
            });
        }
        Effect::FetchWeather { generation, coords } => {
            let client = services.weather.clone();
            ctx.tasks().spawn("weather", async move {
                let result = match client {
                    Ok(client) => client.fetch(coords).await.map_err(|e| e.to_string()),
                    Err(e) => Err(e.to_string()),
                };
                match result {
                    Ok(sample) => Action::WeatherDidLoad { generation, sample },
                    Err(error) => Action::WeatherDidError { generation, error },
                }
            });
        }
        Effect::Share { title, url } => {
            ctx.tasks().spawn("share", async move {
                match share_to_terminal(&mut io::stdout(), title, url) {
                    Ok(()) => Action::ShareDidComplete,
                    Err(e) => Action::ShareDidError(e.to_string()),
                }
            });
        }
    }
}
